//! Task model definition and related functionality.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{TaskPriority, TaskStatus};

/// Recurrence cadence for a task.
///
/// Only monthly recurrence is supported; the rule carries the frequency in
/// months and an optional preferred day of week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Monthly,
}

impl FromStr for RecurrenceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(RecurrenceKind::Monthly),
            _ => Err(format!("Invalid recurrence kind: {s}")),
        }
    }
}

impl RecurrenceKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceKind::Monthly => "monthly",
        }
    }
}

/// Recurrence rule attached to a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurrenceRule {
    /// Cadence of the recurrence
    pub kind: RecurrenceKind,

    /// Every how many periods the task repeats (months for monthly)
    pub every: u32,

    /// Preferred day of week (0 = Sunday), when relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,
}

/// Represents an entry on the general task board.
///
/// Tasks spawned by the journey engine carry a back-reference to the step
/// that created them; they survive as historical records after the journey
/// advances past that step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// Lead the task relates to, if any (cleared when the lead is deleted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<u64>,

    /// Property or lead-interest descriptor the task relates to
    pub property_interest: String,

    /// Short title of the task
    pub title: String,

    /// What needs to be done
    pub description: String,

    /// When the task is due (UTC)
    pub due_at: Timestamp,

    /// Current status on the task board
    pub status: TaskStatus,

    /// Priority bucket
    pub priority: TaskPriority,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Recurrence rule, if the task repeats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceRule>,

    /// When the last recurring occurrence was generated from this task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_generated: Option<Timestamp>,

    /// Journey step (1..6) that spawned this task, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journey_step_id: Option<u32>,
}
