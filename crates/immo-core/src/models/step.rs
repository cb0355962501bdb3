//! Journey step model definition and related functionality.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::StepStatus;

/// Symbolic icon attached to each journey step.
///
/// The set is fixed by the journey template; the front end maps these to
/// whatever glyphs it renders with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StepIcon {
    MessageSquare,
    Phone,
    Users,
    FileText,
    Camera,
    ClipboardCheck,
}

impl FromStr for StepIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "message-square" => Ok(StepIcon::MessageSquare),
            "phone" => Ok(StepIcon::Phone),
            "users" => Ok(StepIcon::Users),
            "file-text" => Ok(StepIcon::FileText),
            "camera" => Ok(StepIcon::Camera),
            "clipboard-check" => Ok(StepIcon::ClipboardCheck),
            _ => Err(format!("Invalid step icon: {s}")),
        }
    }
}

impl StepIcon {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StepIcon::MessageSquare => "message-square",
            StepIcon::Phone => "phone",
            StepIcon::Users => "users",
            StepIcon::FileText => "file-text",
            StepIcon::Camera => "camera",
            StepIcon::ClipboardCheck => "clipboard-check",
        }
    }
}

/// Represents one stage of a lead's relationship journey.
///
/// Step ids are the fixed business sequence 1..6; the journey is never
/// reordered or resized after the lead is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JourneyStep {
    /// Position in the fixed journey sequence (1-indexed, dense)
    pub id: u32,

    /// Short title of the stage
    pub title: String,

    /// What the stage involves
    pub description: String,

    /// Symbolic icon for the stage
    pub icon: StepIcon,

    /// Current status of the step
    pub status: StepStatus,

    /// Timestamp when the step was completed (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// When the step is due (linear schedule from lead creation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<Timestamp>,

    /// Weak reference to the task mirrored onto the task board
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
}
