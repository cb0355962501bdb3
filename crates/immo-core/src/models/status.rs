//! Status enumerations for leads, journey steps, and tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of lead pipeline statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    /// Lead was just captured and has not been worked yet
    #[default]
    New,

    /// Lead has been contacted at least once
    Contacted,

    /// Lead is qualified as a realistic prospect
    Qualified,

    /// A proposal has been sent
    Proposal,

    /// Terms are being negotiated
    Negotiation,

    /// Lead converted into a client
    Closed,

    /// Lead dropped out of the pipeline
    Lost,
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "qualified" => Ok(LeadStatus::Qualified),
            "proposal" => Ok(LeadStatus::Proposal),
            "negotiation" => Ok(LeadStatus::Negotiation),
            "closed" => Ok(LeadStatus::Closed),
            "lost" => Ok(LeadStatus::Lost),
            _ => Err(format!("Invalid lead status: {s}")),
        }
    }
}

impl LeadStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Proposal => "proposal",
            LeadStatus::Negotiation => "negotiation",
            LeadStatus::Closed => "closed",
            LeadStatus::Lost => "lost",
        }
    }

    /// All pipeline statuses, in pipeline order.
    pub const ALL: [LeadStatus; 7] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Proposal,
        LeadStatus::Negotiation,
        LeadStatus::Closed,
        LeadStatus::Lost,
    ];
}

/// Type-safe enumeration of lead ratings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadRating {
    /// Ready to move quickly
    Hot,

    /// Interested but needs nurturing
    Warm,

    /// Low engagement
    Cold,

    /// Not yet rated
    #[default]
    Neutral,

    /// Do not contact
    Blocked,
}

impl FromStr for LeadRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hot" => Ok(LeadRating::Hot),
            "warm" => Ok(LeadRating::Warm),
            "cold" => Ok(LeadRating::Cold),
            "neutral" => Ok(LeadRating::Neutral),
            "blocked" => Ok(LeadRating::Blocked),
            _ => Err(format!("Invalid lead rating: {s}")),
        }
    }
}

impl LeadRating {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadRating::Hot => "hot",
            LeadRating::Warm => "warm",
            LeadRating::Cold => "cold",
            LeadRating::Neutral => "neutral",
            LeadRating::Blocked => "blocked",
        }
    }

    /// All ratings, hottest first.
    pub const ALL: [LeadRating; 5] = [
        LeadRating::Hot,
        LeadRating::Warm,
        LeadRating::Cold,
        LeadRating::Neutral,
        LeadRating::Blocked,
    ];
}

/// Type-safe enumeration of journey step statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Step has not been reached yet
    Pending,

    /// Step is the one currently being worked
    InProgress,

    /// Step has been completed
    Completed,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(StepStatus::Pending),
            "inprogress" | "in_progress" => Ok(StepStatus::InProgress),
            "completed" => Ok(StepStatus::Completed),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::InProgress => "in_progress",
            StepStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for completed steps
    /// - `➤ In progress` - Arrow for the active step
    /// - `○ Pending` - Circle for steps not yet reached
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Completed => "✓ Completed",
            StepStatus::InProgress => "➤ In progress",
            StepStatus::Pending => "○ Pending",
        }
    }
}

/// Type-safe enumeration of task statuses.
///
/// Tasks may move between any two statuses in any order; the task board
/// allows arbitrary drags, so no transition validation is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has not been started
    #[default]
    NotStarted,

    /// Task is being worked on
    InProgress,

    /// Task is blocked on something external
    Blocked,

    /// Task is done
    Completed,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notstarted" | "not_started" => Ok(TaskStatus::NotStarted),
            "inprogress" | "in_progress" => Ok(TaskStatus::InProgress),
            "blocked" => Ok(TaskStatus::Blocked),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not_started",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "○ Not started",
            TaskStatus::InProgress => "➤ In progress",
            TaskStatus::Blocked => "⊘ Blocked",
            TaskStatus::Completed => "✓ Completed",
        }
    }
}

/// Type-safe enumeration of task priorities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Needs attention immediately
    Urgent,

    /// Above routine work
    Medium,

    /// Routine work
    #[default]
    Normal,
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "urgent" => Ok(TaskPriority::Urgent),
            "medium" => Ok(TaskPriority::Medium),
            "normal" => Ok(TaskPriority::Normal),
            _ => Err(format!("Invalid task priority: {s}")),
        }
    }
}

impl TaskPriority {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Urgent => "urgent",
            TaskPriority::Medium => "medium",
            TaskPriority::Normal => "normal",
        }
    }
}
