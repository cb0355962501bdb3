//! Filter types for querying leads and tasks.

use jiff::Timestamp;

use super::{LeadRating, LeadStatus, TaskPriority, TaskStatus};

/// Filter options for querying leads.
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    /// Filter by name fragment (case-insensitive partial match on
    /// first or last name)
    pub name_contains: Option<String>,

    /// Filter by pipeline status
    pub status: Option<LeadStatus>,

    /// Filter by rating
    pub rating: Option<LeadRating>,

    /// Only show favorite leads
    pub favorites_only: bool,
}

/// Filter options for querying tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Filter by board status
    pub status: Option<TaskStatus>,

    /// Filter by priority bucket
    pub priority: Option<TaskPriority>,

    /// Only tasks due at or after this instant
    pub due_after: Option<Timestamp>,

    /// Only tasks due at or before this instant
    pub due_before: Option<Timestamp>,

    /// Only tasks spawned by a journey step
    pub journey_only: bool,

    /// Only tasks attached to this lead
    pub lead_id: Option<u64>,
}

impl TaskFilter {
    /// Filter for tasks due within the given window, sorted by due date by
    /// the query layer. Used for the "today" board view.
    pub fn due_between(start: Timestamp, end: Timestamp) -> Self {
        Self {
            due_after: Some(start),
            due_before: Some(end),
            ..Default::default()
        }
    }
}
