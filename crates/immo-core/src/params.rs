//! Parameter structures for desk operations.
//!
//! Shared parameter structures used across interfaces (CLI today, others
//! later) without framework-specific derives. Interface layers define
//! wrapper structs with their own derives (clap's `Args`, etc.) and convert
//! into these via `From` impls, so the core stays free of UI dependencies.
//!
//! Statuses, ratings, priorities, and timestamps cross this boundary as
//! strings; each parameter struct exposes a `validate` method that parses
//! them into the typed model representations and reports
//! `DeskError::InvalidInput` with the offending field name.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DeskError, Result},
    models::{
        LeadFilter, LeadRating, LeadStatus, RecurrenceKind, RecurrenceRule, TaskFilter,
        TaskPriority, TaskStatus,
    },
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show, delete, and favorite-toggle operations on both leads and
/// tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

fn parse_field<T>(field: &str, value: &str, expected: &str) -> Result<T>
where
    T: FromStr,
{
    T::from_str(value).map_err(|_| {
        DeskError::invalid_input(field, format!("Invalid {field}: {value}. Must be {expected}"))
    })
}

fn parse_timestamp(field: &str, value: &str) -> Result<Timestamp> {
    Timestamp::from_str(value).map_err(|e| {
        DeskError::invalid_input(field, format!("Invalid timestamp '{value}': {e}"))
    })
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeskError::invalid_input(field, "must not be empty"));
    }
    Ok(())
}

/// Parameters for creating a new lead.
///
/// The four contact fields are required and must be non-empty; everything
/// else falls back to defaults (`new` status, `neutral` rating, score 0).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLead {
    /// First name (required, non-empty)
    pub first_name: String,
    /// Last name (required, non-empty)
    pub last_name: String,
    /// Contact email (required, non-empty)
    pub email: String,
    /// Contact phone (required, non-empty)
    pub phone: String,
    /// Property the lead is interested in
    pub property_interest: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Initial lead score
    pub score: Option<f64>,
    /// Label of the scoring formula
    pub formula: Option<String>,
    /// Initial pipeline status ('new', 'contacted', ...)
    pub status: Option<String>,
    /// Initial rating ('hot', 'warm', 'cold', 'neutral', 'blocked')
    pub rating: Option<String>,
}

impl CreateLead {
    /// Validate creation parameters and parse the typed fields.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When a contact field is empty or a
    ///   status/rating string does not parse
    pub fn validate(&self) -> Result<(LeadStatus, LeadRating)> {
        require_non_empty("first_name", &self.first_name)?;
        require_non_empty("last_name", &self.last_name)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("phone", &self.phone)?;

        let status = match &self.status {
            Some(s) => parse_field("status", s, "one of 'new', 'contacted', 'qualified', 'proposal', 'negotiation', 'closed', 'lost'")?,
            None => LeadStatus::default(),
        };
        let rating = match &self.rating {
            Some(r) => parse_field("rating", r, "one of 'hot', 'warm', 'cold', 'neutral', 'blocked'")?,
            None => LeadRating::default(),
        };

        Ok((status, rating))
    }
}

/// Parameters for updating an existing lead's profile.
///
/// All fields except the ID are optional; `None` leaves the stored value
/// unchanged. The journey cannot be modified through this operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLead {
    /// Lead ID to update (required)
    pub id: u64,
    /// Updated first name
    pub first_name: Option<String>,
    /// Updated last name
    pub last_name: Option<String>,
    /// Updated contact email
    pub email: Option<String>,
    /// Updated contact phone
    pub phone: Option<String>,
    /// Updated property interest
    pub property_interest: Option<String>,
    /// Updated notes
    pub notes: Option<String>,
    /// Updated lead score
    pub score: Option<f64>,
    /// Updated scoring formula label
    pub formula: Option<String>,
    /// New pipeline status ('new', 'contacted', ...)
    pub status: Option<String>,
    /// New rating ('hot', 'warm', 'cold', 'neutral', 'blocked')
    pub rating: Option<String>,
    /// When the lead was last contacted (RFC 3339 timestamp)
    pub last_contact_at: Option<String>,
    /// When the next follow-up is scheduled (RFC 3339 timestamp)
    pub next_follow_up: Option<String>,
}

impl UpdateLead {
    /// Validate update parameters and parse the typed fields.
    ///
    /// Returns the parsed status, rating, and timestamps. Contact fields
    /// may be changed but never blanked out.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When a status, rating, or timestamp
    ///   string fails to parse, or a provided contact field is empty
    pub fn validate(
        &self,
    ) -> Result<(
        Option<LeadStatus>,
        Option<LeadRating>,
        Option<Timestamp>,
        Option<Timestamp>,
    )> {
        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if let Some(value) = value {
                require_non_empty(field, value)?;
            }
        }

        let status = match &self.status {
            Some(s) => Some(parse_field("status", s, "one of 'new', 'contacted', 'qualified', 'proposal', 'negotiation', 'closed', 'lost'")?),
            None => None,
        };
        let rating = match &self.rating {
            Some(r) => Some(parse_field("rating", r, "one of 'hot', 'warm', 'cold', 'neutral', 'blocked'")?),
            None => None,
        };
        let last_contact_at = match &self.last_contact_at {
            Some(t) => Some(parse_timestamp("last_contact_at", t)?),
            None => None,
        };
        let next_follow_up = match &self.next_follow_up {
            Some(t) => Some(parse_timestamp("next_follow_up", t)?),
            None => None,
        };

        Ok((status, rating, last_contact_at, next_follow_up))
    }
}

/// Parameters for listing leads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListLeads {
    /// Case-insensitive name fragment to match against first or last name
    pub name: Option<String>,
    /// Filter by pipeline status
    pub status: Option<String>,
    /// Filter by rating
    pub rating: Option<String>,
    /// Only show favorite leads
    #[serde(default)]
    pub favorites: bool,
}

impl ListLeads {
    /// Parse the filter strings into a typed [`LeadFilter`].
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When a status or rating string does
    ///   not parse
    pub fn validate(&self) -> Result<LeadFilter> {
        let status = match &self.status {
            Some(s) => Some(parse_field("status", s, "a valid lead status")?),
            None => None,
        };
        let rating = match &self.rating {
            Some(r) => Some(parse_field("rating", r, "a valid lead rating")?),
            None => None,
        };

        Ok(LeadFilter {
            name_contains: self.name.clone(),
            status,
            rating,
            favorites_only: self.favorites,
        })
    }
}

/// Parameters for completing a journey step.
///
/// Only the step currently in progress can be completed; the successor
/// step is activated and mirrored onto the task board atomically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteStep {
    /// ID of the lead whose journey advances
    pub lead_id: u64,
    /// Step to complete (1-indexed position in the journey)
    pub step_id: u32,
}

/// Parameters for creating a standalone task on the board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Title of the task (required, non-empty)
    pub title: String,
    /// What needs to be done
    pub description: Option<String>,
    /// Property or lead-interest descriptor
    pub property_interest: Option<String>,
    /// When the task is due (RFC 3339 timestamp, defaults to 24h from now)
    pub due_at: Option<String>,
    /// Priority bucket ('urgent', 'medium', 'normal')
    pub priority: Option<String>,
    /// Lead to attach the task to
    pub lead_id: Option<u64>,
    /// Repeat every N months
    pub recur_every_months: Option<u32>,
    /// Preferred day of week for recurrences (0 = Sunday)
    pub recur_day_of_week: Option<u8>,
}

impl CreateTask {
    /// Validate creation parameters and parse the typed fields.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When the title is empty, the due
    ///   timestamp or priority does not parse, or the recurrence rule is
    ///   out of range
    pub fn validate(&self) -> Result<(Option<Timestamp>, TaskPriority, Option<RecurrenceRule>)> {
        require_non_empty("title", &self.title)?;

        let due_at = match &self.due_at {
            Some(t) => Some(parse_timestamp("due_at", t)?),
            None => None,
        };
        let priority = match &self.priority {
            Some(p) => parse_field("priority", p, "one of 'urgent', 'medium', 'normal'")?,
            None => TaskPriority::default(),
        };

        let recurrence = match self.recur_every_months {
            Some(0) => {
                return Err(DeskError::invalid_input(
                    "recur_every_months",
                    "must be at least 1",
                ));
            }
            Some(every) => {
                if let Some(dow) = self.recur_day_of_week {
                    if dow > 6 {
                        return Err(DeskError::invalid_input(
                            "recur_day_of_week",
                            "must be between 0 (Sunday) and 6 (Saturday)",
                        ));
                    }
                }
                Some(RecurrenceRule {
                    kind: RecurrenceKind::Monthly,
                    every,
                    day_of_week: self.recur_day_of_week,
                })
            }
            None => None,
        };

        Ok((due_at, priority, recurrence))
    }
}

/// Parameters for moving a task to a new board status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskStatus {
    /// Task ID to update (required)
    pub id: u64,
    /// New board status ('not_started', 'in_progress', 'blocked', 'completed')
    pub status: String,
}

impl UpdateTaskStatus {
    /// Parse the status string.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When the status string does not parse
    pub fn validate(&self) -> Result<TaskStatus> {
        parse_field(
            "status",
            &self.status,
            "one of 'not_started', 'in_progress', 'blocked', 'completed'",
        )
    }
}

/// Parameters for listing tasks on the board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasks {
    /// Only show tasks due today
    #[serde(default)]
    pub today: bool,
    /// Filter by board status
    pub status: Option<String>,
    /// Filter by priority bucket
    pub priority: Option<String>,
    /// Only show tasks spawned by a journey step
    #[serde(default)]
    pub journey_only: bool,
    /// Only show tasks attached to this lead
    pub lead_id: Option<u64>,
}

impl ListTasks {
    /// Parse the filter strings into a typed [`TaskFilter`].
    ///
    /// The `today` flag is applied by the caller, which owns the clock and
    /// turns it into a due-date window.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When a status or priority string does
    ///   not parse
    pub fn validate(&self) -> Result<TaskFilter> {
        let status = match &self.status {
            Some(s) => Some(parse_field("status", s, "a valid task status")?),
            None => None,
        };
        let priority = match &self.priority {
            Some(p) => Some(parse_field("priority", p, "a valid task priority")?),
            None => None,
        };

        Ok(TaskFilter {
            status,
            priority,
            due_after: None,
            due_before: None,
            journey_only: self.journey_only,
            lead_id: self.lead_id,
        })
    }
}
