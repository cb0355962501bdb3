//! Lead model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{JourneyStep, LeadRating, LeadStatus, StepStatus};

/// Represents a prospective client progressing toward conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    /// Unique identifier for the lead
    pub id: u64,

    /// First name (non-empty)
    pub first_name: String,

    /// Last name (non-empty)
    pub last_name: String,

    /// Contact email (non-empty)
    pub email: String,

    /// Contact phone (non-empty)
    pub phone: String,

    /// Free-text descriptor of the property the lead is interested in
    pub property_interest: String,

    /// Position in the sales pipeline
    #[serde(default)]
    pub status: LeadStatus,

    /// How promising the lead currently looks
    #[serde(default)]
    pub rating: LeadRating,

    /// Free-form notes
    pub notes: String,

    /// Numeric lead score
    pub score: f64,

    /// Label of the formula used to compute the score
    pub formula: String,

    /// Whether the lead is pinned as a favorite
    pub favorite: bool,

    /// Timestamp when the lead was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the lead was last modified (UTC)
    pub updated_at: Timestamp,

    /// When the lead was last contacted, if ever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact_at: Option<Timestamp>,

    /// When the next follow-up is scheduled, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_follow_up: Option<Timestamp>,

    /// The fixed 6-step relationship journey, ordered by step id
    #[serde(default)]
    pub journey: Vec<JourneyStep>,
}

impl Lead {
    /// Full name used in task descriptions and list displays.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The journey step currently in progress, if any.
    ///
    /// Returns `None` once the whole journey is completed.
    pub fn active_step(&self) -> Option<&JourneyStep> {
        self.journey
            .iter()
            .find(|step| step.status == StepStatus::InProgress)
    }

    /// Number of completed journey steps.
    pub fn completed_steps(&self) -> u32 {
        self.journey
            .iter()
            .filter(|step| step.status == StepStatus::Completed)
            .count() as u32
    }
}
