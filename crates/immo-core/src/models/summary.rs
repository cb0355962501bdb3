//! Lead summary and metrics types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Lead, LeadRating, LeadStatus, StepStatus};

/// Summary information about a lead with journey progress statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadSummary {
    /// Lead ID
    pub id: u64,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Property-interest descriptor
    pub property_interest: String,
    /// Pipeline status
    pub status: LeadStatus,
    /// Rating
    pub rating: LeadRating,
    /// Numeric lead score
    pub score: f64,
    /// Favorite flag
    pub favorite: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Total number of journey steps (always 6 for a well-formed lead)
    pub total_steps: u32,
    /// Number of completed journey steps
    pub completed_steps: u32,
}

impl LeadSummary {
    /// Full name used in list displays.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<&Lead> for LeadSummary {
    fn from(lead: &Lead) -> Self {
        let total_steps = lead.journey.len() as u32;
        let completed_steps = lead
            .journey
            .iter()
            .filter(|step| step.status == StepStatus::Completed)
            .count() as u32;

        Self {
            id: lead.id,
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            property_interest: lead.property_interest.clone(),
            status: lead.status,
            rating: lead.rating,
            score: lead.score,
            favorite: lead.favorite,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
            total_steps,
            completed_steps,
        }
    }
}

/// Aggregate pipeline metrics across all leads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadMetrics {
    /// Total number of leads
    pub total: u32,
    /// Leads still in the `new` status
    pub new_leads: u32,
    /// Leads in the `qualified` status
    pub qualified_leads: u32,
    /// Leads in the `closed` status
    pub closed_leads: u32,
    /// closed / total, as a percentage (0 when there are no leads)
    pub conversion_rate: f64,
    /// Mean lead score (0 when there are no leads)
    pub average_score: f64,
    /// Lead count per pipeline status, in pipeline order
    pub status_distribution: Vec<(LeadStatus, u32)>,
    /// Lead count per rating, hottest first
    pub rating_distribution: Vec<(LeadRating, u32)>,
}
