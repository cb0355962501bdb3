//! Request types for updating models.

use jiff::Timestamp;

use super::{LeadRating, LeadStatus};
use crate::{error::DeskError, params::UpdateLead};

/// Validated partial update for a lead's profile fields.
///
/// `None` fields are left unchanged. The journey is never touched by a
/// profile update; it only advances through `complete_step`.
#[derive(Debug, Default)]
pub struct UpdateLeadRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub property_interest: Option<String>,
    pub notes: Option<String>,
    pub score: Option<f64>,
    pub formula: Option<String>,
    pub status: Option<LeadStatus>,
    pub rating: Option<LeadRating>,
    pub last_contact_at: Option<Timestamp>,
    pub next_follow_up: Option<Timestamp>,
}

impl UpdateLeadRequest {
    /// Whether the request carries any change at all.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.property_interest.is_none()
            && self.notes.is_none()
            && self.score.is_none()
            && self.formula.is_none()
            && self.status.is_none()
            && self.rating.is_none()
            && self.last_contact_at.is_none()
            && self.next_follow_up.is_none()
    }
}

impl TryFrom<UpdateLead> for UpdateLeadRequest {
    type Error = DeskError;

    /// Convert UpdateLead parameters into a validated UpdateLeadRequest.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When a status, rating, or timestamp
    ///   string fails to parse, or a contact field would become empty
    fn try_from(params: UpdateLead) -> Result<Self, Self::Error> {
        let (status, rating, last_contact_at, next_follow_up) = params.validate()?;

        Ok(Self {
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            phone: params.phone,
            property_interest: params.property_interest,
            notes: params.notes,
            score: params.score,
            formula: params.formula,
            status,
            rating,
            last_contact_at,
            next_follow_up,
        })
    }
}
