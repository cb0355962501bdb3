//! Lead handler operations that return formatted wrapper types for the Desk.

use super::Desk;
use crate::{
    display::{CreateResult, DeleteResult, LeadSummaries, OperationStatus, UpdateResult},
    error::Result,
    models::{Lead, LeadMetrics},
    params::{CompleteStep, CreateLead, Id, ListLeads, UpdateLead},
};

impl Desk {
    /// Handle listing leads with optional filtering.
    ///
    /// Returns summaries with journey progress counts for consistent list
    /// display across interfaces.
    pub async fn list_leads_summary(&self, params: &ListLeads) -> Result<LeadSummaries> {
        let filter = params.validate()?;
        let summaries = self.list_leads(filter).await?;
        Ok(LeadSummaries(summaries))
    }

    /// Handle showing a complete lead with its journey checklist.
    pub async fn show_lead(&self, params: &Id) -> Result<Option<Lead>> {
        self.get_lead(params).await
    }

    /// Handle creating a new lead.
    pub async fn create_lead_result(&self, params: &CreateLead) -> Result<CreateResult<Lead>> {
        let lead = self.create_lead(params).await?;
        Ok(CreateResult::new(lead))
    }

    /// Handle updating a lead's profile with change tracking.
    ///
    /// Builds a human-readable list of the fields that changed for the
    /// confirmation output.
    pub async fn update_lead_result(&self, params: &UpdateLead) -> Result<UpdateResult<Lead>> {
        let lead = self.update_lead(params).await?;

        let mut changes = Vec::new();
        if params.first_name.is_some() {
            changes.push("Updated first name".to_string());
        }
        if params.last_name.is_some() {
            changes.push("Updated last name".to_string());
        }
        if params.email.is_some() {
            changes.push("Updated email".to_string());
        }
        if params.phone.is_some() {
            changes.push("Updated phone".to_string());
        }
        if params.property_interest.is_some() {
            changes.push("Updated property interest".to_string());
        }
        if params.notes.is_some() {
            changes.push("Updated notes".to_string());
        }
        if params.score.is_some() {
            changes.push("Updated score".to_string());
        }
        if params.formula.is_some() {
            changes.push("Updated scoring formula".to_string());
        }
        if let Some(ref status) = params.status {
            changes.push(format!("Changed status to {status}"));
        }
        if let Some(ref rating) = params.rating {
            changes.push(format!("Changed rating to {rating}"));
        }
        if params.last_contact_at.is_some() {
            changes.push("Recorded last contact".to_string());
        }
        if params.next_follow_up.is_some() {
            changes.push("Scheduled next follow-up".to_string());
        }

        Ok(UpdateResult::with_changes(lead, changes))
    }

    /// Handle toggling the favorite flag on a lead.
    pub async fn toggle_favorite_result(&self, params: &Id) -> Result<OperationStatus> {
        let lead = self.toggle_favorite(params).await?;
        let message = if lead.favorite {
            format!("Lead '{}' (ID: {}) pinned as favorite", lead.full_name(), lead.id)
        } else {
            format!("Lead '{}' (ID: {}) unpinned", lead.full_name(), lead.id)
        };
        Ok(OperationStatus::success(message))
    }

    /// Handle completing a journey step.
    ///
    /// Returns the full updated lead so the caller can render the advanced
    /// journey checklist.
    pub async fn complete_step_result(&self, params: &CompleteStep) -> Result<Lead> {
        self.complete_step(params).await
    }

    /// Handle permanently deleting a lead.
    ///
    /// Uses get-before-delete so the deleted lead's details can be shown
    /// for confirmation. Returns `None` if the lead doesn't exist.
    pub async fn delete_lead_result(&self, params: &Id) -> Result<Option<DeleteResult<Lead>>> {
        let Some(lead) = self.get_lead(params).await? else {
            return Ok(None);
        };

        self.delete_lead(params).await?;
        Ok(Some(DeleteResult::new(lead)))
    }

    /// Handle computing aggregate pipeline metrics.
    pub async fn metrics_summary(&self) -> Result<LeadMetrics> {
        self.lead_metrics().await
    }
}
