//! Lead operations for the Desk.

use tokio::task;

use super::Desk;
use crate::{
    db::Database,
    error::{DeskError, Result},
    models::{Lead, LeadFilter, LeadMetrics, LeadSummary, UpdateLeadRequest},
    params::{CompleteStep, CreateLead, Id, UpdateLead},
};

impl Desk {
    /// Creates a new lead with its 6-step journey materialized.
    ///
    /// Step 1 is pre-activated and mirrored onto the task board in the
    /// same transaction as the lead insert.
    pub async fn create_lead(&self, params: &CreateLead) -> Result<Lead> {
        let (status, rating) = params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_lead(&params, status, rating)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a lead by its ID with the journey loaded.
    pub async fn get_lead(&self, params: &Id) -> Result<Option<Lead>> {
        let db_path = self.db_path.clone();
        let lead_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_lead(lead_id)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists lead summaries matching the filter.
    pub async fn list_leads(&self, filter: LeadFilter) -> Result<Vec<LeadSummary>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_lead_summaries(&filter)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Applies a partial update to a lead's profile fields.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::InvalidInput` if no field is being changed or a
    /// provided value fails validation.
    pub async fn update_lead(&self, params: &UpdateLead) -> Result<Lead> {
        let request = UpdateLeadRequest::try_from(params.clone())?;
        if request.is_empty() {
            return Err(DeskError::invalid_input(
                "update",
                "No fields to update. Provide at least one field to change.",
            ));
        }

        let db_path = self.db_path.clone();
        let lead_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_lead(lead_id, &request)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Flips the favorite flag on a lead.
    pub async fn toggle_favorite(&self, params: &Id) -> Result<Lead> {
        let db_path = self.db_path.clone();
        let lead_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.toggle_favorite(lead_id)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Completes the active journey step and activates its successor.
    ///
    /// Returns the full updated lead. The step transition and the task
    /// mirrored for the newly active step commit atomically.
    pub async fn complete_step(&self, params: &CompleteStep) -> Result<Lead> {
        let db_path = self.db_path.clone();
        let lead_id = params.lead_id;
        let step_id = params.step_id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.complete_step(lead_id, step_id)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a lead and its journey.
    /// This operation cannot be undone.
    pub async fn delete_lead(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let lead_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_lead(lead_id)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Computes aggregate pipeline metrics across all leads.
    pub async fn lead_metrics(&self) -> Result<LeadMetrics> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.lead_metrics()
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
