//! High-level desk API for managing leads and tasks.
//!
//! This module provides the main [`Desk`] interface for interacting with
//! the Immo back office. The desk acts as the central coordinator between
//! the application layers and the database, implementing all business
//! logic for lead, journey, and task operations.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (lead_handlers, │───▶│ (lead_ops,      │───▶│   (via db/)     │
//! │  task_handlers) │    │  task_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Desk`] instances with configuration
//! - [`lead_handlers`]: High-level lead operations returning display wrappers
//! - [`task_handlers`]: High-level task operations returning display wrappers
//! - [`lead_ops`]: Lead database operations (create, journey advance, metrics)
//! - [`task_ops`]: Task board database operations
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use immo_core::{DeskBuilder, params::{CreateLead, CompleteStep}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let desk = DeskBuilder::new().build().await?;
//!
//! // Capture a lead; its 6-step journey is materialized immediately
//! let lead = desk
//!     .create_lead(&CreateLead {
//!         first_name: "Marie".to_string(),
//!         last_name: "Durand".to_string(),
//!         email: "marie@example.com".to_string(),
//!         phone: "0612345678".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Complete the active step; the next one activates and lands on the
//! // task board
//! let lead = desk
//!     .complete_step(&CompleteStep { lead_id: lead.id, step_id: 1 })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod lead_handlers;
pub mod lead_ops;
pub mod task_handlers;
pub mod task_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::DeskBuilder;

/// Main desk interface for managing leads, journeys, and tasks.
pub struct Desk {
    pub(crate) db_path: PathBuf,
}

impl Desk {
    /// Creates a new desk with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
