//! Core library for the Immo property-management back office.
//!
//! This crate provides the core business logic for managing leads, their
//! fixed 6-step relationship journeys, and the mirrored task board,
//! including database operations, data models, and error handling.
//!
//! # Journey and Task Board
//!
//! Every lead carries a journey of 6 ordered steps (first contact through
//! client form) that completes strictly in order. Completing the active
//! step activates the next one and mirrors it onto the general task board
//! as a `not_started` task; the two writes commit in one transaction. The
//! board itself is free-form: tasks move between statuses without
//! restriction and never push the journey forward.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   direct formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and
//!   specialized formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use immo_core::{DeskBuilder, params::{CreateLead, ListLeads}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a desk instance
//! let desk = DeskBuilder::new()
//!     .with_database_path(Some("immo.db"))
//!     .build()
//!     .await?;
//!
//! // Capture a new lead; the journey materializes with step 1 active
//! let lead = desk
//!     .create_lead(&CreateLead {
//!         first_name: "Marie".to_string(),
//!         last_name: "Durand".to_string(),
//!         email: "marie@example.com".to_string(),
//!         phone: "0612345678".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Created lead: {lead}");
//!
//! // List leads as summaries
//! let leads = desk.list_leads_summary(&ListLeads::default()).await?;
//! for lead in &leads {
//!     println!("Lead: {}", lead.full_name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod desk;
pub mod display;
pub mod error;
pub mod journey;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use db::Database;
pub use desk::{Desk, DeskBuilder};
pub use display::{
    CreateResult, DeleteResult, LeadSummaries, LocalDateTime, OperationStatus, Tasks, UpdateResult,
};
pub use error::{DeskError, Result};
pub use models::{
    JourneyStep, Lead, LeadFilter, LeadMetrics, LeadRating, LeadStatus, LeadSummary, StepIcon,
    StepStatus, Task, TaskFilter, TaskPriority, TaskStatus, UpdateLeadRequest,
};
pub use params::{
    CompleteStep, CreateLead, CreateTask, Id, ListLeads, ListTasks, UpdateLead, UpdateTaskStatus,
};
