//! Data models for leads, journey steps, and tasks.
//!
//! This module contains the core domain models of the Immo back office.
//! Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.

pub mod filters;
pub mod lead;
pub mod requests;
pub mod status;
pub mod step;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use filters::{LeadFilter, TaskFilter};
pub use lead::Lead;
pub use requests::UpdateLeadRequest;
pub use status::{LeadRating, LeadStatus, StepStatus, TaskPriority, TaskStatus};
pub use step::{JourneyStep, StepIcon};
pub use summary::{LeadMetrics, LeadSummary};
pub use task::{RecurrenceKind, RecurrenceRule, Task};
