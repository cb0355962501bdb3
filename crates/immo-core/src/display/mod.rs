//! Display formatting functions and result types.
//!
//! This module provides wrapper types for operation results and collection
//! formatting, enabling consistent markdown output across different
//! contexts (lists, operations, metrics).
//!
//! Domain models carry their own `Display` implementations (in
//! [`models`]); the wrappers here add context-specific framing such as
//! "Created lead with ID: ..." headers and empty-collection messages.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (LeadSummaries, Tasks)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{LeadSummaries, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
