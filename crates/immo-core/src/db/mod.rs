//! Database operations and SQLite management for leads, journeys, and tasks.
//!
//! This module provides low-level database operations for the Immo back
//! office. It handles SQLite database connections, schema management, and
//! provides specialized query interfaces for leads (with their embedded
//! journeys) and board tasks.
//!
//! All mutating operations run inside a single transaction; in particular
//! a journey step completion and the task it mirrors onto the board commit
//! or roll back together.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{Connection, types::Type};

use crate::error::{DatabaseResultExt, Result};

pub mod lead_queries;
pub mod migrations;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Parses an RFC 3339 timestamp column, reporting the column index on
/// failure so rusqlite's error points at the right spot.
pub(crate) fn parse_timestamp_column(idx: usize, value: String) -> rusqlite::Result<Timestamp> {
    value
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Parses a nullable RFC 3339 timestamp column.
pub(crate) fn parse_optional_timestamp(
    idx: usize,
    value: Option<String>,
) -> rusqlite::Result<Option<Timestamp>> {
    value.map(|v| parse_timestamp_column(idx, v)).transpose()
}

/// Builds a conversion error for a text column holding an invalid enum
/// value.
pub(crate) fn invalid_column(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}
