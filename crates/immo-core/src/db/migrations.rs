//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, DeskError, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection; lead deletion relies on
        // the journey cascade and the task SET NULL
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if the formula column exists in the leads table; databases
        // created before lead scoring landed lack it
        let has_formula_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('leads') WHERE name = 'formula'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_formula_column {
            self.connection
                .execute("ALTER TABLE leads ADD COLUMN formula TEXT NOT NULL DEFAULT ''", [])
                .map_err(|e| {
                    DeskError::database_error("Failed to add formula column to leads table", e)
                })?;
        }

        Ok(())
    }
}
