//! Builder for creating and configuring Desk instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Desk;
use crate::{
    db::Database,
    error::{DeskError, Result},
};

/// Builder for creating and configuring Desk instances.
#[derive(Debug, Clone)]
pub struct DeskBuilder {
    database_path: Option<PathBuf>,
}

impl DeskBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/immo/immo.db` or `~/.local/share/immo/immo.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured desk instance.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::FileSystem` if the database path is invalid
    /// Returns `DeskError::Database` if database initialization fails
    pub async fn build(self) -> Result<Desk> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DeskError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), DeskError>(())
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Desk::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("immo")
            .place_data_file("immo.db")
            .map_err(|e| DeskError::XdgDirectory(e.to_string()))
    }
}

impl Default for DeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}
