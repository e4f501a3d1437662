//! Builder for creating and configuring Wizard instances.

use std::path::{Path, PathBuf};

use log::info;

use super::Wizard;
use crate::{
    db::Database,
    error::{CaptureError, Result},
    persistence::DraftStore,
};

/// Builder for wizards and draft stores backed by the SQLite slot table.
#[derive(Debug, Clone, Default)]
pub struct WizardBuilder {
    database_path: Option<PathBuf>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/bcp-capture/bcp.db` or `~/.local/share/bcp-capture/bcp.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the storage and loads any stored draft into a new wizard.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::FileSystem` if the database directory cannot be created
    /// Returns `CaptureError::Storage` if database initialization fails
    pub fn build(self) -> Result<Wizard<Database>> {
        Ok(Wizard::new(self.open_database()?))
    }

    /// Opens the storage for draft access without a wizard.
    ///
    /// # Errors
    ///
    /// See [`WizardBuilder::build`].
    pub fn build_store(self) -> Result<DraftStore<Database>> {
        Ok(DraftStore::new(self.open_database()?))
    }

    fn open_database(self) -> Result<Database> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CaptureError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        info!("Opening draft storage at {}", db_path.display());
        Database::new(&db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("bcp-capture")
            .place_data_file("bcp.db")
            .map_err(|e| CaptureError::XdgDirectory(e.to_string()))
    }
}
