//! SQLite-backed local storage.
//!
//! This module provides the on-disk implementation of
//! [`crate::storage::SlotStorage`]: a single `slots` table keyed by slot name,
//! holding the serialized value and the time it was last written.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, StorageResultExt};

pub mod schema;
pub mod slot_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database with the same schema.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().storage_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
