//! Slot reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{Result, StorageResultExt},
    storage::SlotStorage,
};

const SELECT_SLOT_SQL: &str = "SELECT value FROM slots WHERE key = ?1";
const SELECT_SLOT_UPDATED_SQL: &str = "SELECT updated_at FROM slots WHERE key = ?1";
const UPSERT_SLOT_SQL: &str = "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_SLOT_SQL: &str = "DELETE FROM slots WHERE key = ?1";

impl SlotStorage for super::Database {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to read slot")
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_SLOT_SQL, params![key, value, now])
            .storage_context("Failed to write slot")?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_SLOT_SQL, params![key])
            .storage_context("Failed to remove slot")?;
        Ok(())
    }

    fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_SLOT_UPDATED_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to read slot timestamp")?;

        // An unparseable write time reads as unknown.
        Ok(raw.and_then(|s| s.parse::<Timestamp>().ok()))
    }
}
