//! Draft persistence adapter.
//!
//! [`DraftStore`] owns the one storage slot the wizard uses. It is the
//! boundary where storage errors stop: reads that fail or return malformed
//! content degrade to "no draft", writes and removals that fail are logged and
//! otherwise ignored.

use jiff::Timestamp;
use log::{info, warn};

use crate::{merge::merge_onto_default, models::DraftRecord, storage::SlotStorage};

/// Fixed key of the draft slot.
pub const DRAFT_KEY: &str = "bcp_draft";

/// Reads and writes the draft slot of a [`SlotStorage`].
#[derive(Debug)]
pub struct DraftStore<S> {
    storage: S,
}

impl<S: SlotStorage> DraftStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Overwrite the slot with `record`. Returns whether the write landed.
    ///
    /// A record whose JSON form would not load back (a non-finite
    /// criticality serializes as `null`) is not written.
    pub fn save(&mut self, record: &DraftRecord) -> bool {
        let serialized = match serde_json::to_string(record) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize draft: {e}");
                return false;
            }
        };
        if let Err(e) = merge_onto_default(&serialized) {
            warn!("Refusing to save a draft that cannot be read back: {e}");
            return false;
        }

        match self.storage.set_item(DRAFT_KEY, &serialized) {
            Ok(()) => {
                info!("Saved draft to slot '{DRAFT_KEY}'");
                true
            }
            Err(e) => {
                warn!("Failed to save draft: {e}");
                false
            }
        }
    }

    /// The stored draft merged over the defaults, or `None` when nothing
    /// usable is stored.
    pub fn load(&self) -> Option<DraftRecord> {
        let stored = match self.storage.get_item(DRAFT_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read stored draft: {e}");
                return None;
            }
        };

        match merge_onto_default(&stored) {
            Ok(record) => {
                info!("Loaded stored draft from slot '{DRAFT_KEY}'");
                Some(record)
            }
            Err(e) => {
                warn!("Ignoring malformed stored draft: {e}");
                None
            }
        }
    }

    /// Whether the slot holds anything, readable or not.
    pub fn is_stored(&self) -> bool {
        self.storage.get_item(DRAFT_KEY).map_or_else(
            |e| {
                warn!("Failed to read stored draft: {e}");
                false
            },
            |stored| stored.is_some(),
        )
    }

    /// Erase the slot.
    pub fn clear(&mut self) {
        match self.storage.remove_item(DRAFT_KEY) {
            Ok(()) => info!("Cleared slot '{DRAFT_KEY}'"),
            Err(e) => warn!("Failed to clear stored draft: {e}"),
        }
    }

    /// When the slot was last written, if known.
    pub fn saved_at(&self) -> Option<Timestamp> {
        self.storage.updated_at(DRAFT_KEY).unwrap_or_else(|e| {
            warn!("Failed to read draft timestamp: {e}");
            None
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
