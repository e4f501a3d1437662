//! One-shot commands against the saved draft.
//!
//! These run without the interactive wizard: they open the draft slot,
//! act on it once, and render the outcome.

use std::path::Path;

use anyhow::{bail, Context, Result};
use bcp_core::{
    display::{DraftStatus, OperationStatus},
    storage::SlotStorage,
    DraftStore, ResponseCard, Summary,
};
use log::info;

use crate::renderer::TerminalRenderer;

pub struct Cli<S> {
    store: DraftStore<S>,
    renderer: TerminalRenderer,
}

impl<S: SlotStorage> Cli<S> {
    pub fn new(store: DraftStore<S>, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Render the saved draft's response card, or write it to `output`.
    pub fn card(&self, output: Option<&Path>) -> Result<()> {
        let Some(record) = self.store.load() else {
            bail!("No saved draft. Run `bcp` and use `save` first.");
        };
        let card = ResponseCard(&Summary::project(&record)).to_string();

        match output {
            Some(path) => {
                std::fs::write(path, &card).with_context(|| {
                    format!("Failed to write response card to {}", path.display())
                })?;
                info!("Wrote response card to {}", path.display());
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Response card written to {}",
                        path.display()
                    ))
                    .to_string(),
                );
            }
            None => self.renderer.render(&card),
        }
        Ok(())
    }

    pub fn status(&self) {
        let record = self.store.load();
        let status = DraftStatus {
            stored: self.store.is_stored(),
            readable: record.is_some(),
            saved_at: self.store.saved_at(),
            name: record.map(|r| r.name).filter(|name| !name.is_empty()),
        };
        self.renderer.render(&status.to_string());
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.renderer
            .render(&OperationStatus::success("Draft cleared".to_string()).to_string());
    }
}
