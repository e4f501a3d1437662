//! The wizard controller.
//!
//! [`Wizard`] owns the current step, the draft record, the draft store and
//! the toast channel. Every user action is one method call that performs a
//! synchronous state transition; callers re-render afterwards.
//!
//! ```text
//!            next (gated)         next (gated)          next (gated)
//!   ┌──────────┐ ───────▶ ┌──────────┐ ───────▶ ┌──────────┐ ───────▶ ┌──────────┐
//!   │ Service  │          │ Business │          │  Comms   │          │  Risks   │
//!   │ & Procs  │ ◀─────── │  Impact  │ ◀─────── │          │ ◀─────── │ & Finish │
//!   └──────────┘   back   └──────────┘   back   └──────────┘   back   └──────────┘
//!        ▲                                                                  │
//!        └──────────────────────── clear draft ─────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use bcp_core::{
//!     params::{Edit, TextField},
//!     storage::MemoryStorage,
//!     wizard::{Navigation, Wizard},
//!     models::WizardStep,
//! };
//!
//! let mut wizard = Wizard::new(MemoryStorage::new());
//! assert!(!wizard.can_next());
//!
//! wizard.apply(&Edit::SetText { field: TextField::Name, value: "Payroll BCP".into() });
//! wizard.apply(&Edit::SetText { field: TextField::ServiceName, value: "Payroll System".into() });
//! assert_eq!(wizard.next(), Navigation::Moved(WizardStep::BusinessImpact));
//! ```

use log::{debug, info};

use crate::{
    display::{ResponseCard, StepScreen, SummaryPanel},
    editors,
    models::{DraftRecord, WizardStep},
    params::Edit,
    persistence::DraftStore,
    storage::SlotStorage,
    summary::Summary,
    toast::ToastChannel,
    validate::{validate_step, StepValidation},
};

mod builder;


pub use builder::WizardBuilder;

pub const SAVED_NOTICE: &str = "Draft saved locally ✨";
pub const CLEARED_NOTICE: &str = "Draft cleared";

/// Result of a Next or Back request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The wizard is now on this step.
    Moved(WizardStep),
    /// The current step's validator failed; the message explains why.
    Blocked(String),
    /// Already on the first (Back) or last (Next) step.
    AtBoundary,
}

/// Multi-step capture wizard over a [`SlotStorage`].
#[derive(Debug)]
pub struct Wizard<S> {
    step: WizardStep,
    record: DraftRecord,
    drafts: DraftStore<S>,
    toasts: ToastChannel,
    loaded: bool,
}

impl<S: SlotStorage> Wizard<S> {
    /// Start on the first step with the stored draft, or the default record
    /// when nothing usable is stored.
    pub fn new(storage: S) -> Self {
        let drafts = DraftStore::new(storage);
        let stored = drafts.load();
        let loaded = stored.is_some();

        Self {
            step: WizardStep::default(),
            record: stored.unwrap_or_default(),
            drafts,
            toasts: ToastChannel::new(),
            loaded,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn record(&self) -> &DraftRecord {
        &self.record
    }

    /// Whether startup found a stored draft.
    pub fn loaded_from_storage(&self) -> bool {
        self.loaded
    }

    /// Channel carrying save, clear and skip notices.
    pub fn toasts(&self) -> &ToastChannel {
        &self.toasts
    }

    pub fn drafts(&self) -> &DraftStore<S> {
        &self.drafts
    }

    /// Replace the record with the result of one field edit.
    pub fn apply(&mut self, edit: &Edit) {
        self.record = editors::apply(&self.record, edit);
    }

    /// Validator outcome for the current step.
    pub fn validation(&self) -> StepValidation {
        validate_step(self.step, &self.record)
    }

    /// Whether Next is enabled. Always false on the last step.
    pub fn can_next(&self) -> bool {
        !self.step.is_last() && self.validation().ok
    }

    pub fn next(&mut self) -> Navigation {
        let Some(target) = self.step.next() else {
            return Navigation::AtBoundary;
        };

        let validation = self.validation();
        if !validation.ok {
            debug!("Next blocked on '{}': {}", self.step, validation.message);
            return Navigation::Blocked(validation.message);
        }

        debug!("Step '{}' -> '{}'", self.step, target);
        self.step = target;
        Navigation::Moved(target)
    }

    pub fn back(&mut self) -> Navigation {
        match self.step.previous() {
            Some(target) => {
                debug!("Step '{}' -> '{}'", self.step, target);
                self.step = target;
                Navigation::Moved(target)
            }
            None => Navigation::AtBoundary,
        }
    }

    /// Announce that the current step may be skipped. Never navigates; returns
    /// `None` on steps that do not offer Skip.
    pub fn skip(&self) -> Option<&'static str> {
        let notice = self.step.skip_notice()?;
        self.toasts.publish(notice);
        Some(notice)
    }

    /// Finish & Save. Only offered on the last step; returns whether the
    /// draft was written.
    pub fn finish(&mut self) -> bool {
        if !self.step.is_last() {
            debug!("Finish ignored on '{}'", self.step);
            return false;
        }
        self.save_draft()
    }

    /// Persist the record and announce it on success.
    pub fn save_draft(&mut self) -> bool {
        let saved = self.drafts.save(&self.record);
        if saved {
            self.toasts.publish(SAVED_NOTICE);
        }
        saved
    }

    /// Discard in-memory answers. The step and the stored draft are kept.
    pub fn reset_form(&mut self) {
        info!("Resetting form to defaults");
        self.record = DraftRecord::default();
    }

    /// Discard in-memory answers and the stored draft, and return to the
    /// first step.
    pub fn clear_draft(&mut self) {
        self.drafts.clear();
        self.record = DraftRecord::default();
        self.step = WizardStep::default();
        self.toasts.publish(CLEARED_NOTICE);
    }

    pub fn summary(&self) -> Summary {
        Summary::project(&self.record)
    }

    /// Current page as markdown.
    pub fn screen(&self) -> String {
        StepScreen::new(self.step, &self.record).to_string()
    }

    /// Live summary with the loaded-draft note, as markdown.
    pub fn summary_panel(&self) -> String {
        let summary = self.summary();
        SummaryPanel {
            summary: &summary,
            loaded: self.loaded,
        }
        .to_string()
    }

    /// Printable response card for the current record, as markdown.
    pub fn response_card(&self) -> String {
        ResponseCard(&self.summary()).to_string()
    }
}
