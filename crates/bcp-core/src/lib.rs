//! Core library for BCP Quick Capture.
//!
//! This crate holds everything behind the capture wizard: the draft record and
//! its forward-compatible loading, the per-step validators, the field editors,
//! the wizard controller, the local draft store, the summary projection and
//! the toast channel. It has no terminal code; the `bcp` binary drives it.
//!
//! # Data flow
//!
//! ```text
//! ┌──────────┐  Edit   ┌──────────────┐  record  ┌──────────────┐
//! │  Shell   │───────▶│    Wizard     │────────▶│ Summary /    │
//! │ commands │        │ (controller)  │          │ StepScreen   │
//! └──────────┘        └──────┬───────┘          └──────────────┘
//!                     save/  │  \ publish
//!                     load   ▼   ▼
//!               ┌──────────────┐ ┌──────────────┐
//!               │  DraftStore  │ │ ToastChannel │
//!               │ (slot "bcp_  │ └──────────────┘
//!               │  draft")     │
//!               └──────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use bcp_core::{
//!     params::{Edit, TextField},
//!     WizardBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new()
//!     .with_database_path(Some("bcp.db"))
//!     .build()?;
//!
//! wizard.apply(&Edit::SetText {
//!     field: TextField::Name,
//!     value: "Payroll BCP".to_string(),
//! });
//! wizard.save_draft();
//! println!("{}", wizard.summary_panel());
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod editors;
pub mod error;
pub mod lens;
pub mod merge;
pub mod models;
pub mod params;
pub mod persistence;
pub mod storage;
pub mod summary;
pub mod toast;
pub mod validate;
pub mod wizard;

// Re-export commonly used types
pub use db::Database;
pub use display::{DraftStatus, LocalDateTime, OperationStatus, ResponseCard, StepScreen};
pub use error::{CaptureError, Result};
pub use models::{DraftRecord, WizardStep};
pub use params::{Edit, TextField};
pub use persistence::{DraftStore, DRAFT_KEY};
pub use storage::{MemoryStorage, SlotStorage};
pub use summary::Summary;
pub use toast::{Subscription, ToastChannel, ToastSlot};
pub use validate::{validate_step, StepValidation};
pub use wizard::{Navigation, Wizard, WizardBuilder};
