//! Markdown rendering for the wizard.
//!
//! Models stay plain data; everything the user sees is produced here through
//! `Display` implementations and small wrapper types, then handed to the CLI's
//! terminal renderer (or written to a file for the response card).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Draft record   │    │ Wrappers        │    │   Markdown      │
//! │  + wizard step  │───▶│ (StepScreen,    │───▶│ (terminal/file) │
//! │                 │    │  ResponseCard)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`screen`]: the current wizard page ([`StepScreen`])
//! - [`summary`]: live summary ([`SummaryPanel`]) and print layout ([`ResponseCard`])
//! - [`status`]: one-shot command feedback ([`OperationStatus`], [`DraftStatus`])
//! - [`datetime`]: timestamps in the local timezone
//! - [`models`]: `Display` for value sets and steps
//!
//! ```rust
//! use bcp_core::{display::ResponseCard, models::DraftRecord, summary::Summary};
//!
//! let record = DraftRecord {
//!     service_name: "Payroll System".to_string(),
//!     ..Default::default()
//! };
//! let summary = Summary::project(&record);
//! let card = ResponseCard(&summary).to_string();
//! assert!(card.contains("- **Service**: Payroll System"));
//! assert!(card.contains("- **Criticality**: 1 days"));
//! ```

pub mod datetime;
pub mod models;
pub mod screen;
pub mod status;
pub mod summary;

pub use datetime::LocalDateTime;
pub use screen::StepScreen;
pub use status::{DraftStatus, OperationStatus};
pub use summary::{ResponseCard, SummaryPanel, APP_HEADER};
