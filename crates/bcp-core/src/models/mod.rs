//! Data models for the capture wizard.
//!
//! This module contains the draft record and its entry types, the closed value
//! sets used by those entries, and the wizard step enumeration. Display
//! implementations live in [`crate::display`] so the models stay plain data.
//!
//! # Serialized Shape
//!
//! [`DraftRecord`] serializes to the JSON object stored in the draft slot, with
//! field names exactly as they appear on the struct. Dependency entries store
//! their kind under `type`:
//!
//! ```rust
//! use bcp_core::models::{Dependency, DependencyType};
//!
//! let dep = Dependency { kind: DependencyType::It, label: "Payroll DB".to_string() };
//! let json = serde_json::to_string(&dep).unwrap();
//! assert_eq!(json, r#"{"type":"IT","label":"Payroll DB"}"#);
//! ```

pub mod draft;
pub mod kinds;
pub mod step;


pub use draft::{Dependency, DraftRecord, Notification, Owner, Process, Site};
pub use kinds::{CriticalityUnit, DependencyType, OwnerRole};
pub use step::{WizardStep, STEP_COUNT};
