//! Parameter structures for draft edits.
//!
//! Every change a user can make to the draft is described by an [`Edit`]
//! value. Interfaces (the interactive shell today) parse their own input into
//! these types and hand them to [`crate::Wizard::apply`]; the core never sees
//! framework-specific argument types.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Shell command  │    │      Edit       │    │  Field editor   │
//! │ (clap derives)  │───▶│ (plain params)  │───▶│ (pure update)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Patches carry only the fields being changed; `None` leaves a field as it
//! was. Numeric input typed by a user goes through the `*_from_input`
//! constructors, which coerce anything unparseable to zero.

use std::str::FromStr;

use crate::{
    editors::{coerce_headcount, coerce_number},
    models::{CriticalityUnit, DependencyType, OwnerRole, WizardStep},
};

/// Free-text scalar fields of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    BusinessUnit,
    SubBusinessUnit,
    ServiceName,
    ServiceDescription,
    RiskNotes,
}

impl TextField {
    /// Form label, with the required marker where the field gates a step.
    pub fn label(self) -> &'static str {
        match self {
            TextField::Name => "Name of BCP *",
            TextField::BusinessUnit => "Business Unit",
            TextField::SubBusinessUnit => "Sub Business Unit",
            TextField::ServiceName => "Service name *",
            TextField::ServiceDescription => "Description",
            TextField::RiskNotes => "Any major risks to note? (optional)",
        }
    }

    /// Step whose page exposes this field.
    pub fn step(self) -> WizardStep {
        match self {
            TextField::RiskNotes => WizardStep::RisksFinish,
            _ => WizardStep::ServiceProcesses,
        }
    }
}

impl FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Ok(TextField::Name),
            "business_unit" | "bu" => Ok(TextField::BusinessUnit),
            "sub_business_unit" | "sub_bu" => Ok(TextField::SubBusinessUnit),
            "service_name" | "service" => Ok(TextField::ServiceName),
            "service_description" | "description" => Ok(TextField::ServiceDescription),
            "risk_notes" | "risks" => Ok(TextField::RiskNotes),
            _ => Err(format!("Unknown field: {s}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessPatch {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePatch {
    pub name: Option<String>,
    pub headcount: Option<u32>,
}

impl SitePatch {
    /// Headcount patch from raw user input; unparseable input becomes 0.
    pub fn headcount_from_input(raw: &str) -> Self {
        Self {
            headcount: Some(coerce_headcount(raw)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerPatch {
    pub role: Option<OwnerRole>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyPatch {
    pub kind: Option<DependencyType>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// One field-editor operation on the draft.
///
/// List positions are zero-based. Updates and removals at positions that do
/// not exist leave the draft unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    SetText { field: TextField, value: String },
    SetCriticalityValue(f64),
    SetCriticalityUnit(CriticalityUnit),

    AddProcess,
    UpdateProcess { index: usize, patch: ProcessPatch },
    RemoveProcess { index: usize },

    AddSite { process: usize },
    UpdateSite { process: usize, site: usize, patch: SitePatch },
    RemoveSite { process: usize, site: usize },

    AddOwner,
    UpdateOwner { index: usize, patch: OwnerPatch },
    RemoveOwner { index: usize },

    AddDependency,
    UpdateDependency { index: usize, patch: DependencyPatch },
    RemoveDependency { index: usize },

    AddNotification,
    UpdateNotification { index: usize, patch: NotificationPatch },
    RemoveNotification { index: usize },
}

impl Edit {
    /// Criticality edit from raw user input; unparseable input becomes 0.
    pub fn criticality_from_input(raw: &str) -> Self {
        Edit::SetCriticalityValue(coerce_number(raw))
    }

    /// Step whose page offers this edit.
    pub fn step(&self) -> WizardStep {
        match self {
            Edit::SetText { field, .. } => field.step(),
            Edit::AddProcess
            | Edit::UpdateProcess { .. }
            | Edit::RemoveProcess { .. }
            | Edit::AddSite { .. }
            | Edit::UpdateSite { .. }
            | Edit::RemoveSite { .. }
            | Edit::AddOwner
            | Edit::UpdateOwner { .. }
            | Edit::RemoveOwner { .. } => WizardStep::ServiceProcesses,
            Edit::SetCriticalityValue(_)
            | Edit::SetCriticalityUnit(_)
            | Edit::AddDependency
            | Edit::UpdateDependency { .. }
            | Edit::RemoveDependency { .. } => WizardStep::BusinessImpact,
            Edit::AddNotification
            | Edit::UpdateNotification { .. }
            | Edit::RemoveNotification { .. } => WizardStep::Communication,
        }
    }
}
