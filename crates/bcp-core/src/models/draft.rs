//! Draft record definition.

use serde::{Deserialize, Serialize};

use super::{CriticalityUnit, DependencyType, OwnerRole};

/// The single in-progress BCP intake form.
///
/// Every field is always present. Absent answers are empty strings or empty
/// sequences, and the record is replaced wholesale on every edit; see
/// [`crate::editors`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftRecord {
    /// Name of the BCP (required before leaving step 1)
    pub name: String,

    pub business_unit: String,

    pub sub_business_unit: String,

    /// Name of the service the plan covers (required before leaving step 1)
    pub service_name: String,

    pub service_description: String,

    /// Processes the service depends on, in insertion order
    pub processes: Vec<Process>,

    /// Process owners from the roster
    pub owners: Vec<Owner>,

    /// Unit of the maximum tolerable downtime
    pub criticality_unit: CriticalityUnit,

    /// Maximum tolerable downtime, in `criticality_unit`
    pub criticality_value: f64,

    pub dependencies: Vec<Dependency>,

    /// Who to notify when the service is disrupted
    pub notifications: Vec<Notification>,

    pub risk_notes: String,
}

impl Default for DraftRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            business_unit: String::new(),
            sub_business_unit: String::new(),
            service_name: String::new(),
            service_description: String::new(),
            processes: Vec::new(),
            owners: Vec::new(),
            criticality_unit: CriticalityUnit::Days,
            criticality_value: 1.0,
            dependencies: Vec::new(),
            notifications: Vec::new(),
            risk_notes: String::new(),
        }
    }
}

/// A business process and the sites it runs at.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Process {
    pub name: String,
    pub sites: Vec<Site>,
}

/// A physical site and the headcount working there.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Site {
    pub name: String,
    pub headcount: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Owner {
    pub role: OwnerRole,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Dependency {
    #[serde(rename = "type")]
    pub kind: DependencyType,
    pub label: String,
}

/// A notification recipient (person or group).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Notification {
    pub name: String,
    pub email: String,
}
