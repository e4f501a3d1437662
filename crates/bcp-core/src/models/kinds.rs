//! Closed value sets used by draft entries.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role of a process owner taken from the roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OwnerRole {
    /// First point of contact
    #[default]
    Primary,

    /// Stand-in when the primary owner is unavailable
    Backup,
}

impl FromStr for OwnerRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(OwnerRole::Primary),
            "backup" => Ok(OwnerRole::Backup),
            _ => Err(format!("Invalid owner role: {s}")),
        }
    }
}

impl OwnerRole {
    /// Stored and displayed representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerRole::Primary => "primary",
            OwnerRole::Backup => "backup",
        }
    }
}

/// Unit of the maximum tolerable downtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CriticalityUnit {
    Hours,
    #[default]
    Days,
}

impl FromStr for CriticalityUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hours" | "hour" | "h" => Ok(CriticalityUnit::Hours),
            "days" | "day" | "d" => Ok(CriticalityUnit::Days),
            _ => Err(format!("Invalid criticality unit: {s}")),
        }
    }
}

impl CriticalityUnit {
    /// Stored and displayed representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CriticalityUnit::Hours => "hours",
            CriticalityUnit::Days => "days",
        }
    }
}

/// Category of something the service depends on.
///
/// Serialized verbatim (`"Upstream"`, `"IT"`, ...) to match drafts written by
/// earlier versions of the form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DependencyType {
    #[default]
    Upstream,
    #[serde(rename = "IT")]
    It,
    Equipment,
    External,
}

impl FromStr for DependencyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upstream" => Ok(DependencyType::Upstream),
            "it" => Ok(DependencyType::It),
            "equipment" => Ok(DependencyType::Equipment),
            "external" => Ok(DependencyType::External),
            _ => Err(format!("Invalid dependency type: {s}")),
        }
    }
}

impl DependencyType {
    /// Every selectable dependency type, in menu order.
    pub const ALL: [DependencyType; 4] = [
        DependencyType::Upstream,
        DependencyType::It,
        DependencyType::Equipment,
        DependencyType::External,
    ];

    /// Stored and displayed representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::Upstream => "Upstream",
            DependencyType::It => "IT",
            DependencyType::Equipment => "Equipment",
            DependencyType::External => "External",
        }
    }
}
