//! Read-only projection of the draft for the live summary and response card.

use crate::models::DraftRecord;

/// Shown wherever a summary row has nothing to report.
pub const PLACEHOLDER: &str = "—";

/// One rendered line per summary row, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub service: String,
    pub processes: String,
    pub sites: String,
    pub owners: String,
    pub criticality: String,
    pub dependencies: String,
    pub risks: String,
    pub notifications: String,
}

impl Summary {
    /// Project `record` into display strings.
    pub fn project(record: &DraftRecord) -> Self {
        let process_names: Vec<&str> = record
            .processes
            .iter()
            .map(|p| p.name.as_str())
            .filter(|name| !name.is_empty())
            .collect();

        let owners: Vec<String> = record
            .owners
            .iter()
            .map(|o| format!("{}: {}", o.role, o.name))
            .collect();

        let dependencies: Vec<String> = record
            .dependencies
            .iter()
            .map(|d| format!("{}: {}", d.kind, d.label))
            .collect();

        let notifications: Vec<String> = record
            .notifications
            .iter()
            .map(|n| format!("{} <{}>", n.name, n.email))
            .collect();

        Self {
            service: or_placeholder(record.service_name.clone()),
            processes: or_placeholder(process_names.join(", ")),
            sites: or_placeholder(unique_sites(record).join(", ")),
            owners: or_placeholder(owners.join(" | ")),
            criticality: criticality(record),
            dependencies: or_placeholder(dependencies.join(" | ")),
            risks: or_placeholder(record.risk_notes.clone()),
            notifications: or_placeholder(notifications.join(" | ")),
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn rows(&self) -> [(&'static str, &str); 8] {
        [
            ("Service", &self.service),
            ("Processes", &self.processes),
            ("Sites", &self.sites),
            ("Owners", &self.owners),
            ("Criticality", &self.criticality),
            ("Dependencies", &self.dependencies),
            ("Risks", &self.risks),
            ("Notifications", &self.notifications),
        ]
    }
}

/// Non-empty site names across all processes, deduplicated in first-seen
/// order.
pub fn unique_sites(record: &DraftRecord) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for site in record.processes.iter().flat_map(|p| &p.sites) {
        if !site.name.is_empty() && !seen.contains(&site.name) {
            seen.push(site.name.clone());
        }
    }
    seen
}

fn or_placeholder(value: String) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value
    }
}

// Zero and NaN count as "no value" and keep the unit visible.
fn criticality(record: &DraftRecord) -> String {
    let value = record.criticality_value;
    if value == 0.0 || value.is_nan() {
        format!("{PLACEHOLDER} {}", record.criticality_unit)
    } else {
        format!("{value} {}", record.criticality_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CriticalityUnit, Dependency, DependencyType, Notification, Owner, OwnerRole, Process, Site,
    };

    fn site(name: &str) -> Site {
        Site {
            name: name.to_string(),
            headcount: 0,
        }
    }

    #[test]
    fn test_default_record_projects_placeholders() {
        let summary = Summary::project(&DraftRecord::default());
        assert_eq!(summary.service, PLACEHOLDER);
        assert_eq!(summary.processes, PLACEHOLDER);
        assert_eq!(summary.sites, PLACEHOLDER);
        assert_eq!(summary.owners, PLACEHOLDER);
        assert_eq!(summary.criticality, "1 days");
        assert_eq!(summary.dependencies, PLACEHOLDER);
        assert_eq!(summary.risks, PLACEHOLDER);
        assert_eq!(summary.notifications, PLACEHOLDER);
    }

    #[test]
    fn test_unique_sites_first_seen_order() {
        let record = DraftRecord {
            processes: vec![
                Process {
                    name: "Pay".to_string(),
                    sites: vec![site("A"), site("B")],
                },
                Process {
                    name: String::new(),
                    sites: vec![site("B"), site(""), site("C")],
                },
            ],
            ..Default::default()
        };
        assert_eq!(unique_sites(&record), vec!["A", "B", "C"]);

        let summary = Summary::project(&record);
        assert_eq!(summary.sites, "A, B, C");
        assert_eq!(summary.processes, "Pay");
    }

    #[test]
    fn test_owners_keep_empty_names() {
        let record = DraftRecord {
            owners: vec![
                Owner {
                    role: OwnerRole::Primary,
                    name: "Alice".to_string(),
                    email: "a@x.com".to_string(),
                },
                Owner {
                    role: OwnerRole::Backup,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(Summary::project(&record).owners, "primary: Alice | backup: ");
    }

    #[test]
    fn test_criticality_rendering() {
        let mut record = DraftRecord {
            criticality_value: 2.0,
            criticality_unit: CriticalityUnit::Days,
            ..Default::default()
        };
        assert_eq!(Summary::project(&record).criticality, "2 days");

        record.criticality_value = 4.5;
        record.criticality_unit = CriticalityUnit::Hours;
        assert_eq!(Summary::project(&record).criticality, "4.5 hours");

        record.criticality_value = 0.0;
        assert_eq!(Summary::project(&record).criticality, "— hours");

        record.criticality_value = -3.0;
        assert_eq!(Summary::project(&record).criticality, "-3 hours");
    }

    #[test]
    fn test_dependencies_and_notifications() {
        let record = DraftRecord {
            dependencies: vec![
                Dependency {
                    kind: DependencyType::It,
                    label: "Payroll DB".to_string(),
                },
                Dependency {
                    kind: DependencyType::External,
                    label: "Bank".to_string(),
                },
            ],
            notifications: vec![Notification {
                name: "Ops".to_string(),
                email: "ops@x.com".to_string(),
            }],
            risk_notes: "power outage".to_string(),
            ..Default::default()
        };
        let summary = Summary::project(&record);
        assert_eq!(summary.dependencies, "IT: Payroll DB | External: Bank");
        assert_eq!(summary.notifications, "Ops <ops@x.com>");
        assert_eq!(summary.risks, "power outage");
    }

    #[test]
    fn test_rows_order() {
        let labels: Vec<&str> = Summary::project(&DraftRecord::default())
            .rows()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, vec![
            "Service",
            "Processes",
            "Sites",
            "Owners",
            "Criticality",
            "Dependencies",
            "Risks",
            "Notifications"
        ]);
    }
}
