//! Markdown rendering of the current wizard page.
//!
//! List entries are numbered from 1; those numbers are the positions the
//! shell's `edit` and `remove` commands accept.

use std::fmt;

use crate::{
    models::{DraftRecord, WizardStep, STEP_COUNT},
    params::TextField,
};

pub const PROCESSES_LABEL: &str = "What are the main processes this service depends on?";
pub const OWNERS_LABEL: &str = "Process Owners (from roster)";
pub const CRITICALITY_LABEL: &str = "Criticality (MTD) – when must the process be restored? *";
pub const DEPENDENCIES_LABEL: &str = "Dependencies";
pub const NOTIFICATIONS_LABEL: &str = "Who should be notified if the service is disrupted?";

const EMPTY: &str = "_(empty)_";

/// One wizard page: its position, title, and the fields it exposes.
pub struct StepScreen<'a> {
    pub step: WizardStep,
    pub record: &'a DraftRecord,
}

impl<'a> StepScreen<'a> {
    pub fn new(step: WizardStep, record: &'a DraftRecord) -> Self {
        Self { step, record }
    }

    fn fmt_text(&self, f: &mut fmt::Formatter<'_>, field: TextField, value: &str) -> fmt::Result {
        writeln!(f, "- {}: {}", field.label(), or_empty(value))
    }

    fn fmt_service(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.record;
        self.fmt_text(f, TextField::Name, &r.name)?;
        self.fmt_text(f, TextField::BusinessUnit, &r.business_unit)?;
        self.fmt_text(f, TextField::SubBusinessUnit, &r.sub_business_unit)?;
        self.fmt_text(f, TextField::ServiceName, &r.service_name)?;
        self.fmt_text(f, TextField::ServiceDescription, &r.service_description)?;

        writeln!(f)?;
        writeln!(f, "## {PROCESSES_LABEL}")?;
        writeln!(f)?;
        if r.processes.is_empty() {
            writeln!(f, "No processes yet.")?;
        }
        for (pi, process) in r.processes.iter().enumerate() {
            writeln!(f, "{}. {}", pi + 1, or_empty(&process.name))?;
            for (si, site) in process.sites.iter().enumerate() {
                writeln!(
                    f,
                    "   {}. {} (headcount {})",
                    si + 1,
                    or_empty(&site.name),
                    site.headcount
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "## {OWNERS_LABEL}")?;
        writeln!(f)?;
        if r.owners.is_empty() {
            writeln!(f, "No owners yet.")?;
        }
        for (i, owner) in r.owners.iter().enumerate() {
            writeln!(
                f,
                "{}. {}: {} <{}>",
                i + 1,
                owner.role,
                or_empty(&owner.name),
                owner.email
            )?;
        }
        Ok(())
    }

    fn fmt_business_impact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.record;
        writeln!(
            f,
            "- {CRITICALITY_LABEL}: {} {}",
            r.criticality_value, r.criticality_unit
        )?;

        writeln!(f)?;
        writeln!(f, "## {DEPENDENCIES_LABEL}")?;
        writeln!(f)?;
        if r.dependencies.is_empty() {
            writeln!(f, "No dependencies yet.")?;
        }
        for (i, dep) in r.dependencies.iter().enumerate() {
            writeln!(f, "{}. {}: {}", i + 1, dep.kind, or_empty(&dep.label))?;
        }
        Ok(())
    }

    fn fmt_communication(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {NOTIFICATIONS_LABEL}")?;
        writeln!(f)?;
        if self.record.notifications.is_empty() {
            writeln!(f, "No recipients yet.")?;
        }
        for (i, n) in self.record.notifications.iter().enumerate() {
            writeln!(f, "{}. {} <{}>", i + 1, or_empty(&n.name), n.email)?;
        }
        Ok(())
    }
}

impl fmt::Display for StepScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step {} of {STEP_COUNT}", self.step.index() + 1)?;
        writeln!(f)?;
        writeln!(f, "# {}", self.step.title())?;
        writeln!(f)?;

        match self.step {
            WizardStep::ServiceProcesses => self.fmt_service(f),
            WizardStep::BusinessImpact => self.fmt_business_impact(f),
            WizardStep::Communication => self.fmt_communication(f),
            WizardStep::RisksFinish => {
                self.fmt_text(f, TextField::RiskNotes, &self.record.risk_notes)
            }
        }
    }
}

fn or_empty(value: &str) -> &str {
    if value.is_empty() {
        EMPTY
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dependency, DependencyType, Owner, OwnerRole, Process, Site};

    #[test]
    fn test_service_screen_numbers_entries() {
        let record = DraftRecord {
            name: "Payroll BCP".to_string(),
            processes: vec![Process {
                name: "Salary run".to_string(),
                sites: vec![Site {
                    name: "Leeds".to_string(),
                    headcount: 12,
                }],
            }],
            owners: vec![Owner {
                role: OwnerRole::Backup,
                name: "Bob".to_string(),
                email: "b@x.com".to_string(),
            }],
            ..Default::default()
        };
        let out = StepScreen::new(WizardStep::ServiceProcesses, &record).to_string();
        assert!(out.starts_with("Step 1 of 4\n\n# Service & Processes\n"));
        assert!(out.contains("- Name of BCP *: Payroll BCP\n"));
        assert!(out.contains("- Service name *: _(empty)_\n"));
        assert!(out.contains("1. Salary run\n   1. Leeds (headcount 12)\n"));
        assert!(out.contains("1. backup: Bob <b@x.com>\n"));
    }

    #[test]
    fn test_business_impact_screen() {
        let record = DraftRecord {
            dependencies: vec![Dependency {
                kind: DependencyType::Equipment,
                label: "Printers".to_string(),
            }],
            ..Default::default()
        };
        let out = StepScreen::new(WizardStep::BusinessImpact, &record).to_string();
        assert!(out.starts_with("Step 2 of 4\n"));
        assert!(out.contains(&format!("- {CRITICALITY_LABEL}: 1 days\n")));
        assert!(out.contains("1. Equipment: Printers\n"));
    }

    #[test]
    fn test_empty_lists_say_so() {
        let record = DraftRecord::default();
        let comms = StepScreen::new(WizardStep::Communication, &record).to_string();
        assert!(comms.contains("No recipients yet."));

        let risks = StepScreen::new(WizardStep::RisksFinish, &record).to_string();
        assert!(risks.starts_with("Step 4 of 4\n\n# Risks & Finish\n"));
        assert!(risks.contains("Any major risks to note? (optional): _(empty)_"));
    }
}
