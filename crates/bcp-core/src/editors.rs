//! Field editors: pure transformations of the draft record.
//!
//! [`apply`] maps an [`Edit`] to a new [`DraftRecord`]. List edits all go
//! through [`update_at`] with the lens for their list, so adding a site to
//! the third process reads the same as adding an owner.

use crate::{
    lens::{list, update_at, Dependencies, Lens, Notifications, Owners, Processes, SitesOf},
    models::{Dependency, DraftRecord, Notification, Owner, Process, Site},
    params::{
        DependencyPatch, Edit, NotificationPatch, OwnerPatch, ProcessPatch, SitePatch, TextField,
    },
};

/// Partial update of one list entry.
pub trait Patch<T> {
    /// Copy of `target` with the patched fields replaced.
    fn apply_to(&self, target: &T) -> T;
}

impl Patch<Process> for ProcessPatch {
    fn apply_to(&self, target: &Process) -> Process {
        Process {
            name: self.name.clone().unwrap_or_else(|| target.name.clone()),
            sites: target.sites.clone(),
        }
    }
}

impl Patch<Site> for SitePatch {
    fn apply_to(&self, target: &Site) -> Site {
        Site {
            name: self.name.clone().unwrap_or_else(|| target.name.clone()),
            headcount: self.headcount.unwrap_or(target.headcount),
        }
    }
}

impl Patch<Owner> for OwnerPatch {
    fn apply_to(&self, target: &Owner) -> Owner {
        Owner {
            role: self.role.unwrap_or(target.role),
            name: self.name.clone().unwrap_or_else(|| target.name.clone()),
            email: self.email.clone().unwrap_or_else(|| target.email.clone()),
        }
    }
}

impl Patch<Dependency> for DependencyPatch {
    fn apply_to(&self, target: &Dependency) -> Dependency {
        Dependency {
            kind: self.kind.unwrap_or(target.kind),
            label: self.label.clone().unwrap_or_else(|| target.label.clone()),
        }
    }
}

impl Patch<Notification> for NotificationPatch {
    fn apply_to(&self, target: &Notification) -> Notification {
        Notification {
            name: self.name.clone().unwrap_or_else(|| target.name.clone()),
            email: self.email.clone().unwrap_or_else(|| target.email.clone()),
        }
    }
}

/// Apply one edit, returning the replacement record.
pub fn apply(record: &DraftRecord, edit: &Edit) -> DraftRecord {
    match edit {
        Edit::SetText { field, value } => with_text(record, *field, value),
        Edit::SetCriticalityValue(value) => DraftRecord {
            criticality_value: finite_or_zero(*value),
            ..record.clone()
        },
        Edit::SetCriticalityUnit(unit) => DraftRecord {
            criticality_unit: *unit,
            ..record.clone()
        },

        Edit::AddProcess => add_entry(record, &Processes),
        Edit::UpdateProcess { index, patch } => update_entry(record, &Processes, *index, patch),
        Edit::RemoveProcess { index } => remove_entry(record, &Processes, *index),

        Edit::AddSite { process } => add_entry(record, &SitesOf(*process)),
        Edit::UpdateSite {
            process,
            site,
            patch,
        } => update_entry(record, &SitesOf(*process), *site, patch),
        Edit::RemoveSite { process, site } => remove_entry(record, &SitesOf(*process), *site),

        Edit::AddOwner => add_entry(record, &Owners),
        Edit::UpdateOwner { index, patch } => update_entry(record, &Owners, *index, patch),
        Edit::RemoveOwner { index } => remove_entry(record, &Owners, *index),

        Edit::AddDependency => add_entry(record, &Dependencies),
        Edit::UpdateDependency { index, patch } => {
            update_entry(record, &Dependencies, *index, patch)
        }
        Edit::RemoveDependency { index } => remove_entry(record, &Dependencies, *index),

        Edit::AddNotification => add_entry(record, &Notifications),
        Edit::UpdateNotification { index, patch } => {
            update_entry(record, &Notifications, *index, patch)
        }
        Edit::RemoveNotification { index } => remove_entry(record, &Notifications, *index),
    }
}

fn with_text(record: &DraftRecord, field: TextField, value: &str) -> DraftRecord {
    let mut next = record.clone();
    let slot = match field {
        TextField::Name => &mut next.name,
        TextField::BusinessUnit => &mut next.business_unit,
        TextField::SubBusinessUnit => &mut next.sub_business_unit,
        TextField::ServiceName => &mut next.service_name,
        TextField::ServiceDescription => &mut next.service_description,
        TextField::RiskNotes => &mut next.risk_notes,
    };
    *slot = value.to_string();
    next
}

fn add_entry<L, T>(record: &DraftRecord, lens: &L) -> DraftRecord
where
    L: Lens<Target = Vec<T>>,
    T: Clone + Default,
{
    update_at(record, lens, |items| list::appended(items, T::default()))
}

fn update_entry<L, T, P>(record: &DraftRecord, lens: &L, index: usize, patch: &P) -> DraftRecord
where
    L: Lens<Target = Vec<T>>,
    T: Clone,
    P: Patch<T>,
{
    update_at(record, lens, |items| {
        list::replaced_at(items, index, |item| patch.apply_to(item))
    })
}

fn remove_entry<L, T>(record: &DraftRecord, lens: &L, index: usize) -> DraftRecord
where
    L: Lens<Target = Vec<T>>,
    T: Clone,
{
    update_at(record, lens, |items| list::removed_at(items, index))
}

/// Parse numeric input the way the form does: blank or unparseable text is 0.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map_or(0.0, finite_or_zero)
}

/// NaN and infinities have no JSON form, so they are stored as 0.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parse a headcount: like [`coerce_number`], then truncated and clamped to a
/// non-negative integer.
pub fn coerce_headcount(raw: &str) -> u32 {
    let value = coerce_number(raw).trunc();
    if value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CriticalityUnit, DependencyType, OwnerRole};

    fn apply_all(edits: &[Edit]) -> DraftRecord {
        edits
            .iter()
            .fold(DraftRecord::default(), |record, edit| apply(&record, edit))
    }

    #[test]
    fn test_set_text_fields() {
        let record = apply_all(&[
            Edit::SetText {
                field: TextField::Name,
                value: "Payroll BCP".to_string(),
            },
            Edit::SetText {
                field: TextField::ServiceName,
                value: "Payroll System".to_string(),
            },
            Edit::SetText {
                field: TextField::RiskNotes,
                value: "cyber incident".to_string(),
            },
        ]);
        assert_eq!(record.name, "Payroll BCP");
        assert_eq!(record.service_name, "Payroll System");
        assert_eq!(record.risk_notes, "cyber incident");
        assert!(record.business_unit.is_empty());
    }

    #[test]
    fn test_add_appends_zero_valued_entries() {
        let record = apply_all(&[
            Edit::AddProcess,
            Edit::AddSite { process: 0 },
            Edit::AddOwner,
            Edit::AddDependency,
            Edit::AddNotification,
        ]);
        assert_eq!(record.processes, vec![Process {
            name: String::new(),
            sites: vec![Site::default()],
        }]);
        assert_eq!(record.owners[0].role, OwnerRole::Primary);
        assert_eq!(record.dependencies[0].kind, DependencyType::Upstream);
        assert_eq!(record.notifications[0], Notification::default());
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let record = apply_all(&[
            Edit::AddOwner,
            Edit::UpdateOwner {
                index: 0,
                patch: OwnerPatch {
                    name: Some("Alice".to_string()),
                    email: Some("a@x.com".to_string()),
                    ..Default::default()
                },
            },
            Edit::UpdateOwner {
                index: 0,
                patch: OwnerPatch {
                    role: Some(OwnerRole::Backup),
                    ..Default::default()
                },
            },
        ]);
        assert_eq!(record.owners[0], Owner {
            role: OwnerRole::Backup,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        });
    }

    #[test]
    fn test_site_edits_stay_inside_their_process() {
        let record = apply_all(&[
            Edit::AddProcess,
            Edit::AddProcess,
            Edit::AddSite { process: 1 },
            Edit::UpdateSite {
                process: 1,
                site: 0,
                patch: SitePatch {
                    name: Some("Leeds".to_string()),
                    headcount: Some(12),
                },
            },
        ]);
        assert!(record.processes[0].sites.is_empty());
        assert_eq!(record.processes[1].sites[0].name, "Leeds");
        assert_eq!(record.processes[1].sites[0].headcount, 12);

        let removed = apply(&record, &Edit::RemoveSite { process: 1, site: 0 });
        assert!(removed.processes[1].sites.is_empty());
        assert_eq!(record.processes[1].sites.len(), 1);
    }

    #[test]
    fn test_add_then_remove_restores_list() {
        let before = apply_all(&[
            Edit::AddDependency,
            Edit::UpdateDependency {
                index: 0,
                patch: DependencyPatch {
                    kind: Some(DependencyType::External),
                    label: Some("Courier".to_string()),
                },
            },
        ]);
        let added = apply(&before, &Edit::AddDependency);
        let restored = apply(&added, &Edit::RemoveDependency { index: 1 });
        assert_eq!(restored, before);
    }

    #[test]
    fn test_remove_shifts_positions_down() {
        let record = apply_all(&[
            Edit::AddNotification,
            Edit::AddNotification,
            Edit::UpdateNotification {
                index: 1,
                patch: NotificationPatch {
                    name: Some("Ops".to_string()),
                    ..Default::default()
                },
            },
            Edit::RemoveNotification { index: 0 },
        ]);
        assert_eq!(record.notifications.len(), 1);
        assert_eq!(record.notifications[0].name, "Ops");
    }

    #[test]
    fn test_out_of_range_positions_are_no_ops() {
        let record = apply_all(&[Edit::AddProcess]);
        assert_eq!(apply(&record, &Edit::RemoveProcess { index: 5 }), record);
        assert_eq!(apply(&record, &Edit::AddSite { process: 3 }), record);
        assert_eq!(
            apply(&record, &Edit::UpdateProcess {
                index: 2,
                patch: ProcessPatch {
                    name: Some("x".to_string())
                },
            }),
            record
        );
    }

    #[test]
    fn test_criticality_edits() {
        let record = apply_all(&[
            Edit::criticality_from_input("2"),
            Edit::SetCriticalityUnit(CriticalityUnit::Hours),
        ]);
        assert_eq!(record.criticality_value, 2.0);
        assert_eq!(record.criticality_unit, CriticalityUnit::Hours);
    }

    #[test]
    fn test_non_finite_criticality_is_stored_as_zero() {
        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let record = apply_all(&[Edit::SetCriticalityValue(value)]);
            assert_eq!(record.criticality_value, 0.0);
        }
        let record = apply_all(&[Edit::SetCriticalityValue(-2.5)]);
        assert_eq!(record.criticality_value, -2.5);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number(" 1.5 "), 1.5);
    }

    #[test]
    fn test_coerce_headcount() {
        assert_eq!(coerce_headcount("7"), 7);
        assert_eq!(coerce_headcount("7.9"), 7);
        assert_eq!(coerce_headcount("-4"), 0);
        assert_eq!(coerce_headcount("many"), 0);
        assert_eq!(coerce_headcount("1e12"), u32::MAX);
    }
}
