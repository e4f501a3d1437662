//! Copy-on-write updates at a path inside a [`DraftRecord`].
//!
//! Field editors never touch a list in place. They name the list with a
//! [`Lens`], and [`update_at`] hands the current value to a pure function and
//! writes the result into a fresh copy of the record. Nested lists (sites
//! within a process) are just another lens, so every editor has the same
//! shape regardless of depth.

use crate::models::{Dependency, DraftRecord, Notification, Owner, Process, Site};

/// A focus on one part of a draft record.
pub trait Lens {
    type Target;

    /// Borrow the focused value, or `None` if the path does not exist.
    fn view<'a>(&self, record: &'a DraftRecord) -> Option<&'a Self::Target>;

    /// Mutably borrow the focused value in a record the caller owns.
    fn view_mut<'a>(&self, record: &'a mut DraftRecord) -> Option<&'a mut Self::Target>;
}

/// Produce a new record whose focused value is `f(current)`.
///
/// If the path does not exist (e.g. the parent process index is out of
/// range), the result equals the input record.
pub fn update_at<L, F>(record: &DraftRecord, lens: &L, f: F) -> DraftRecord
where
    L: Lens,
    F: FnOnce(&L::Target) -> L::Target,
{
    let mut next = record.clone();
    if let Some(current) = lens.view(record) {
        let updated = f(current);
        if let Some(slot) = lens.view_mut(&mut next) {
            *slot = updated;
        }
    }
    next
}

/// `record.processes`
#[derive(Debug, Clone, Copy)]
pub struct Processes;

/// `record.processes[index].sites`
#[derive(Debug, Clone, Copy)]
pub struct SitesOf(pub usize);

/// `record.owners`
#[derive(Debug, Clone, Copy)]
pub struct Owners;

/// `record.dependencies`
#[derive(Debug, Clone, Copy)]
pub struct Dependencies;

/// `record.notifications`
#[derive(Debug, Clone, Copy)]
pub struct Notifications;

impl Lens for Processes {
    type Target = Vec<Process>;

    fn view<'a>(&self, record: &'a DraftRecord) -> Option<&'a Self::Target> {
        Some(&record.processes)
    }

    fn view_mut<'a>(&self, record: &'a mut DraftRecord) -> Option<&'a mut Self::Target> {
        Some(&mut record.processes)
    }
}

impl Lens for SitesOf {
    type Target = Vec<Site>;

    fn view<'a>(&self, record: &'a DraftRecord) -> Option<&'a Self::Target> {
        record.processes.get(self.0).map(|p| &p.sites)
    }

    fn view_mut<'a>(&self, record: &'a mut DraftRecord) -> Option<&'a mut Self::Target> {
        record.processes.get_mut(self.0).map(|p| &mut p.sites)
    }
}

impl Lens for Owners {
    type Target = Vec<Owner>;

    fn view<'a>(&self, record: &'a DraftRecord) -> Option<&'a Self::Target> {
        Some(&record.owners)
    }

    fn view_mut<'a>(&self, record: &'a mut DraftRecord) -> Option<&'a mut Self::Target> {
        Some(&mut record.owners)
    }
}

impl Lens for Dependencies {
    type Target = Vec<Dependency>;

    fn view<'a>(&self, record: &'a DraftRecord) -> Option<&'a Self::Target> {
        Some(&record.dependencies)
    }

    fn view_mut<'a>(&self, record: &'a mut DraftRecord) -> Option<&'a mut Self::Target> {
        Some(&mut record.dependencies)
    }
}

impl Lens for Notifications {
    type Target = Vec<Notification>;

    fn view<'a>(&self, record: &'a DraftRecord) -> Option<&'a Self::Target> {
        Some(&record.notifications)
    }

    fn view_mut<'a>(&self, record: &'a mut DraftRecord) -> Option<&'a mut Self::Target> {
        Some(&mut record.notifications)
    }
}

/// Pure sequence transformations used by the list editors.
pub mod list {
    /// `list` with `item` appended.
    pub fn appended<T: Clone>(list: &[T], item: T) -> Vec<T> {
        let mut next = list.to_vec();
        next.push(item);
        next
    }

    /// `list` with the element at `index` replaced by `f(element)`.
    /// Out-of-range indexes leave the list unchanged.
    pub fn replaced_at<T, F>(list: &[T], index: usize, f: F) -> Vec<T>
    where
        T: Clone,
        F: FnOnce(&T) -> T,
    {
        let mut next = list.to_vec();
        if let Some(slot) = next.get_mut(index) {
            *slot = f(&list[index]);
        }
        next
    }

    /// `list` without the element at `index`; later elements shift down.
    /// Out-of-range indexes leave the list unchanged.
    pub fn removed_at<T: Clone>(list: &[T], index: usize) -> Vec<T> {
        list.iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_processes() -> DraftRecord {
        DraftRecord {
            processes: vec![
                Process {
                    name: "Payroll".to_string(),
                    sites: vec![Site {
                        name: "Leeds".to_string(),
                        headcount: 3,
                    }],
                },
                Process {
                    name: "Billing".to_string(),
                    sites: Vec::new(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_update_at_leaves_input_untouched() {
        let before = record_with_processes();
        let after = update_at(&before, &Processes, |ps| list::removed_at(ps, 0));

        assert_eq!(before.processes.len(), 2);
        assert_eq!(after.processes.len(), 1);
        assert_eq!(after.processes[0].name, "Billing");
    }

    #[test]
    fn test_nested_lens_updates_only_its_parent() {
        let before = record_with_processes();
        let site = Site {
            name: "York".to_string(),
            headcount: 0,
        };
        let after = update_at(&before, &SitesOf(1), |sites| list::appended(sites, site));

        assert_eq!(after.processes[0], before.processes[0]);
        assert_eq!(after.processes[1].sites.len(), 1);
        assert_eq!(after.processes[1].sites[0].name, "York");
        assert!(before.processes[1].sites.is_empty());
    }

    #[test]
    fn test_missing_path_is_identity() {
        let before = record_with_processes();
        let after = update_at(&before, &SitesOf(9), |_| panic!("must not be called"));
        assert_eq!(after, before);
    }

    #[test]
    fn test_removed_at_shifts_later_elements() {
        let items = vec!["a", "b", "c", "d"];
        assert_eq!(list::removed_at(&items, 1), vec!["a", "c", "d"]);
        assert_eq!(list::removed_at(&items, 3), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_out_of_range_edits_are_no_ops() {
        let items = vec![1, 2, 3];
        assert_eq!(list::removed_at(&items, 3), items);
        assert_eq!(list::replaced_at(&items, 7, |n| n * 10), items);
    }

    #[test]
    fn test_replaced_at_only_touches_index() {
        let items = vec![1, 2, 3];
        assert_eq!(list::replaced_at(&items, 1, |n| n * 10), vec![1, 20, 3]);
    }
}
