//! The domain store: the set of days still considered legal for every
//! unassigned subject, with frame-based undo of the prunes made during forward
//! checking.

use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::examtt_assert_moderate;
use crate::examtt_assert_simple;
use crate::problem::Day;
use crate::problem::Subject;

/// A single recorded removal, used to exactly reverse a domain mutation on
/// backtrack.
#[derive(Debug, Clone, Copy)]
struct PruneEntry {
    subject: Subject,
    day: Day,
}

/// Holds the current candidate days per subject.
///
/// Removals are recorded on the most recent trail frame; [`DomainStore::undo_frame`]
/// re-inserts the recorded removals in reverse order, restoring the store to a
/// state structurally identical to the one before the frame was opened.
#[derive(Debug, Clone)]
pub(crate) struct DomainStore {
    /// For every subject, membership of each day in the current domain.
    candidates: KeyedVec<Subject, Vec<bool>>,
    /// For every subject, the number of days currently in its domain.
    remaining: KeyedVec<Subject, usize>,
    num_days: usize,
    prune_log: Trail<PruneEntry>,
}

impl DomainStore {
    /// Creates a store in which every subject's domain is the full set of
    /// days.
    pub(crate) fn new(num_subjects: usize, num_days: usize) -> Self {
        DomainStore {
            candidates: (0..num_subjects).map(|_| vec![true; num_days]).collect(),
            remaining: (0..num_subjects).map(|_| num_days).collect(),
            num_days,
            prune_log: Trail::default(),
        }
    }

    /// Opens a new prune frame; all removals up to the matching
    /// [`DomainStore::undo_frame`] belong to it.
    pub(crate) fn new_frame(&mut self) {
        self.prune_log.new_frame();
    }

    /// The number of currently open prune frames.
    pub(crate) fn depth(&self) -> usize {
        self.prune_log.depth()
    }

    /// Removes `day` from `subject`'s domain if present, recording the
    /// removal on the open frame. Returns whether the domain became empty.
    pub(crate) fn remove(&mut self, subject: Subject, day: Day) -> bool {
        if !self.candidates[subject][day.index()] {
            return false;
        }

        self.candidates[subject][day.index()] = false;
        self.remaining[subject] -= 1;
        self.prune_log.push(PruneEntry { subject, day });

        self.remaining[subject] == 0
    }

    /// Re-inserts every removal recorded on the most recent frame, in reverse
    /// order, and discards that frame.
    pub(crate) fn undo_frame(&mut self) {
        examtt_assert_simple!(self.prune_log.depth() > 0);

        // The borrow checker does not allow reinserting while draining the
        // trail, so the frame is collected first.
        let undone: Vec<PruneEntry> = self.prune_log.pop_frame().collect();
        for entry in undone {
            examtt_assert_moderate!(!self.candidates[entry.subject][entry.day.index()]);

            self.candidates[entry.subject][entry.day.index()] = true;
            self.remaining[entry.subject] += 1;
        }
    }

    /// The number of days currently in `subject`'s domain.
    pub(crate) fn remaining(&self, subject: Subject) -> usize {
        self.remaining[subject]
    }

    pub(crate) fn contains(&self, subject: Subject, day: Day) -> bool {
        self.candidates[subject][day.index()]
    }

    /// Iterates over `subject`'s current domain in natural day order.
    pub(crate) fn iter_days(&self, subject: Subject) -> impl Iterator<Item = Day> + '_ {
        self.candidates[subject]
            .iter()
            .enumerate()
            .filter(|(_, &present)| present)
            .map(|(index, _)| Day::create_from_index(index))
    }

    pub(crate) fn num_days(&self) -> usize {
        self.num_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_domains_contain_every_day() {
        let domains = DomainStore::new(2, 3);

        for index in 0..2 {
            let subject = Subject::new(index);
            assert_eq!(domains.remaining(subject), 3);
            assert_eq!(domains.iter_days(subject).count(), 3);
        }
    }

    #[test]
    fn removal_reports_an_emptied_domain() {
        let mut domains = DomainStore::new(1, 2);
        let subject = Subject::new(0);
        domains.new_frame();

        assert!(!domains.remove(subject, Day::new(0)));
        assert!(domains.remove(subject, Day::new(1)));
        assert_eq!(domains.remaining(subject), 0);
    }

    #[test]
    fn removing_an_absent_day_is_a_noop() {
        let mut domains = DomainStore::new(1, 2);
        let subject = Subject::new(0);
        domains.new_frame();

        assert!(!domains.remove(subject, Day::new(1)));
        let before = domains.clone();

        assert!(!domains.remove(subject, Day::new(1)));
        assert_eq!(domains.remaining(subject), before.remaining(subject));
    }

    #[test]
    fn undoing_a_frame_restores_the_store_exactly() {
        let mut domains = DomainStore::new(3, 3);
        domains.new_frame();
        let _ = domains.remove(Subject::new(0), Day::new(2));
        let snapshot = domains.clone();

        domains.new_frame();
        let _ = domains.remove(Subject::new(0), Day::new(0));
        let _ = domains.remove(Subject::new(1), Day::new(1));
        let _ = domains.remove(Subject::new(2), Day::new(2));
        domains.undo_frame();

        for index in 0..3 {
            let subject = Subject::new(index);
            assert_eq!(domains.remaining(subject), snapshot.remaining(subject));
            assert_eq!(
                domains.iter_days(subject).collect::<Vec<_>>(),
                snapshot.iter_days(subject).collect::<Vec<_>>()
            );
        }
        assert_eq!(domains.depth(), snapshot.depth());
    }
}
