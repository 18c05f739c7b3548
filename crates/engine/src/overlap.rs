//! Same-day time-overlap detection for itinerary entries.
//!
//! Overlap is a **signal, not a rejection**: the session reports it as an
//! [`OverlapWarning`] next to a successful create/update and the UI decides
//! whether to let the user proceed. Every call site goes through
//! [`find_overlaps`]; there is no per-screen variant of the rule.

use serde::{Deserialize, Serialize};

use crate::itinerary::ItineraryEntryId;

/// A half-open slice of a day in minutes since midnight.
///
/// `id` identifies the owning itinerary entry so that an entry being edited
/// is never compared against itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub id: ItineraryEntryId,
    pub start_min: u16,
    pub end_min: u16,
}

impl Interval {
    #[must_use]
    pub const fn new(id: ItineraryEntryId, start_min: u16, end_min: u16) -> Self {
        Self {
            id,
            start_min,
            end_min,
        }
    }
}

/// Returns every existing interval that overlaps the candidate.
///
/// Two intervals overlap iff `s1 < e2 && e1 > s2` — the comparison is open,
/// so an entry ending at 10:00 and another starting at 10:00 do **not**
/// conflict. The candidate is excluded from comparison against itself,
/// matched by id.
#[must_use]
pub fn find_overlaps(candidate: Interval, existing: &[Interval]) -> Vec<Interval> {
    existing
        .iter()
        .copied()
        .filter(|other| other.id != candidate.id)
        .filter(|other| candidate.start_min < other.end_min && candidate.end_min > other.start_min)
        .collect()
}

/// Non-fatal advisory carrying the ids of conflicting itinerary entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapWarning {
    pub conflicting: Vec<ItineraryEntryId>,
}

impl OverlapWarning {
    /// Wraps a detector result, returning `None` when there is no conflict.
    #[must_use]
    pub fn from_intervals(overlaps: &[Interval]) -> Option<Self> {
        if overlaps.is_empty() {
            return None;
        }
        Some(Self {
            conflicting: overlaps.iter().map(|interval| interval.id).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> ItineraryEntryId {
        ItineraryEntryId(raw)
    }

    #[test]
    fn detects_partial_overlap() {
        // 09:00-10:30 vs 10:00-11:00.
        let existing = [Interval::new(id(1), 540, 630)];
        let overlaps = find_overlaps(Interval::new(id(2), 600, 660), &existing);
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].id, id(1));
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        // 09:00-10:00 vs 10:00-11:00.
        let morning = Interval::new(id(1), 540, 600);
        let late = Interval::new(id(2), 600, 660);
        assert!(find_overlaps(late, &[morning]).is_empty());
        assert!(find_overlaps(morning, &[late]).is_empty());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Interval::new(id(1), 100, 200);
        let b = Interval::new(id(2), 150, 250);
        assert_eq!(
            find_overlaps(a, &[b]).is_empty(),
            find_overlaps(b, &[a]).is_empty()
        );

        let c = Interval::new(id(3), 300, 400);
        assert_eq!(
            find_overlaps(a, &[c]).is_empty(),
            find_overlaps(c, &[a]).is_empty()
        );
    }

    #[test]
    fn candidate_excluded_from_itself() {
        let slot = Interval::new(id(7), 540, 600);
        assert!(find_overlaps(slot, &[slot]).is_empty());
    }

    #[test]
    fn containment_counts_as_overlap() {
        let outer = Interval::new(id(1), 540, 720);
        let inner = Interval::new(id(2), 600, 660);
        assert_eq!(find_overlaps(inner, &[outer]).len(), 1);
        assert_eq!(find_overlaps(outer, &[inner]).len(), 1);
    }

    #[test]
    fn warning_wraps_only_non_empty_results() {
        assert_eq!(OverlapWarning::from_intervals(&[]), None);
        let warning =
            OverlapWarning::from_intervals(&[Interval::new(id(1), 0, 10)]).unwrap();
        assert_eq!(warning.conflicting, vec![id(1)]);
    }
}
