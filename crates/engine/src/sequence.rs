//! Dense sequence renumbering for sibling destinations.
//!
//! Every ordering mutation goes through [`renumber`]: callers hand in the
//! full sibling list and receive a new, densely 1..N-numbered list back.
//! No in-place splicing, no ad hoc counters.

use crate::destinations::Destination;

/// Which order the incoming sibling list is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceOrder {
    /// Stable-sort by the existing `sequence` first; missing values last.
    BySequence,
    /// The caller already ordered the list (manual drag-reorder).
    AsProvided,
}

/// Reassigns `sequence = 1..=N` over the sibling list.
///
/// Idempotent: renumbering an already-dense list is a no-op, so
/// `renumber(renumber(v, o), o) == renumber(v, o)`.
#[must_use]
pub fn renumber(mut siblings: Vec<Destination>, order: SequenceOrder) -> Vec<Destination> {
    if order == SequenceOrder::BySequence {
        siblings.sort_by_key(|destination| destination.sequence.unwrap_or(u32::MAX));
    }
    for (index, destination) in siblings.iter_mut().enumerate() {
        destination.sequence = Some(index as u32 + 1);
    }
    siblings
}
