//! The planning session: one in-memory aggregate per open trip.
//!
//! Every operation is synchronous and all-or-nothing: validation happens
//! before any mutation, so a failed call leaves the session exactly as it
//! was. The session assumes single-writer access and performs no locking;
//! callers that might issue concurrent edits serialize externally.

use std::collections::BTreeMap;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{
    EngineError, ResultEngine, SplitPolicy, TripConfig, TripRef, dates,
    destinations::{Destination, DestinationId},
    expenses::{Expense, ExpenseId},
    itinerary::{ItineraryEntry, ItineraryEntryId},
};

mod destinations;
mod expenses;
mod itinerary;
mod totals;

pub use totals::{DestinationTotals, TripTotals};

/// In-memory tree of one trip's destinations, itinerary entries, and
/// expenses, plus the id counters for every engine-owned entity.
#[derive(Debug)]
pub struct PlanningSession {
    trip: TripRef,
    config: TripConfig,
    destinations: BTreeMap<DestinationId, Destination>,
    entries: BTreeMap<ItineraryEntryId, ItineraryEntry>,
    expenses: BTreeMap<ExpenseId, Expense>,
    next_destination_id: u32,
    next_entry_id: u32,
    next_expense_id: u32,
}

impl PlanningSession {
    /// Opens a session over a trip. Rejects an inverted trip date range;
    /// missing trip dates are fine and never block child creation.
    pub fn new(trip: TripRef, config: TripConfig) -> ResultEngine<Self> {
        dates::validate_containment(trip.start_date, trip.end_date, None, None)?;
        Ok(Self {
            trip,
            config,
            destinations: BTreeMap::new(),
            entries: BTreeMap::new(),
            expenses: BTreeMap::new(),
            next_destination_id: 1,
            next_entry_id: 1,
            next_expense_id: 1,
        })
    }

    #[must_use]
    pub fn trip(&self) -> &TripRef {
        &self.trip
    }

    #[must_use]
    pub fn config(&self) -> &TripConfig {
        &self.config
    }

    /// Records the split policy the user picked, so the caller can persist
    /// it and pre-select it next time.
    pub fn set_preferred_split_policy(&mut self, policy: SplitPolicy) {
        self.config.preferred_split_policy = Some(policy);
    }

    /// The policy to pre-select for a new expense.
    #[must_use]
    pub fn default_split_policy(&self) -> SplitPolicy {
        self.config.preferred_split_policy.unwrap_or_default()
    }

    /// Return a destination.
    pub fn destination(&self, id: DestinationId) -> ResultEngine<&Destination> {
        self.destinations
            .get(&id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    /// All destinations in sequence order.
    #[must_use]
    pub fn destinations(&self) -> Vec<&Destination> {
        let mut all: Vec<&Destination> = self.destinations.values().collect();
        all.sort_by_key(|destination| destination.sequence.unwrap_or(u32::MAX));
        all
    }

    /// Return an itinerary entry.
    pub fn entry(&self, id: ItineraryEntryId) -> ResultEngine<&ItineraryEntry> {
        self.entries
            .get(&id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    /// Itinerary entries of a destination, in creation order.
    pub fn entries_for(
        &self,
        destination_id: DestinationId,
    ) -> impl Iterator<Item = &ItineraryEntry> {
        self.entries
            .values()
            .filter(move |entry| entry.destination_id == destination_id)
    }

    /// Return an expense.
    pub fn expense(&self, id: ExpenseId) -> ResultEngine<&Expense> {
        self.expenses
            .get(&id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    /// Expenses of a destination, in creation order.
    pub fn expenses_for(&self, destination_id: DestinationId) -> impl Iterator<Item = &Expense> {
        self.expenses
            .values()
            .filter(move |expense| expense.destination_id == destination_id)
    }

    fn alloc_destination_id(&mut self) -> DestinationId {
        let id = DestinationId(self.next_destination_id);
        self.next_destination_id += 1;
        id
    }

    fn alloc_entry_id(&mut self) -> ItineraryEntryId {
        let id = ItineraryEntryId(self.next_entry_id);
        self.next_entry_id += 1;
        id
    }

    fn alloc_expense_id(&mut self) -> ExpenseId {
        let id = ExpenseId(self.next_expense_id);
        self.next_expense_id += 1;
        id
    }
}

fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Case- and diacritic-insensitive key for duplicate-name checks.
fn name_key(value: &str) -> String {
    value
        .trim()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_key_folds_case_and_diacritics() {
        assert_eq!(name_key("  Hội An "), name_key("hoi an"));
        assert_eq!(name_key("HUẾ"), name_key("hue"));
        assert_ne!(name_key("Hanoi"), name_key("Hoi An"));
    }

    #[test]
    fn session_rejects_inverted_trip_range() {
        let trip = TripRef::new("Hanoi").dates(
            "2024-03-10".parse().unwrap(),
            "2024-03-01".parse().unwrap(),
        );
        assert!(PlanningSession::new(trip, TripConfig::default()).is_err());
    }
}
