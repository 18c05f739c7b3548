//! Destination operations: add, update, reorder, remove.
//!
//! Origin labels are re-derived after every destination mutation: the first
//! destination by sequence starts from the trip origin, every later one from
//! its predecessor's name.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    DestinationCmd, EngineError, ResultEngine, dates,
    destinations::{Destination, DestinationId},
    sequence::{self, SequenceOrder},
};

use super::{PlanningSession, name_key, normalize_optional_text, normalize_required_name};

impl PlanningSession {
    /// Appends a destination with the next sequence number.
    ///
    /// Validates the date range against the trip and rejects names that
    /// collapse to an existing destination's name.
    pub fn add_destination(&mut self, cmd: DestinationCmd) -> ResultEngine<&Destination> {
        let name = normalize_required_name(&cmd.name, "destination")?;
        self.ensure_name_free(&name, None)?;
        dates::validate_containment(
            cmd.start_date,
            cmd.end_date,
            self.trip.start_date,
            self.trip.end_date,
        )?;

        let sequence = self
            .destinations
            .values()
            .filter_map(|destination| destination.sequence)
            .max()
            .unwrap_or(0)
            + 1;
        let origin_label = self
            .last_destination()
            .map(|destination| destination.name.clone())
            .unwrap_or_else(|| self.trip.origin_label.clone());

        let id = self.alloc_destination_id();
        let destination = Destination {
            id,
            sequence: Some(sequence),
            name,
            start_date: cmd.start_date,
            end_date: cmd.end_date,
            origin_label,
            note: normalize_optional_text(cmd.note.as_deref()),
        };
        tracing::debug!("destination {id} added at sequence {sequence}");
        self.destinations.insert(id, destination);

        self.destination(id)
    }

    /// Updates a destination's name, dates, and note.
    ///
    /// A range change must still contain every stored entry and expense of
    /// the destination; the whole update is rejected otherwise. Renaming
    /// re-derives the successor's origin label.
    pub fn update_destination(
        &mut self,
        id: DestinationId,
        cmd: DestinationCmd,
    ) -> ResultEngine<&Destination> {
        self.destination(id)?;
        let name = normalize_required_name(&cmd.name, "destination")?;
        self.ensure_name_free(&name, Some(id))?;
        dates::validate_containment(
            cmd.start_date,
            cmd.end_date,
            self.trip.start_date,
            self.trip.end_date,
        )?;
        self.ensure_children_within(id, cmd.start_date, cmd.end_date)?;

        let destination = self
            .destinations
            .get_mut(&id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        destination.name = name;
        destination.start_date = cmd.start_date;
        destination.end_date = cmd.end_date;
        destination.note = normalize_optional_text(cmd.note.as_deref());

        self.rederive_origin_labels();
        self.destination(id)
    }

    /// Applies a manual reorder. `ids` must list every destination exactly
    /// once; sequences are reassigned densely in the given order.
    pub fn reorder_destinations(&mut self, ids: &[DestinationId]) -> ResultEngine<()> {
        if ids.len() != self.destinations.len() {
            return Err(EngineError::InvalidOperation(
                "reorder must include every destination exactly once".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for id in ids {
            if !self.destinations.contains_key(id) {
                return Err(EngineError::KeyNotFound(id.to_string()));
            }
            if !seen.insert(*id) {
                return Err(EngineError::InvalidOperation(
                    "reorder must include every destination exactly once".to_string(),
                ));
            }
        }

        let mut ordered = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(destination) = self.destinations.remove(id) {
                ordered.push(destination);
            }
        }
        for destination in sequence::renumber(ordered, SequenceOrder::AsProvided) {
            self.destinations.insert(destination.id, destination);
        }

        self.rederive_origin_labels();
        tracing::debug!("destinations reordered ({} siblings)", ids.len());
        Ok(())
    }

    /// Removes a destination, cascading its itinerary entries and expenses,
    /// then renumbers the remaining siblings densely.
    pub fn remove_destination(&mut self, id: DestinationId) -> ResultEngine<()> {
        if self.destinations.remove(&id).is_none() {
            return Err(EngineError::KeyNotFound(id.to_string()));
        }

        let entries_before = self.entries.len();
        let expenses_before = self.expenses.len();
        self.entries.retain(|_, entry| entry.destination_id != id);
        self.expenses
            .retain(|_, expense| expense.destination_id != id);

        let remaining: Vec<Destination> =
            std::mem::take(&mut self.destinations).into_values().collect();
        for destination in sequence::renumber(remaining, SequenceOrder::BySequence) {
            self.destinations.insert(destination.id, destination);
        }

        self.rederive_origin_labels();
        tracing::info!(
            "destination {id} removed (cascaded {} entries, {} expenses)",
            entries_before - self.entries.len(),
            expenses_before - self.expenses.len()
        );
        Ok(())
    }

    /// Checks that every stored child of `id` still fits inside the
    /// candidate date range, so a narrowing never strands an entry or an
    /// expense outside its destination.
    fn ensure_children_within(
        &self,
        id: DestinationId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ResultEngine<()> {
        for entry in self.entries_for(id) {
            if dates::validate_within(entry.date, start, end).is_err() {
                return Err(EngineError::InvalidOperation(format!(
                    "new date range excludes itinerary entry {} on {}",
                    entry.id, entry.date
                )));
            }
        }
        for expense in self.expenses_for(id) {
            if dates::validate_within(expense.date, start, end).is_err() {
                return Err(EngineError::InvalidOperation(format!(
                    "new date range excludes expense {} on {}",
                    expense.id, expense.date
                )));
            }
        }
        Ok(())
    }

    fn ensure_name_free(&self, name: &str, except: Option<DestinationId>) -> ResultEngine<()> {
        let key = name_key(name);
        let taken = self
            .destinations
            .values()
            .filter(|destination| Some(destination.id) != except)
            .any(|destination| name_key(&destination.name) == key);
        if taken {
            return Err(EngineError::ExistingKey(name.to_string()));
        }
        Ok(())
    }

    /// The destination that currently has the maximum sequence.
    fn last_destination(&self) -> Option<&Destination> {
        self.destinations
            .values()
            .filter(|destination| destination.sequence.is_some())
            .max_by_key(|destination| destination.sequence)
    }

    /// Walks destinations in sequence order and rebuilds every origin label
    /// from the trip origin and the predecessor chain.
    fn rederive_origin_labels(&mut self) {
        let ordered: Vec<DestinationId> = self
            .destinations()
            .iter()
            .map(|destination| destination.id)
            .collect();

        let mut previous = self.trip.origin_label.clone();
        for id in ordered {
            if let Some(destination) = self.destinations.get_mut(&id) {
                destination.origin_label = previous.clone();
                previous = destination.name.clone();
            }
        }
    }
}
