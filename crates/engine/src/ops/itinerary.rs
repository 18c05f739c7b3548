//! Itinerary-entry operations.
//!
//! Date containment and time-window sanity are fatal; a same-day time
//! overlap is returned as an advisory next to the successful result and
//! never aborts the call.

use chrono::NaiveTime;

use crate::{
    EngineError, EntryCmd, ResultEngine, dates,
    error::DateError,
    itinerary::{ItineraryEntry, ItineraryEntryId},
    overlap::{self, Interval, OverlapWarning},
};

use super::{PlanningSession, normalize_optional_text, normalize_required_name};

impl PlanningSession {
    /// Adds an itinerary entry under an existing destination.
    ///
    /// Returns the new entry's id together with an optional overlap advisory
    /// against same-day siblings of the same destination.
    pub fn add_itinerary_entry(
        &mut self,
        cmd: EntryCmd,
    ) -> ResultEngine<(ItineraryEntryId, Option<OverlapWarning>)> {
        let title = normalize_required_name(&cmd.title, "itinerary entry")?;
        self.validate_entry_placement(&cmd)?;

        let id = self.alloc_entry_id();
        let entry = ItineraryEntry {
            id,
            destination_id: cmd.destination_id,
            date: cmd.date,
            title,
            start_time: cmd.start_time,
            end_time: cmd.end_time,
            note: normalize_optional_text(cmd.note.as_deref()),
        };

        let warning = self.overlap_advisory(&entry);
        if let Some(warning) = &warning {
            tracing::debug!(
                "entry {id} overlaps {} sibling(s) on {}",
                warning.conflicting.len(),
                entry.date
            );
        }
        self.entries.insert(id, entry);

        Ok((id, warning))
    }

    /// Updates an entry in place. Entries are never reparented; the command
    /// must target the entry's current destination.
    pub fn update_itinerary_entry(
        &mut self,
        id: ItineraryEntryId,
        cmd: EntryCmd,
    ) -> ResultEngine<Option<OverlapWarning>> {
        let current = self.entry(id)?;
        if current.destination_id != cmd.destination_id {
            return Err(EngineError::InvalidOperation(
                "itinerary entries cannot move between destinations".to_string(),
            ));
        }
        let title = normalize_required_name(&cmd.title, "itinerary entry")?;
        self.validate_entry_placement(&cmd)?;

        let updated = ItineraryEntry {
            id,
            destination_id: cmd.destination_id,
            date: cmd.date,
            title,
            start_time: cmd.start_time,
            end_time: cmd.end_time,
            note: normalize_optional_text(cmd.note.as_deref()),
        };
        let warning = self.overlap_advisory(&updated);
        self.entries.insert(id, updated);

        Ok(warning)
    }

    /// Removes an entry. Expenses linked to it stay, with the link cleared.
    pub fn remove_itinerary_entry(&mut self, id: ItineraryEntryId) -> ResultEngine<()> {
        if self.entries.remove(&id).is_none() {
            return Err(EngineError::KeyNotFound(id.to_string()));
        }
        for expense in self.expenses.values_mut() {
            if expense.itinerary_entry_id == Some(id) {
                expense.itinerary_entry_id = None;
                tracing::debug!("expense {} detached from removed entry {id}", expense.id);
            }
        }
        Ok(())
    }

    fn validate_entry_placement(&self, cmd: &EntryCmd) -> ResultEngine<()> {
        let destination = self.destination(cmd.destination_id)?;
        dates::validate_within(cmd.date, destination.start_date, destination.end_date)?;
        validate_time_window(cmd.start_time, cmd.end_time)?;
        Ok(())
    }

    /// Runs the overlap detector against same-day siblings. The candidate's
    /// own id is excluded, which covers the edit case.
    fn overlap_advisory(&self, candidate: &ItineraryEntry) -> Option<OverlapWarning> {
        let candidate_interval = candidate.interval()?;
        let siblings: Vec<Interval> = self
            .entries_for(candidate.destination_id)
            .filter(|entry| entry.date == candidate.date)
            .filter_map(ItineraryEntry::interval)
            .collect();
        OverlapWarning::from_intervals(&overlap::find_overlaps(candidate_interval, &siblings))
    }
}

fn validate_time_window(
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
) -> Result<(), DateError> {
    if let (Some(start), Some(end)) = (start, end)
        && start >= end
    {
        return Err(DateError::InvertedRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn time_window_requires_start_before_end() {
        assert_eq!(validate_time_window(None, None), Ok(()));
        assert_eq!(validate_time_window(Some(t(9, 0)), None), Ok(()));
        assert_eq!(validate_time_window(Some(t(9, 0)), Some(t(10, 0))), Ok(()));
        assert_eq!(
            validate_time_window(Some(t(10, 0)), Some(t(10, 0))),
            Err(DateError::InvertedRange)
        );
        assert_eq!(
            validate_time_window(Some(t(11, 0)), Some(t(10, 0))),
            Err(DateError::InvertedRange)
        );
    }
}
