//! Command structs for session operations.
//!
//! These types group parameters for write operations (add/update destination,
//! itinerary entry, expense), keeping call sites readable and avoiding long
//! argument lists.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::{
    Money, destinations::DestinationId, expenses::ExpenseCategory, itinerary::ItineraryEntryId,
    split::{Participant, SplitPolicy},
};

/// Create or update a destination.
#[derive(Clone, Debug)]
pub struct DestinationCmd {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub note: Option<String>,
}

impl DestinationCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_date: None,
            end_date: None,
            note: None,
        }
    }

    #[must_use]
    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    #[must_use]
    pub fn start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Create or update an itinerary entry.
#[derive(Clone, Debug)]
pub struct EntryCmd {
    pub destination_id: DestinationId,
    pub date: NaiveDate,
    pub title: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub note: Option<String>,
}

impl EntryCmd {
    #[must_use]
    pub fn new(destination_id: DestinationId, date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            destination_id,
            date,
            title: title.into(),
            start_time: None,
            end_time: None,
            note: None,
        }
    }

    #[must_use]
    pub fn time_window(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Create or update an expense.
#[derive(Clone, Debug)]
pub struct ExpenseCmd {
    pub destination_id: DestinationId,
    pub itinerary_entry_id: Option<ItineraryEntryId>,
    pub amount: Money,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub payer_id: Uuid,
    pub policy: SplitPolicy,
    pub participants: Vec<Participant>,
}

impl ExpenseCmd {
    #[must_use]
    pub fn new(
        destination_id: DestinationId,
        amount: Money,
        date: NaiveDate,
        payer_id: Uuid,
        policy: SplitPolicy,
    ) -> Self {
        Self {
            destination_id,
            itinerary_entry_id: None,
            amount,
            date,
            category: ExpenseCategory::default(),
            payer_id,
            policy,
            participants: Vec::new(),
        }
    }

    #[must_use]
    pub fn entry(mut self, entry_id: ItineraryEntryId) -> Self {
        self.itinerary_entry_id = Some(entry_id);
        self
    }

    #[must_use]
    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn participant(mut self, id: Uuid) -> Self {
        self.participants.push(Participant::new(id));
        self
    }

    #[must_use]
    pub fn weighted_participant(mut self, id: Uuid, weight: f64) -> Self {
        self.participants.push(Participant::weighted(id, weight));
        self
    }

    #[must_use]
    pub fn participants(mut self, participants: Vec<Participant>) -> Self {
        self.participants = participants;
        self
    }
}
