//! Itinerary entries: scheduled activities on a single day of a destination.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{destinations::DestinationId, overlap::Interval};

/// Dense session-scoped itinerary-entry id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItineraryEntryId(pub u32);

impl fmt::Display for ItineraryEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry:{}", self.0)
    }
}

/// A scheduled activity on one calendar day, with an optional time window.
///
/// When both times are present, `start_time < end_time` holds (enforced at
/// creation). Entries are never reparented to another destination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItineraryEntry {
    pub id: ItineraryEntryId,
    pub destination_id: DestinationId,
    pub date: NaiveDate,
    pub title: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub note: Option<String>,
}

impl ItineraryEntry {
    /// The entry's time window in minutes since midnight, if it has one.
    ///
    /// Entries with a missing start or end do not take part in overlap
    /// detection.
    #[must_use]
    pub fn interval(&self) -> Option<Interval> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(Interval::new(
                self.id,
                minutes_since_midnight(start),
                minutes_since_midnight(end),
            )),
            _ => None,
        }
    }
}

fn minutes_since_midnight(time: NaiveTime) -> u16 {
    (time.hour() * 60 + time.minute()) as u16
}
