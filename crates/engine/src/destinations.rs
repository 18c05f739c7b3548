//! Destination entities: the named stops of a trip.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dense session-scoped destination id, allocated by the session's counter.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DestinationId(pub u32);

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "destination:{}", self.0)
    }
}

/// A named stop within a trip.
///
/// `sequence` is the dense 1..N ordinal among siblings; it is `None` only
/// transiently, before the assigner has run over a freshly built list.
/// `origin_label` is auto-derived: the trip origin for the first destination
/// by sequence, the previous destination's name otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub sequence: Option<u32>,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub origin_label: String,
    pub note: Option<String>,
}
