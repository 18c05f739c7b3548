//! Trip-level reference data the session is constructed over.
//!
//! Trip dates are immutable for the lifetime of a session; edits to them
//! happen outside this engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Currency, SplitPolicy};

/// The enclosing trip: a closed date interval (both bounds optional) plus the
/// origin used to derive the first destination's origin label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripRef {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub origin_label: String,
    pub currency: Currency,
}

impl TripRef {
    #[must_use]
    pub fn new(origin_label: impl Into<String>) -> Self {
        Self {
            start_date: None,
            end_date: None,
            origin_label: origin_label.into(),
            currency: Currency::default(),
        }
    }

    #[must_use]
    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

/// Per-trip configuration handed in by the caller.
///
/// The split-policy preference is an explicit field here instead of a
/// browser-local side channel: the caller persists it and passes it back in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripConfig {
    pub preferred_split_policy: Option<SplitPolicy>,
}
