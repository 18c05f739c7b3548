//! Request/response types shared between the planning engine's callers and
//! the transport layer. Monetary values travel as `i64` minor units plus a
//! currency code; engine-owned ids are dense integers, participant ids are
//! UUIDs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Vnd,
    Eur,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    #[default]
    Equal,
    Weighted,
    Percentage,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Food,
    Lodging,
    Transport,
    Activities,
    Shopping,
    #[default]
    Other,
}

pub mod trip {
    use super::*;

    /// Trip reference data the session is opened over.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TripView {
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
        pub origin_label: String,
        pub currency: Currency,
        /// Split policy to pre-select for new expenses.
        pub preferred_split_policy: Option<SplitPolicy>,
    }
}

pub mod destination {
    use super::*;

    /// Request body for creating or updating a destination.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DestinationNew {
        pub name: String,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
        pub note: Option<String>,
    }

    /// A destination as returned to the client.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DestinationView {
        pub id: u32,
        /// Dense 1..N ordinal among the trip's destinations.
        pub sequence: u32,
        pub name: String,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
        /// Derived: trip origin for the first destination, previous
        /// destination's name otherwise.
        pub origin_label: String,
        pub note: Option<String>,
    }

    /// Full new ordering after a manual drag-reorder.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReorderRequest {
        pub ordered_ids: Vec<u32>,
    }
}

pub mod itinerary {
    use super::*;

    /// Request body for creating or updating an itinerary entry.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryNew {
        pub destination_id: u32,
        pub date: NaiveDate,
        pub title: String,
        pub start_time: Option<NaiveTime>,
        pub end_time: Option<NaiveTime>,
        pub note: Option<String>,
    }

    /// An itinerary entry as returned to the client.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryView {
        pub id: u32,
        pub destination_id: u32,
        pub date: NaiveDate,
        pub title: String,
        pub start_time: Option<NaiveTime>,
        pub end_time: Option<NaiveTime>,
        pub note: Option<String>,
    }

    /// Non-fatal scheduling-conflict advisory: the entry was saved, these
    /// same-day siblings overlap its time window.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct OverlapAdvisory {
        pub conflicting_entry_ids: Vec<u32>,
    }
}

pub mod expense {
    use super::*;

    /// One participant with a policy-specific weight (share count for
    /// weighted, 0–100 for percentage, absent for equal).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ParticipantInput {
        pub id: Uuid,
        pub weight: Option<f64>,
    }

    /// Request body for creating or updating an expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub destination_id: u32,
        pub itinerary_entry_id: Option<u32>,
        pub amount_minor: i64,
        pub date: NaiveDate,
        pub category: ExpenseCategory,
        pub payer_id: Uuid,
        pub split_policy: SplitPolicy,
        pub participants: Vec<ParticipantInput>,
    }

    /// One participant's allocated share. `is_payer` is derived from the
    /// expense's payer, never chosen by the client.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ParticipantShare {
        pub participant_id: Uuid,
        pub amount_minor: i64,
        pub is_payer: bool,
    }

    /// An expense with its computed split, as returned to the client.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: u32,
        pub destination_id: u32,
        pub itinerary_entry_id: Option<u32>,
        pub amount_minor: i64,
        pub currency: Currency,
        pub date: NaiveDate,
        pub category: ExpenseCategory,
        pub payer_id: Uuid,
        pub split_policy: SplitPolicy,
        pub shares: Vec<ParticipantShare>,
    }
}

pub mod totals {
    use super::*;

    /// Roll-up for one destination.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DestinationTotals {
        pub entry_count: usize,
        pub expense_total_minor: i64,
    }

    /// Roll-up for the whole trip.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TripTotals {
        pub destination_count: usize,
        pub expense_total_minor: i64,
    }
}
