//! Expense entities and the fixed category set.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, Money, destinations::DestinationId, itinerary::ItineraryEntryId,
    split::{Participant, SplitDetail, SplitPolicy},
};

/// Dense session-scoped expense id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ExpenseId(pub u32);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expense:{}", self.0)
    }
}

/// Fixed expense categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

impl ExpenseCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Lodging => "lodging",
            Self::Transport => "transport",
            Self::Activities => "activities",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for ExpenseCategory {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "food" => Ok(Self::Food),
            "lodging" => Ok(Self::Lodging),
            "transport" => Ok(Self::Transport),
            "activities" => Ok(Self::Activities),
            "shopping" => Ok(Self::Shopping),
            "other" => Ok(Self::Other),
            other => Err(EngineError::InvalidName(format!(
                "invalid expense category: {other}"
            ))),
        }
    }
}

/// A monetary cost attributed to a destination, optionally to one itinerary
/// entry, split among participants.
///
/// The stored [`SplitDetail`] is recomputed whenever the amount, policy, or
/// participant set changes; it is derived output, never caller input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub destination_id: DestinationId,
    pub itinerary_entry_id: Option<ItineraryEntryId>,
    pub amount: Money,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub payer_id: Uuid,
    pub policy: SplitPolicy,
    pub participants: Vec<Participant>,
    pub split: SplitDetail,
}
