//! Bottom-up totals.
//!
//! Recomputed on demand: the per-trip entity counts are tens, not millions,
//! so recomputation wins over cache invalidation.

use serde::{Deserialize, Serialize};

use crate::{Money, ResultEngine, destinations::DestinationId};

use super::PlanningSession;

/// Roll-up for one destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationTotals {
    pub entry_count: usize,
    pub expense_total: Money,
}

/// Roll-up for the whole trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripTotals {
    pub destination_count: usize,
    pub expense_total: Money,
}

impl PlanningSession {
    /// Entry count and expense sum for one destination.
    pub fn destination_totals(&self, id: DestinationId) -> ResultEngine<DestinationTotals> {
        self.destination(id)?;
        Ok(DestinationTotals {
            entry_count: self.entries_for(id).count(),
            expense_total: self.expenses_for(id).map(|expense| expense.amount).sum(),
        })
    }

    /// Destination count and expense sum across the trip.
    #[must_use]
    pub fn trip_totals(&self) -> TripTotals {
        TripTotals {
            destination_count: self.destinations.len(),
            expense_total: self.expenses.values().map(|expense| expense.amount).sum(),
        }
    }
}
