//! Planning consistency and expense-split engine for a travel planner.
//!
//! The engine keeps one trip's Destination → Itinerary-Entry → Expense tree
//! temporally consistent, reports same-day scheduling conflicts as
//! advisories, and allocates expense amounts across participants with an
//! exact-sum guarantee. It is a pure, synchronous library: no I/O, no
//! persistence, no locking — one [`PlanningSession`] per open trip.

pub use commands::{DestinationCmd, EntryCmd, ExpenseCmd};
pub use currency::Currency;
pub use dates::{day_of, validate_containment, validate_within};
pub use destinations::{Destination, DestinationId};
pub use error::{DateError, EngineError, SplitError};
pub use expenses::{Expense, ExpenseCategory, ExpenseId};
pub use itinerary::{ItineraryEntry, ItineraryEntryId};
pub use money::Money;
pub use ops::{DestinationTotals, PlanningSession, TripTotals};
pub use overlap::{Interval, OverlapWarning, find_overlaps};
pub use sequence::{SequenceOrder, renumber};
pub use split::{Participant, Share, SplitDetail, SplitPolicy, compute_split};
pub use trip::{TripConfig, TripRef};

mod commands;
mod currency;
mod dates;
mod destinations;
mod error;
mod expenses;
mod itinerary;
mod money;
mod ops;
mod overlap;
mod sequence;
mod split;
mod trip;

type ResultEngine<T> = Result<T, EngineError>;
