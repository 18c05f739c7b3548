//! Date-range containment rules shared by every planning form.
//!
//! All comparisons happen at **day granularity**: callers holding timestamps
//! normalize them with [`day_of`] first. Ranges are closed intervals, both
//! endpoints inclusive.
//!
//! A missing parent bound never blocks the child: a trip with unknown dates
//! must not prevent destination creation. This permissiveness is a deliberate
//! policy of the planner, so the short-circuit lives here and nowhere else.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DateError;

/// Normalizes a timestamp to its calendar day (UTC), dropping time-of-day.
#[must_use]
pub fn day_of(moment: DateTime<Utc>) -> NaiveDate {
    moment.date_naive()
}

/// Validates that a child date (or date range) lies within the parent range.
///
/// Rules, each checked independently:
/// - both child dates present: `child_start <= child_end`, else
///   [`DateError::InvertedRange`];
/// - `child_start` vs. `parent_start`: [`DateError::BeforeParentStart`];
/// - `child_end` vs. `parent_end`: [`DateError::AfterParentEnd`];
/// - when only one child date is supplied, that single date is validated
///   against **both** parent bounds.
///
/// Absent parent bounds short-circuit to success.
pub fn validate_containment(
    child_start: Option<NaiveDate>,
    child_end: Option<NaiveDate>,
    parent_start: Option<NaiveDate>,
    parent_end: Option<NaiveDate>,
) -> Result<(), DateError> {
    if let (Some(start), Some(end)) = (child_start, child_end)
        && start > end
    {
        return Err(DateError::InvertedRange);
    }

    match (child_start, child_end) {
        (Some(start), Some(end)) => {
            check_lower(start, parent_start)?;
            check_upper(end, parent_end)?;
        }
        (Some(single), None) | (None, Some(single)) => {
            check_lower(single, parent_start)?;
            check_upper(single, parent_end)?;
        }
        (None, None) => {}
    }

    Ok(())
}

/// Validates a single day against a parent range. Shorthand for the
/// one-date case of [`validate_containment`].
pub fn validate_within(
    date: NaiveDate,
    parent_start: Option<NaiveDate>,
    parent_end: Option<NaiveDate>,
) -> Result<(), DateError> {
    validate_containment(Some(date), None, parent_start, parent_end)
}

fn check_lower(date: NaiveDate, parent_start: Option<NaiveDate>) -> Result<(), DateError> {
    match parent_start {
        Some(start) if date < start => Err(DateError::BeforeParentStart),
        _ => Ok(()),
    }
}

fn check_upper(date: NaiveDate, parent_end: Option<NaiveDate>) -> Result<(), DateError> {
    match parent_end {
        Some(end) if date > end => Err(DateError::AfterParentEnd),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn range_inside_parent_passes() {
        assert_eq!(
            validate_containment(
                Some(d("2024-03-02")),
                Some(d("2024-03-05")),
                Some(d("2024-03-01")),
                Some(d("2024-03-10")),
            ),
            Ok(())
        );
    }

    #[test]
    fn boundary_days_are_inclusive() {
        assert_eq!(
            validate_containment(
                Some(d("2024-03-01")),
                Some(d("2024-03-10")),
                Some(d("2024-03-01")),
                Some(d("2024-03-10")),
            ),
            Ok(())
        );
    }

    #[test]
    fn inverted_range_rejected() {
        assert_eq!(
            validate_containment(Some(d("2024-03-05")), Some(d("2024-03-02")), None, None),
            Err(DateError::InvertedRange)
        );
    }

    #[test]
    fn start_before_parent_rejected() {
        assert_eq!(
            validate_containment(
                Some(d("2024-02-28")),
                Some(d("2024-03-05")),
                Some(d("2024-03-01")),
                Some(d("2024-03-10")),
            ),
            Err(DateError::BeforeParentStart)
        );
    }

    #[test]
    fn end_after_parent_rejected() {
        assert_eq!(
            validate_containment(
                Some(d("2024-03-02")),
                Some(d("2024-03-11")),
                Some(d("2024-03-01")),
                Some(d("2024-03-10")),
            ),
            Err(DateError::AfterParentEnd)
        );
    }

    #[test]
    fn single_date_checked_against_both_bounds() {
        assert_eq!(
            validate_containment(
                Some(d("2024-03-11")),
                None,
                Some(d("2024-03-01")),
                Some(d("2024-03-10")),
            ),
            Err(DateError::AfterParentEnd)
        );
        assert_eq!(
            validate_containment(
                None,
                Some(d("2024-02-01")),
                Some(d("2024-03-01")),
                Some(d("2024-03-10")),
            ),
            Err(DateError::BeforeParentStart)
        );
    }

    #[test]
    fn missing_parent_bounds_short_circuit_to_success() {
        assert_eq!(
            validate_containment(Some(d("1999-01-01")), Some(d("2100-12-31")), None, None),
            Ok(())
        );
        // One-sided parent bound still applies.
        assert_eq!(
            validate_containment(
                Some(d("1999-01-01")),
                Some(d("2100-12-31")),
                Some(d("2024-03-01")),
                None,
            ),
            Err(DateError::BeforeParentStart)
        );
    }

    #[test]
    fn day_of_drops_time_component() {
        let moment = "2024-03-01T23:59:59Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(day_of(moment), d("2024-03-01"));
    }
}
