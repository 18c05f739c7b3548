//! Deterministic cost splitting for expenses.
//!
//! [`compute_split`] allocates an amount across participants under one of
//! three policies and guarantees the allocations sum **exactly** to the
//! amount, to the last minor unit. Independent per-participant rounding can
//! drift by a unit or two; the residual here is always folded back, so
//! `Σ shares == amount` holds for every valid input.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, Money, error::SplitError};

/// Tolerance when checking that percentage weights sum to 100.
const PERCENT_EPSILON: f64 = 0.01;

/// How an expense amount is allocated across participants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    #[default]
    Equal,
    Weighted,
    Percentage,
}

impl SplitPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Weighted => "weighted",
            Self::Percentage => "percentage",
        }
    }
}

impl TryFrom<&str> for SplitPolicy {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "equal" => Ok(Self::Equal),
            "weighted" => Ok(Self::Weighted),
            "percentage" => Ok(Self::Percentage),
            other => Err(EngineError::InvalidName(format!(
                "invalid split policy: {other}"
            ))),
        }
    }
}

/// One participant in an expense, with a policy-specific weight.
///
/// The weight is a share count for [`SplitPolicy::Weighted`], a 0–100
/// percentage for [`SplitPolicy::Percentage`], and ignored for
/// [`SplitPolicy::Equal`]. A missing weight counts as zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub weight: Option<f64>,
}

impl Participant {
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self { id, weight: None }
    }

    #[must_use]
    pub const fn weighted(id: Uuid, weight: f64) -> Self {
        Self {
            id,
            weight: Some(weight),
        }
    }

    fn weight_or_zero(self) -> f64 {
        self.weight.unwrap_or(0.0)
    }
}

/// One participant's allocated share. `is_payer` is derived from the
/// expense's payer id, never chosen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub participant_id: Uuid,
    pub amount: Money,
    pub is_payer: bool,
}

/// The full allocation of an expense, in participant insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitDetail {
    pub shares: Vec<Share>,
}

impl SplitDetail {
    /// Sum of all shares. Equals the expense amount by construction.
    #[must_use]
    pub fn total(&self) -> Money {
        self.shares.iter().map(|share| share.amount).sum()
    }

    #[must_use]
    pub fn share_for(&self, participant_id: Uuid) -> Option<&Share> {
        self.shares
            .iter()
            .find(|share| share.participant_id == participant_id)
    }
}

/// Computes the per-participant allocation of `amount` under `policy`.
///
/// Pure and deterministic: the same inputs always produce the same shares,
/// in participant insertion order.
pub fn compute_split(
    amount: Money,
    policy: SplitPolicy,
    participants: &[Participant],
    payer_id: Uuid,
) -> Result<SplitDetail, SplitError> {
    if participants.is_empty() {
        return Err(SplitError::NoParticipants);
    }
    if amount.is_negative() {
        return Err(SplitError::NegativeAmount);
    }

    let amounts = match policy {
        SplitPolicy::Equal => equal_shares(amount.minor(), participants.len()),
        SplitPolicy::Weighted => {
            let total = checked_total_weight(participants)?;
            if total <= 0.0 {
                return Err(SplitError::ZeroTotalWeight);
            }
            proportional_shares(amount.minor(), participants, total)
        }
        SplitPolicy::Percentage => {
            let total = checked_total_weight(participants)?;
            if (total - 100.0).abs() > PERCENT_EPSILON {
                return Err(SplitError::PercentageNotHundred(total));
            }
            proportional_shares(amount.minor(), participants, 100.0)
        }
    };

    let shares = participants
        .iter()
        .zip(amounts)
        .map(|(participant, minor)| Share {
            participant_id: participant.id,
            amount: Money::new(minor),
            is_payer: participant.id == payer_id,
        })
        .collect();

    Ok(SplitDetail { shares })
}

/// Sums the weights, rejecting any negative one. A total of `[150, -50]`
/// passes the sum checks alone but allocates someone a negative share.
fn checked_total_weight(participants: &[Participant]) -> Result<f64, SplitError> {
    let mut total = 0.0;
    for participant in participants {
        let weight = participant.weight_or_zero();
        if weight < 0.0 {
            return Err(SplitError::NegativeWeight);
        }
        total += weight;
    }
    Ok(total)
}

/// Floor division with the remainder spread one unit at a time.
///
/// The first `n - (amount % n)` participants get the floored share, the
/// remaining `amount % n` get one extra minor unit, so the sum is exact.
fn equal_shares(amount: i64, n: usize) -> Vec<i64> {
    let n_i64 = n as i64;
    let base = amount / n_i64;
    let extras = (amount % n_i64) as usize;
    let plain = n - extras;
    (0..n)
        .map(|idx| if idx < plain { base } else { base + 1 })
        .collect()
}

/// Rounded proportional shares with the residual folded into the last
/// participant so the sum matches the amount exactly.
fn proportional_shares(amount: i64, participants: &[Participant], total_weight: f64) -> Vec<i64> {
    let mut shares: Vec<i64> = participants
        .iter()
        .map(|p| (amount as f64 * p.weight_or_zero() / total_weight).round() as i64)
        .collect();

    let allocated: i64 = shares.iter().sum();
    let residual = amount - allocated;
    if let Some(last) = shares.last_mut() {
        *last += residual;
    }
    shares
}
