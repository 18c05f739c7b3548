//! The module contains the errors the engine can throw.
//!
//! Validation errors come in two families:
//!
//! - [`DateError`] for range/containment violations raised while placing an
//!   entity inside its parent's date range.
//! - [`SplitError`] for cost-split inputs that cannot produce an allocation.
//!
//! Both convert into the umbrella [`EngineError`] returned by session
//! operations. Time overlaps are *not* errors; see
//! [`OverlapWarning`](crate::OverlapWarning).

use thiserror::Error;

/// Date-range validation failures. Always fatal to the enclosing call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    #[error("start must not be after end")]
    InvertedRange,
    #[error("date falls before the parent range start")]
    BeforeParentStart,
    #[error("date falls after the parent range end")]
    AfterParentEnd,
}

/// Cost-split validation failures. Fatal to the expense create/update.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SplitError {
    #[error("at least one participant is required")]
    NoParticipants,
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("weighted split requires a non-zero total weight")]
    ZeroTotalWeight,
    #[error("weights must not be negative")]
    NegativeWeight,
    #[error("percentage weights must sum to 100, got {0}")]
    PercentageNotHundred(f64),
}

/// Engine custom errors.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
