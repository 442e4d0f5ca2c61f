//! Tracker errors. Aggregates subsystem errors via `From` conversions.

use super::{AliasError, IdError, TimeError, TransportError};

/// Errors surfaced to callers of the tracker.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackerError {
    #[error("unsupported hit type: {hit_type:?}")]
    UnsupportedHitType { hit_type: String },

    #[error("alias error: {0}")]
    Alias(#[from] AliasError),

    #[error("time error: {0}")]
    Time(#[from] TimeError),

    #[error("id error: {0}")]
    Id(#[from] IdError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Convenience alias used across the tracker crate.
pub type TrackerResult<T> = Result<T, TrackerError>;
