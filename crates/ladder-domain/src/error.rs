//! Error types for interval map construction

use thiserror::Error;

/// Errors raised while building an [`IntervalMap`](crate::IntervalMap)
///
/// Lookups never fail; every variant here describes a misconfigured table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalMapError {
    /// No intervals were left after dropping missing entries
    #[error("Invalid configuration: no ranges provided")]
    Empty,

    /// Two buckets share part of their range
    #[error("Overlapping ranges: {previous} overlaps {current}")]
    Overlapping {
        /// The bucket that starts first
        previous: String,
        /// The bucket whose lower bound falls inside `previous`
        current: String,
    },

    /// A bound that cannot be compared (NaN)
    #[error("Invalid bound in range {0}")]
    InvalidBound(String),
}
