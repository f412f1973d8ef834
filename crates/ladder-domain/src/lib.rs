//! Ladder Domain Layer
//!
//! This crate contains the core lookup structure of Ladder: a validated table
//! of half-open numeric buckets, each tagged with a value, that answers
//! "which bucket does this number fall into?".
//!
//! ## Key Concepts
//!
//! - **Interval**: one bucket `[min, max)` with a payload
//! - **IntervalMap**: an immutable, sorted set of non-overlapping intervals
//! - **Gap**: a region between two buckets that matches nothing
//!
//! ## Architecture
//!
//! - Pure data structure, no I/O
//! - All validation happens at construction; lookups are total
//! - Loading tables from files lives in `ladder-config`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod interval;

// Re-exports for convenience
pub use error::IntervalMapError;
pub use interval::{Interval, IntervalMap};
