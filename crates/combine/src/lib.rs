//! Lazy Cartesian-product enumeration over keyed value domains.
//!
//! - [`CombIterator`]: Yields every combination of one value per key
//! - [`Restartable`]: Sequences the enumerator can iterate again from the start
//! - [`Domain`]: Ordered, duplicate-free candidate values for one key
//! - [`Combiner`]: Builds one record per combination from a template record

/// Record production per combination.
pub mod combiner;
/// Candidate value sets.
pub mod domain;
/// Enumeration errors.
pub mod error;
/// Odometer enumeration.
pub mod odometer;
/// Restartable sequences.
pub mod restart;

pub use combiner::{Combinations, Combiner};
pub use domain::{Domain, DomainBuilder, DomainCursor};
pub use error::CombError;
pub use odometer::CombIterator;
pub use restart::{FromFn, Restartable, SharedCursor, from_fn};
