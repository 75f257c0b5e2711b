//! Builder protocol shared by records and anything else produced through a builder.

use crate::{Key, RecordError, ValueMap};

/// Commits a builder's current state into a finished value.
///
/// Building does not consume the builder; it may be modified further and
/// built again.
pub trait Build {
	/// The finished value.
	type Output;

	/// Produces a finished value from the current state.
	fn build(&self) -> Self::Output;
}

/// Structures that are immutable themselves but may be derived through a
/// specific [`Build`]er that inherits their properties.
pub trait Derivable: Sized {
	/// The builder that produces derived instances.
	type Builder: Build<Output = Self>;

	/// Supplies a builder pre-populated with this instance's properties, to
	/// be modified as needed and finally built into a new instance.
	fn builder(&self) -> Self::Builder;
}

/// Structures that are immutable themselves but may extract a [`Build`]er
/// for producing a modified copy.
///
/// Mechanically the same as [`Derivable`]; callers use it to state that
/// the result replaces the original rather than branching off it.
pub trait Extractable: Sized {
	/// The builder that produces modified copies.
	type Builder: Build<Output = Self>;

	/// Supplies a builder pre-populated with this instance's properties.
	fn extract(&self) -> Self::Builder;
}

/// Builders that accept a partial mapping of values.
///
/// Keys present in `origin` are validated and written; all other keys keep
/// their current values. Keys outside the builder's key set are rejected.
pub trait Assign<K: Key> {
	/// Merges `origin` into the current values.
	fn assign(&mut self, origin: &ValueMap<K>) -> Result<(), RecordError>;
}
