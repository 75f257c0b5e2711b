//! Immutable records over a closed set of typed keys.
//!
//! This crate provides:
//! - [`Key`]: Describes a property slot (value type, nullability, initial value)
//! - [`keys!`]: Declares a closed key enum
//! - [`Record`]: Immutable, validated property bag
//! - [`RecordBuilder`]: Mutable counterpart supporting partial update and reset
//! - [`Build`], [`Derivable`], [`Extractable`], [`Assign`]: The builder protocol
//! - [`validate`] and [`copy`]: The validation primitives every write goes through

/// Builder protocol traits.
pub mod building;
/// Record builder.
pub mod builder;
/// Record errors.
pub mod error;
/// Key descriptor traits.
pub mod key;
mod macros;
/// Immutable records and shared read access.
pub mod record;
#[cfg(feature = "serde")]
mod serde_impl;
/// Validation primitives.
pub mod validate;
/// Dynamic property values.
pub mod value;

pub use builder::RecordBuilder;
pub use building::{Assign, Build, Derivable, Extractable};
pub use error::RecordError;
pub use indexmap::{IndexMap, IndexSet};
pub use key::{Key, KeyEnum};
pub use record::{Mapped, Record};
pub use validate::{CopyFlags, copy, validate};
pub use value::{FromValue, Value, ValueType};

/// Mapping from keys to property values, in key order.
pub type ValueMap<K> = IndexMap<K, Value>;

/// The declared, closed set of keys of a record.
pub type KeySet<K> = IndexSet<K>;
