use core::fmt::Debug;
use core::hash::Hash;

use crate::{Value, ValueType};

/// Describes one property slot of a record.
///
/// A key reports the type its values must have, whether `Null` is a legal
/// value, and the value it starts out with. Keys carry no other behavior and
/// are usually declared once per record shape through [`keys!`](crate::keys).
///
/// The initial value must be `Null` (only if the key is nullable) or
/// assignable to [`value_type`](Key::value_type). It passes through
/// [`validate`](crate::validate) whenever a builder installs it.
///
/// Keys are plain constants, so they own no borrowed data.
pub trait Key: Copy + Eq + Hash + Debug + 'static {
	/// The type non-null values of this key must match.
	fn value_type(&self) -> ValueType;

	/// Whether `Null` may be associated with this key.
	fn is_nullable(&self) -> bool;

	/// The value initially associated with this key.
	fn initial(&self) -> Value;
}

/// A key type whose full set of keys is closed and enumerable.
pub trait KeyEnum: Key {
	/// Every key of this type, in declaration order.
	const ALL: &'static [Self];
}
