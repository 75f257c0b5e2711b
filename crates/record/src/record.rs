use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;

use crate::{
	Derivable, Extractable, FromValue, Key, KeySet, RecordBuilder, RecordError, Value, ValueMap,
};

/// Read access shared by [`Record`] and [`RecordBuilder`].
pub trait Mapped<K: Key> {
	/// The declared key set, in declaration order.
	fn key_set(&self) -> &KeySet<K>;

	/// A read-only view of every property, in key-set order.
	fn as_map(&self) -> &ValueMap<K>;

	/// Retrieves the value of `key`.
	///
	/// # Errors
	///
	/// [`RecordError::UnknownKey`] if `key` is not part of the key set.
	fn get(&self, key: &K) -> Result<&Value, RecordError> {
		self.as_map()
			.get(key)
			.ok_or_else(|| RecordError::unknown([key]))
	}

	/// Retrieves the value of `key` converted to `T`.
	///
	/// # Errors
	///
	/// [`RecordError::UnknownKey`] if `key` is not part of the key set, or
	/// [`RecordError::TypeMismatch`] if the stored value is not a `T`.
	fn get_as<T: FromValue>(&self, key: &K) -> Result<T, RecordError> {
		let value = self.get(key)?;
		T::from_value(value)
			.ok_or_else(|| RecordError::type_mismatch(key, T::value_type(), value.type_name()))
	}

	fn contains_key(&self, key: &K) -> bool {
		self.key_set().contains(key)
	}

	fn len(&self) -> usize {
		self.key_set().len()
	}

	fn is_empty(&self) -> bool {
		self.key_set().is_empty()
	}
}

/// An immutable record over the keys of type `K`.
///
/// Every key of the key set has exactly one validated value. Records are
/// produced by [`RecordBuilder`] and never change afterwards; clones share
/// their storage.
///
/// Two records are equal iff their values are equal, regardless of the order
/// in which keys were declared.
#[derive(Clone)]
pub struct Record<K: Key> {
	keys: Arc<KeySet<K>>,
	backing: Arc<ValueMap<K>>,
}

impl<K: Key> Record<K> {
	pub(crate) fn from_parts(keys: Arc<KeySet<K>>, backing: ValueMap<K>) -> Self {
		Self {
			keys,
			backing: Arc::new(backing),
		}
	}

	/// Returns an iterator over all properties in key-set order.
	pub fn iter(&self) -> indexmap::map::Iter<'_, K, Value> {
		self.backing.iter()
	}
}

impl<K: Key> Mapped<K> for Record<K> {
	fn key_set(&self) -> &KeySet<K> {
		&self.keys
	}

	fn as_map(&self) -> &ValueMap<K> {
		&self.backing
	}
}

impl<K: Key> Derivable for Record<K> {
	type Builder = RecordBuilder<K>;

	fn builder(&self) -> RecordBuilder<K> {
		RecordBuilder::from_parts(Arc::clone(&self.keys), ValueMap::clone(&self.backing))
	}
}

impl<K: Key> Extractable for Record<K> {
	type Builder = RecordBuilder<K>;

	fn extract(&self) -> RecordBuilder<K> {
		self.builder()
	}
}

impl<K: Key> PartialEq for Record<K> {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.backing, &other.backing) || self.backing == other.backing
	}
}

impl<K: Key> Eq for Record<K> {}

impl<K: Key> Hash for Record<K> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		// Entry hashes are summed so the result ignores key order, like equality does.
		let sum = self.backing.iter().fold(0u64, |sum, (key, value)| {
			let mut hasher = FxHasher::default();
			key.hash(&mut hasher);
			value.hash(&mut hasher);
			sum.wrapping_add(hasher.finish())
		});
		state.write_usize(self.backing.len());
		state.write_u64(sum);
	}
}

impl<K: Key> fmt::Debug for Record<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Record ")?;
		f.debug_map().entries(self.backing.iter()).finish()
	}
}

impl<K: Key> fmt::Display for Record<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (i, (key, value)) in self.backing.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{key:?}: {value}")?;
		}
		f.write_str("}")
	}
}

impl<'a, K: Key> IntoIterator for &'a Record<K> {
	type Item = (&'a K, &'a Value);
	type IntoIter = indexmap::map::Iter<'a, K, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
