use core::fmt;
use std::sync::Arc;

use crate::validate::{CopyFlags, copy, validate};
use crate::{Assign, Build, Key, KeyEnum, KeySet, Mapped, Record, RecordError, Value, ValueMap};

/// Mutable counterpart of [`Record`].
///
/// A builder holds one validated value per key of its key set. Every write is
/// checked against the key's type and nullability, and keys outside the key
/// set are rejected unless a `*_ignoring` variant is used.
///
/// Mutators return `&mut Self` so calls chain with `?`:
///
/// ```
/// use keyed_record::{Mapped, RecordBuilder, Value, keys};
///
/// keys! {
///     enum Point {
///         X { type: Int, nullable: false, initial: 0 },
///         Y { type: Int, nullable: false, initial: 0 },
///     }
/// }
///
/// # fn main() -> Result<(), keyed_record::RecordError> {
/// let record = RecordBuilder::<Point>::new()?.set(Point::X, 3)?.set(Point::Y, 4)?.build();
/// assert_eq!(record.get(&Point::X)?, &Value::Int(3));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RecordBuilder<K: Key> {
	keys: Arc<KeySet<K>>,
	backing: ValueMap<K>,
}

impl<K: KeyEnum> RecordBuilder<K> {
	/// Creates a builder over every key of `K`, each at its initial value.
	pub fn new() -> Result<Self, RecordError> {
		Self::with_keys(K::ALL.iter().copied())
	}
}

impl<K: Key> RecordBuilder<K> {
	/// Creates a builder over the given keys, each at its initial value.
	///
	/// # Errors
	///
	/// Fails if a key's initial value violates its own type or nullability.
	pub fn with_keys(keys: impl IntoIterator<Item = K>) -> Result<Self, RecordError> {
		let keys: KeySet<K> = keys.into_iter().collect();
		let mut backing = ValueMap::with_capacity(keys.len());
		copy(
			&ValueMap::new(),
			&keys,
			CopyFlags::RESET_MISSING,
			&mut backing,
		)?;
		Ok(Self {
			keys: Arc::new(keys),
			backing,
		})
	}

	/// Creates a builder whose key set is exactly the keys of `origin`,
	/// holding the validated values of `origin`.
	pub fn from_origin(origin: &ValueMap<K>) -> Result<Self, RecordError> {
		let keys: KeySet<K> = origin.keys().copied().collect();
		let mut backing = ValueMap::with_capacity(keys.len());
		copy(origin, &keys, CopyFlags::RESET_MISSING, &mut backing)?;
		Ok(Self {
			keys: Arc::new(keys),
			backing,
		})
	}

	pub(crate) fn from_parts(keys: Arc<KeySet<K>>, backing: ValueMap<K>) -> Self {
		Self { keys, backing }
	}

	/// Sets the value of `key`.
	///
	/// # Errors
	///
	/// - [`RecordError::UnknownKey`] if `key` is not part of the key set.
	/// - [`RecordError::NullNotAllowed`] or [`RecordError::TypeMismatch`] if
	///   `value` violates the key's constraints.
	pub fn set(&mut self, key: K, value: impl Into<Value>) -> Result<&mut Self, RecordError> {
		self.put(key, value.into(), false)
	}

	/// Sets the value of `key` if it is part of the key set, otherwise does nothing.
	pub fn set_ignoring(
		&mut self,
		key: K,
		value: impl Into<Value>,
	) -> Result<&mut Self, RecordError> {
		self.put(key, value.into(), true)
	}

	/// Resets `key` to its initial value.
	pub fn reset(&mut self, key: K) -> Result<&mut Self, RecordError> {
		self.put(key, key.initial(), false)
	}

	/// Sets the values of `origin`. Keys not covered by `origin` keep their values.
	pub fn set_all(&mut self, origin: &ValueMap<K>) -> Result<&mut Self, RecordError> {
		self.apply(origin, CopyFlags::empty())
	}

	/// Like [`set_all`](Self::set_all), but skips keys outside the key set.
	pub fn set_all_ignoring(&mut self, origin: &ValueMap<K>) -> Result<&mut Self, RecordError> {
		self.apply(origin, CopyFlags::IGNORE_FOREIGN)
	}

	/// Sets the values of `origin`. Keys not covered by `origin` are reset to
	/// their initial values.
	pub fn reset_all(&mut self, origin: &ValueMap<K>) -> Result<&mut Self, RecordError> {
		self.apply(origin, CopyFlags::RESET_MISSING)
	}

	/// Like [`reset_all`](Self::reset_all), but skips keys outside the key set.
	pub fn reset_all_ignoring(&mut self, origin: &ValueMap<K>) -> Result<&mut Self, RecordError> {
		self.apply(
			origin,
			CopyFlags::RESET_MISSING | CopyFlags::IGNORE_FOREIGN,
		)
	}

	/// Applies `origin` with explicit [`CopyFlags`].
	///
	/// Foreign keys are rejected before anything is written. A value
	/// violation stops the write at the offending key; keys already written
	/// keep their new values.
	pub fn apply(
		&mut self,
		origin: &ValueMap<K>,
		flags: CopyFlags,
	) -> Result<&mut Self, RecordError> {
		copy(origin, &self.keys, flags, &mut self.backing)?;
		Ok(self)
	}

	/// Commits the current values into a new [`Record`].
	///
	/// The record receives its own copy; later writes to this builder do not
	/// affect it.
	pub fn build(&self) -> Record<K> {
		Record::from_parts(Arc::clone(&self.keys), self.backing.clone())
	}

	/// Commits the current values into a new [`Record`] without copying them.
	pub fn into_record(self) -> Record<K> {
		Record::from_parts(self.keys, self.backing)
	}

	fn put(&mut self, key: K, value: Value, ignore_foreign: bool) -> Result<&mut Self, RecordError> {
		if self.keys.contains(&key) {
			let value = validate(&key, value)?;
			self.backing.insert(key, value);
		} else if !ignore_foreign {
			return Err(RecordError::unknown([&key]));
		}
		Ok(self)
	}
}

impl<K: Key> Mapped<K> for RecordBuilder<K> {
	fn key_set(&self) -> &KeySet<K> {
		&self.keys
	}

	fn as_map(&self) -> &ValueMap<K> {
		&self.backing
	}
}

impl<K: Key> Build for RecordBuilder<K> {
	type Output = Record<K>;

	fn build(&self) -> Record<K> {
		RecordBuilder::build(self)
	}
}

impl<K: Key> Assign<K> for RecordBuilder<K> {
	fn assign(&mut self, origin: &ValueMap<K>) -> Result<(), RecordError> {
		self.set_all(origin).map(|_| ())
	}
}

impl<K: Key> fmt::Debug for RecordBuilder<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("RecordBuilder ")?;
		f.debug_map().entries(self.backing.iter()).finish()
	}
}

#[cfg(test)]
mod tests;
