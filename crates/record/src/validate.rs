//! Validation primitives shared by every record builder.
//!
//! All writes into a record's backing map go through [`validate`], and all
//! multi-key writes go through [`copy`].

use indexmap::{IndexMap, IndexSet};

use crate::{Key, RecordError, Value};

bitflags::bitflags! {
	/// Controls how [`copy`] treats keys that are missing from, or foreign to, the origin.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CopyFlags: u8 {
		/// Keys absent from the origin are reset to their initial value.
		const RESET_MISSING = 1 << 0;
		/// Origin keys outside the key set are skipped instead of rejected.
		const IGNORE_FOREIGN = 1 << 1;
	}
}

/// Checks `value` against the constraints of `key` and returns it unchanged.
///
/// # Errors
///
/// - [`RecordError::NullNotAllowed`] if `value` is `Null` and `key` is not nullable.
/// - [`RecordError::TypeMismatch`] if `value` is not assignable to the key's type.
pub fn validate<K: Key>(key: &K, value: Value) -> Result<Value, RecordError> {
	if value.is_null() {
		if key.is_nullable() {
			Ok(value)
		} else {
			Err(RecordError::null_not_allowed(key))
		}
	} else if value.matches_type(key.value_type()) {
		Ok(value)
	} else {
		Err(RecordError::type_mismatch(
			key,
			key.value_type(),
			value.type_name(),
		))
	}
}

/// Writes the entries of `origin` into `target` for every key in `keys`.
///
/// Keys absent from `origin` are left untouched in `target`, unless
/// [`CopyFlags::RESET_MISSING`] is given, in which case they receive their
/// initial value. Origin keys outside `keys` are rejected as a whole before
/// anything is written, unless [`CopyFlags::IGNORE_FOREIGN`] is given.
///
/// Values are validated one key at a time, so a value violation leaves the
/// entries written before it in place.
pub fn copy<K: Key>(
	origin: &IndexMap<K, Value>,
	keys: &IndexSet<K>,
	flags: CopyFlags,
	target: &mut IndexMap<K, Value>,
) -> Result<(), RecordError> {
	if !flags.contains(CopyFlags::IGNORE_FOREIGN) {
		let foreign: Vec<&K> = origin.keys().filter(|key| !keys.contains(*key)).collect();
		if !foreign.is_empty() {
			tracing::debug!(
				domain = "record",
				foreign = foreign.len(),
				"origin rejected for foreign keys",
			);
			return Err(RecordError::unknown(foreign));
		}
	}

	for key in keys {
		let value = match origin.get(key) {
			Some(value) => value.clone(),
			None if flags.contains(CopyFlags::RESET_MISSING) => key.initial(),
			None => continue,
		};
		target.insert(*key, validate(key, value)?);
	}

	tracing::trace!(
		domain = "record",
		origin = origin.len(),
		keys = keys.len(),
		?flags,
		"origin applied",
	);
	Ok(())
}

#[cfg(test)]
mod tests;
