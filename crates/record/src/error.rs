use thiserror::Error;

use crate::ValueType;

/// Errors raised when reading from or writing to a keyed record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
	/// A `Null` value was written to a key that is not nullable.
	#[error("value for key {key} must not be null")]
	NullNotAllowed { key: String },
	/// A value's type is not assignable to the key's declared type.
	#[error("type mismatch for key {key}: expected {expected}, got {got}")]
	TypeMismatch {
		key: String,
		expected: ValueType,
		got: &'static str,
	},
	/// One or more keys are not part of the declared key set.
	#[error("unknown keys: {}", keys.join(", "))]
	UnknownKey { keys: Vec<String> },
}

impl RecordError {
	pub(crate) fn null_not_allowed(key: &impl core::fmt::Debug) -> Self {
		Self::NullNotAllowed {
			key: format!("{key:?}"),
		}
	}

	pub(crate) fn type_mismatch(
		key: &impl core::fmt::Debug,
		expected: ValueType,
		got: &'static str,
	) -> Self {
		Self::TypeMismatch {
			key: format!("{key:?}"),
			expected,
			got,
		}
	}

	pub(crate) fn unknown<'a, K: core::fmt::Debug + 'a>(keys: impl IntoIterator<Item = &'a K>) -> Self {
		Self::UnknownKey {
			keys: keys.into_iter().map(|key| format!("{key:?}")).collect(),
		}
	}
}
