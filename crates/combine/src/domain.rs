use std::sync::Arc;

use indexmap::IndexSet;
use keyed_record::{Build, Value};

use crate::{Restartable, SharedCursor};

/// The finished, ordered set of candidate values for one key.
///
/// Values keep the order in which they were first added; duplicates are
/// dropped. Clones share their storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domain {
	values: Arc<[Value]>,
}

impl Domain {
	/// Starts building a domain.
	pub fn builder() -> DomainBuilder {
		DomainBuilder::default()
	}

	/// Creates a domain from the given values.
	pub fn of<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
		values.into_iter().collect()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.values.iter()
	}
}

impl<V: Into<Value>> FromIterator<V> for Domain {
	fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
		let values: IndexSet<Value> = iter.into_iter().map(Into::into).collect();
		Self {
			values: values.into_iter().collect(),
		}
	}
}

impl Build for Domain {
	type Output = Domain;

	fn build(&self) -> Domain {
		self.clone()
	}
}

impl Restartable for Domain {
	type Item = Value;
	type Iter = DomainCursor;

	fn restart(&self) -> DomainCursor {
		self.values.restart()
	}
}

/// Iterator over the values of a [`Domain`].
pub type DomainCursor = SharedCursor<Value>;

/// Collects candidate values into a [`Domain`].
#[derive(Debug, Clone, Default)]
pub struct DomainBuilder {
	values: IndexSet<Value>,
}

impl DomainBuilder {
	/// Adds one candidate value. Adding a value twice has no effect.
	pub fn add(mut self, value: impl Into<Value>) -> Self {
		self.values.insert(value.into());
		self
	}

	/// Adds every value of `values`.
	pub fn add_all<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
		self.values.extend(values.into_iter().map(Into::into));
		self
	}
}

impl Build for DomainBuilder {
	type Output = Domain;

	fn build(&self) -> Domain {
		Domain {
			values: self.values.iter().cloned().collect(),
		}
	}
}
