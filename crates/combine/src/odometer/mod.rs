//! Lazy Cartesian-product enumeration.
//!
//! [`CombIterator`] walks the product of one [`Restartable`] sequence per key
//! like an odometer: the first key cycles fastest, and a key only advances
//! when every key before it has wrapped around. Only one live cursor and one
//! current value per key are kept, never the product itself. What a cursor
//! costs depends on the sequence: shared slices and [`Domain`](crate::Domain)
//! cursors hold a position, while a `Vec` cursor owns a copy of its domain.

use core::fmt::Debug;
use core::hash::Hash;
use std::iter::FusedIterator;

use indexmap::IndexMap;

use crate::{CombError, Restartable};


/// Iterates every combination of one value per key.
///
/// Each combination is an ordered map in key insertion order. A key given
/// more than once keeps its first position and its last sequence.
///
/// If any key's sequence is empty, or there are no keys at all, the product
/// is empty and no combination is produced. The enumerator is single-pass:
/// once exhausted it stays exhausted.
pub struct CombIterator<K, D: Restartable> {
	keys: Vec<K>,
	origin: Vec<D>,
	cursors: Vec<D::Iter>,
	current: Vec<Option<D::Item>>,
}

impl<K, D> CombIterator<K, D>
where
	K: Eq + Hash + Clone,
	D: Restartable,
	D::Item: Clone,
{
	/// Creates an enumerator over the given key/sequence pairs.
	pub fn new(origin: impl IntoIterator<Item = (K, D)>) -> Self {
		let origin: IndexMap<K, D> = origin.into_iter().collect();
		let (keys, origin): (Vec<K>, Vec<D>) = origin.into_iter().unzip();

		let mut cursors = Vec::with_capacity(origin.len());
		let mut current = Vec::with_capacity(origin.len());
		for domain in &origin {
			let mut cursor = domain.restart();
			current.push(cursor.next());
			cursors.push(cursor);
		}

		let iter = Self {
			keys,
			origin,
			cursors,
			current,
		};
		tracing::debug!(
			domain = "combine",
			dimensions = iter.keys.len(),
			exhausted = !iter.has_next(),
			"enumerator created",
		);
		iter
	}

	/// Creates an enumerator from pairs whose sequence may be absent.
	///
	/// # Errors
	///
	/// [`CombError::MissingDomain`] naming the first key without a sequence.
	pub fn try_from_optional(
		origin: impl IntoIterator<Item = (K, Option<D>)>,
	) -> Result<Self, CombError>
	where
		K: Debug,
	{
		let origin = origin
			.into_iter()
			.map(|(key, domain)| match domain {
				Some(domain) => Ok((key, domain)),
				None => Err(CombError::MissingDomain {
					key: format!("{key:?}"),
				}),
			})
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self::new(origin))
	}

	/// The keys in iteration order, least significant first.
	pub fn keys(&self) -> &[K] {
		&self.keys
	}

	/// Returns `true` if another combination is available.
	pub fn has_next(&self) -> bool {
		!self.current.is_empty() && self.current.iter().all(Option::is_some)
	}

	/// Returns the next combination and advances the odometer.
	///
	/// # Errors
	///
	/// [`CombError::Exhausted`] if no combination is left. Calling again
	/// keeps failing the same way.
	pub fn try_next(&mut self) -> Result<IndexMap<K, D::Item>, CombError> {
		if !self.has_next() {
			return Err(CombError::Exhausted);
		}
		let combination = self
			.keys
			.iter()
			.cloned()
			.zip(self.current.iter().flatten().cloned())
			.collect();
		self.advance();
		Ok(combination)
	}

	/// Removing combinations is not supported.
	pub fn remove(&mut self) -> Result<(), CombError> {
		Err(CombError::Unsupported("remove"))
	}

	fn advance(&mut self) {
		let last = self.keys.len().saturating_sub(1);
		for idx in 0..self.keys.len() {
			if let Some(value) = self.cursors[idx].next() {
				self.current[idx] = Some(value);
				return;
			}
			if idx == last {
				break;
			}
			// Wrap this key around and carry into the next one.
			let mut cursor = self.origin[idx].restart();
			self.current[idx] = cursor.next();
			self.cursors[idx] = cursor;
		}

		self.current.iter_mut().for_each(|slot| *slot = None);
		tracing::trace!(
			domain = "combine",
			dimensions = self.keys.len(),
			"enumerator exhausted",
		);
	}
}

impl<K, D> Iterator for CombIterator<K, D>
where
	K: Eq + Hash + Clone,
	D: Restartable,
	D::Item: Clone,
{
	type Item = IndexMap<K, D::Item>;

	fn next(&mut self) -> Option<Self::Item> {
		self.try_next().ok()
	}
}

impl<K, D> FusedIterator for CombIterator<K, D>
where
	K: Eq + Hash + Clone,
	D: Restartable,
	D::Item: Clone,
{
}
