//! Sequences that can be iterated again from the beginning.

use std::ops::{Range, RangeInclusive};
use std::sync::Arc;

/// A sequence that produces a fresh iterator from its beginning on demand.
///
/// Most iterators cannot be rewound; the enumerator instead keeps the
/// sequence itself and asks it for a new iterator whenever a key's domain
/// wraps around.
pub trait Restartable {
	type Item;
	type Iter: Iterator<Item = Self::Item>;

	/// Returns an iterator positioned at the first element.
	fn restart(&self) -> Self::Iter;
}

/// Every restart clones the vector, so each live cursor holds a copy of its
/// domain. Prefer an `Arc<[T]>` or a [`Domain`](crate::Domain) for large
/// domains.
impl<T: Clone> Restartable for Vec<T> {
	type Item = T;
	type Iter = std::vec::IntoIter<T>;

	fn restart(&self) -> Self::Iter {
		self.clone().into_iter()
	}
}

impl<'a, T: Clone> Restartable for &'a [T] {
	type Item = T;
	type Iter = std::iter::Cloned<std::slice::Iter<'a, T>>;

	fn restart(&self) -> Self::Iter {
		let slice: &'a [T] = *self;
		slice.iter().cloned()
	}
}

/// Restarts share the slice; cursors only hold a reference count and a position.
impl<T: Clone> Restartable for Arc<[T]> {
	type Item = T;
	type Iter = SharedCursor<T>;

	fn restart(&self) -> Self::Iter {
		SharedCursor {
			values: Arc::clone(self),
			pos: 0,
		}
	}
}

/// Iterator over a shared slice.
#[derive(Debug, Clone)]
pub struct SharedCursor<T> {
	values: Arc<[T]>,
	pos: usize,
}

impl<T: Clone> Iterator for SharedCursor<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		let value = self.values.get(self.pos)?.clone();
		self.pos += 1;
		Some(value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.values.len().saturating_sub(self.pos);
		(remaining, Some(remaining))
	}
}

impl<T: Clone> ExactSizeIterator for SharedCursor<T> {}

impl<A> Restartable for Range<A>
where
	Range<A>: Iterator<Item = A> + Clone,
{
	type Item = A;
	type Iter = Range<A>;

	fn restart(&self) -> Self::Iter {
		self.clone()
	}
}

impl<A> Restartable for RangeInclusive<A>
where
	RangeInclusive<A>: Iterator<Item = A> + Clone,
{
	type Item = A;
	type Iter = RangeInclusive<A>;

	fn restart(&self) -> Self::Iter {
		self.clone()
	}
}

/// A [`Restartable`] backed by an iterator factory.
///
/// Created by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps a closure producing fresh iterators into a [`Restartable`].
///
/// ```
/// use keyed_combine::{Restartable, from_fn};
///
/// let evens = from_fn(|| (0..3).map(|n| n * 2));
/// assert_eq!(evens.restart().collect::<Vec<_>>(), vec![0, 2, 4]);
/// assert_eq!(evens.restart().collect::<Vec<_>>(), vec![0, 2, 4]);
/// ```
pub fn from_fn<F, I>(factory: F) -> FromFn<F>
where
	F: Fn() -> I,
	I: Iterator,
{
	FromFn(factory)
}

impl<F, I> Restartable for FromFn<F>
where
	F: Fn() -> I,
	I: Iterator,
{
	type Item = I::Item;
	type Iter = I;

	fn restart(&self) -> I {
		(self.0)()
	}
}
