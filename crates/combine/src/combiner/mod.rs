//! Building one record per combination of candidate values.

use std::iter::FusedIterator;

use indexmap::IndexMap;
use keyed_record::{Assign, Build, Extractable, KeyEnum, Record, validate};

use crate::{CombError, CombIterator, Domain};


/// Produces a record for every combination of candidate values.
///
/// Each registered key varies over its [`Domain`]; every other key keeps the
/// value it has in the template. Registered keys are enumerated in declaration
/// order, so the first declared key varies fastest regardless of the order in
/// which domains were set. Records are produced lazily by extracting a
/// builder from the template, assigning one combination and building it.
///
/// ```
/// use keyed_combine::{Combiner, Domain};
/// use keyed_record::{Mapped, RecordBuilder, keys};
///
/// keys! {
///     enum Dim {
///         Width { type: Int, nullable: false, initial: 1 },
///         Height { type: Int, nullable: false, initial: 1 },
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let template = RecordBuilder::<Dim>::new()?.build();
/// let combiner = Combiner::new(template)
///     .set(Dim::Width, Domain::builder().add(10).add(20))?
///     .set(Dim::Height, Domain::of([5, 6, 7]))?;
///
/// assert_eq!(combiner.len(), 6);
/// let first = combiner.iter().next().unwrap()?;
/// assert_eq!(first.get_as::<i64>(&Dim::Width)?, 10);
/// # Ok(())
/// # }
/// ```
pub struct Combiner<K: KeyEnum, R = Record<K>> {
	domains: IndexMap<K, Domain>,
	template: R,
}

impl<K, R> Combiner<K, R>
where
	K: KeyEnum,
	R: Extractable,
	R::Builder: Assign<K>,
{
	/// Creates a combiner with no domains registered.
	pub fn new(template: R) -> Self {
		Self {
			domains: IndexMap::new(),
			template,
		}
	}

	/// Registers the candidate values of `key`, replacing any earlier domain.
	///
	/// # Errors
	///
	/// [`CombError::Record`] if a candidate value violates the key's type or
	/// nullability.
	pub fn set(mut self, key: K, domain: impl Build<Output = Domain>) -> Result<Self, CombError> {
		let domain = domain.build();
		for value in domain.iter() {
			validate(&key, value.clone())?;
		}
		tracing::debug!(
			domain = "combine",
			key = ?key,
			candidates = domain.len(),
			"domain registered",
		);
		self.domains.insert(key, domain);
		Ok(self)
	}

	/// The record every combination starts from.
	pub fn template(&self) -> &R {
		&self.template
	}

	/// The candidate values registered for `key`.
	pub fn domain(&self, key: &K) -> Option<&Domain> {
		self.domains.get(key)
	}

	/// Number of records the combiner produces.
	///
	/// Zero if no domain is registered; saturates at `usize::MAX`.
	pub fn len(&self) -> usize {
		if self.domains.is_empty() {
			return 0;
		}
		self.domains
			.values()
			.fold(1usize, |product, domain| product.saturating_mul(domain.len()))
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns a lazy iterator over all combined records.
	pub fn iter(&self) -> Combinations<'_, K, R> {
		Combinations {
			inner: CombIterator::new(K::ALL.iter().filter_map(|key| {
				self.domains.get(key).map(|domain| (*key, domain.clone()))
			})),
			template: &self.template,
		}
	}
}

impl<'a, K, R> IntoIterator for &'a Combiner<K, R>
where
	K: KeyEnum,
	R: Extractable,
	R::Builder: Assign<K>,
{
	type Item = Result<R, CombError>;
	type IntoIter = Combinations<'a, K, R>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the records of a [`Combiner`].
pub struct Combinations<'a, K: KeyEnum, R> {
	inner: CombIterator<K, Domain>,
	template: &'a R,
}

impl<K, R> Iterator for Combinations<'_, K, R>
where
	K: KeyEnum,
	R: Extractable,
	R::Builder: Assign<K>,
{
	type Item = Result<R, CombError>;

	fn next(&mut self) -> Option<Self::Item> {
		let combination = self.inner.next()?;
		let mut builder = self.template.extract();
		Some(
			builder
				.assign(&combination)
				.map(|()| builder.build())
				.map_err(CombError::from),
		)
	}
}

impl<K, R> FusedIterator for Combinations<'_, K, R>
where
	K: KeyEnum,
	R: Extractable,
	R::Builder: Assign<K>,
{
}
