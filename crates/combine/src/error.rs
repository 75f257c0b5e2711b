use keyed_record::RecordError;
use thiserror::Error;

/// Errors raised by combination enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombError {
	/// No combination is left.
	#[error("no more combinations available")]
	Exhausted,
	/// Operation not supported by the enumerator.
	#[error("unsupported operation: {0}")]
	Unsupported(&'static str),
	/// A key was given without a sequence of candidate values.
	#[error("missing domain for key {key}")]
	MissingDomain { key: String },
	/// A record rejected a domain value or a combination.
	#[error(transparent)]
	Record(#[from] RecordError),
}
