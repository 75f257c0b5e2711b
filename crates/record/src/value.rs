use core::fmt;

/// The value of a record property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
	/// Absent value. Only legal for nullable keys.
	#[default]
	Null,
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// String value.
	String(String),
	/// Ordered list of values.
	List(Vec<Value>),
}

impl Value {
	/// Returns true if this is `Null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the list items if this is a `List` variant.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(v) => Some(v),
			_ => None,
		}
	}

	/// Returns true if this value is assignable to the given type.
	///
	/// `Null` is never assignable by type. Whether a key accepts `Null` is
	/// decided by [`Key::is_nullable`](crate::Key::is_nullable).
	pub fn matches_type(&self, ty: ValueType) -> bool {
		matches!(
			(self, ty),
			(Value::Bool(_), ValueType::Bool | ValueType::Any)
				| (Value::Int(_), ValueType::Int | ValueType::Any)
				| (Value::String(_), ValueType::String | ValueType::Any)
				| (Value::List(_), ValueType::List | ValueType::Any)
		)
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Int(_) => "int",
			Value::String(_) => "string",
			Value::List(_) => "list",
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Bool(v) => write!(f, "{v}"),
			Value::Int(v) => write!(f, "{v}"),
			Value::String(v) => write!(f, "{v:?}"),
			Value::List(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int(i64::from(v))
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_string())
	}
}

impl From<Vec<Value>> for Value {
	fn from(v: Vec<Value>) -> Self {
		Value::List(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map_or(Value::Null, Into::into)
	}
}

/// The type a key accepts for its non-null values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	/// Any non-null value.
	Any,
	/// Boolean type.
	Bool,
	/// Integer type.
	Int,
	/// String type.
	String,
	/// List type.
	List,
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ValueType::Any => "any",
			ValueType::Bool => "bool",
			ValueType::Int => "int",
			ValueType::String => "string",
			ValueType::List => "list",
		})
	}
}

// Seal the FromValue trait to prevent external implementations.
mod sealed {
	pub trait Sealed {}
	impl Sealed for bool {}
	impl Sealed for i64 {}
	impl Sealed for String {}
	impl Sealed for Vec<super::Value> {}
	impl Sealed for super::Value {}
	impl<T: Sealed> Sealed for Option<T> {}
}

/// Trait for types that can be extracted from a [`Value`].
pub trait FromValue: sealed::Sealed + Sized {
	/// Extracts the value, returning `None` if the type doesn't match.
	fn from_value(value: &Value) -> Option<Self>;

	/// Returns the `ValueType` corresponding to this Rust type.
	fn value_type() -> ValueType;
}

impl FromValue for bool {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_bool()
	}

	fn value_type() -> ValueType {
		ValueType::Bool
	}
}

impl FromValue for i64 {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_int()
	}

	fn value_type() -> ValueType {
		ValueType::Int
	}
}

impl FromValue for String {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_str().map(str::to_string)
	}

	fn value_type() -> ValueType {
		ValueType::String
	}
}

impl FromValue for Vec<Value> {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_list().map(<[Value]>::to_vec)
	}

	fn value_type() -> ValueType {
		ValueType::List
	}
}

impl FromValue for Value {
	fn from_value(value: &Value) -> Option<Self> {
		Some(value.clone())
	}

	fn value_type() -> ValueType {
		ValueType::Any
	}
}

impl<T: FromValue> FromValue for Option<T> {
	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Null => Some(None),
			other => T::from_value(other).map(Some),
		}
	}

	fn value_type() -> ValueType {
		T::value_type()
	}
}
