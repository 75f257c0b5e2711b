//! Declaration macro for key enums.

/// Declares a closed key enum and implements [`Key`](crate::Key) and
/// [`KeyEnum`](crate::KeyEnum) for it.
///
/// Each variant names its [`ValueType`](crate::ValueType), its nullability,
/// and an initial value (anything convertible into [`Value`](crate::Value)).
/// Attributes on the enum and on variants are forwarded.
///
/// # Example
///
/// ```
/// use keyed_record::{Key, KeyEnum, Value, ValueType, keys};
///
/// keys! {
///     /// Properties of a postal address.
///     pub enum AddressKey {
///         Name { type: String, nullable: false, initial: "unknown" },
///         Zip { type: Int, nullable: false, initial: 0 },
///         Country { type: String, nullable: true, initial: Value::Null },
///     }
/// }
///
/// assert_eq!(AddressKey::ALL.len(), 3);
/// assert_eq!(AddressKey::Zip.value_type(), ValueType::Int);
/// assert_eq!(AddressKey::Country.initial(), Value::Null);
/// ```
#[macro_export]
macro_rules! keys {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident {
					type: $type:ident,
					nullable: $nullable:expr,
					initial: $initial:expr
					$(,)?
				}
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
		}

		impl $crate::Key for $name {
			fn value_type(&self) -> $crate::ValueType {
				match self {
					$(Self::$variant => $crate::ValueType::$type,)+
				}
			}

			fn is_nullable(&self) -> bool {
				match self {
					$(Self::$variant => $nullable,)+
				}
			}

			fn initial(&self) -> $crate::Value {
				match self {
					$(Self::$variant => $crate::Value::from($initial),)+
				}
			}
		}

		impl $crate::KeyEnum for $name {
			const ALL: &'static [Self] = &[$(Self::$variant,)+];
		}
	};
}
