use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::keys;

keys! {
	enum Field {
		Text { type: String, nullable: true, initial: Value::Null },
		Number { type: Int, nullable: true, initial: Value::Null },
		Stamp { type: Int, nullable: true, initial: Value::Null },
		Flag { type: Bool, nullable: false, initial: false },
	}
}

keys! {
	enum Broken {
		Strict { type: Int, nullable: false, initial: Value::Null },
	}
}

const A_STRING: &str = "a string";
const VALUE_278: i64 = 278;

fn builder(keys: &[Field]) -> RecordBuilder<Field> {
	RecordBuilder::with_keys(keys.iter().copied()).unwrap()
}

#[test]
fn test_new_covers_every_key_at_initial() {
	let builder = RecordBuilder::<Field>::new().unwrap();
	let expected: ValueMap<Field> = Field::ALL.iter().map(|key| (*key, key.initial())).collect();
	assert_eq!(builder.as_map(), &expected);
}

#[test]
fn test_new_rejects_invalid_initial() {
	assert_eq!(
		RecordBuilder::<Broken>::new().unwrap_err(),
		RecordError::NullNotAllowed {
			key: "Strict".to_string()
		}
	);
}

#[test]
fn test_set_map() {
	let origin = builder(&[Field::Text, Field::Number])
		.set(Field::Text, A_STRING)
		.unwrap()
		.set(Field::Number, VALUE_278)
		.unwrap()
		.as_map()
		.clone();

	let mut target = builder(&[Field::Text, Field::Number]);
	target.set_all(&origin).unwrap();

	assert_eq!(target.as_map(), &origin);
}

#[test]
fn test_reset_map() {
	let expected = builder(&[Field::Text, Field::Number, Field::Stamp])
		.set(Field::Text, A_STRING)
		.unwrap()
		.set(Field::Number, VALUE_278)
		.unwrap()
		.as_map()
		.clone();
	let origin = builder(&[Field::Text, Field::Number])
		.set(Field::Text, A_STRING)
		.unwrap()
		.set(Field::Number, VALUE_278)
		.unwrap()
		.as_map()
		.clone();

	let mut target = builder(&[Field::Text, Field::Number, Field::Stamp]);
	target
		.set(Field::Stamp, 1_700_000_000)
		.unwrap()
		.reset_all(&origin)
		.unwrap();

	assert_eq!(target.as_map(), &expected);
}

#[test]
fn test_set_map_keeps_missing() {
	let origin = ValueMap::from([(Field::Text, Value::from(A_STRING))]);
	let mut target = builder(&[Field::Text, Field::Stamp]);
	target.set(Field::Stamp, 5).unwrap().set_all(&origin).unwrap();

	assert_eq!(target.get(&Field::Stamp), Ok(&Value::Int(5)));
	assert_eq!(target.get(&Field::Text), Ok(&Value::from(A_STRING)));
}

#[test]
fn test_set_unknown_key() {
	let mut target = builder(&[Field::Text]);
	assert_eq!(
		target.set(Field::Number, 1).unwrap_err(),
		RecordError::UnknownKey {
			keys: vec!["Number".to_string()]
		}
	);
	target.set_ignoring(Field::Number, 1).unwrap();
	assert!(!target.contains_key(&Field::Number));
}

#[test]
fn test_set_map_with_foreign_keys() {
	let origin = ValueMap::from([(Field::Text, Value::from("x")), (Field::Stamp, Value::Int(9))]);
	let mut target = builder(&[Field::Text]);

	assert!(matches!(
		target.set_all(&origin),
		Err(RecordError::UnknownKey { .. })
	));
	assert_eq!(target.get(&Field::Text), Ok(&Value::Null));

	target.set_all_ignoring(&origin).unwrap();
	assert_eq!(target.get(&Field::Text), Ok(&Value::from("x")));

	target.reset_all_ignoring(&ValueMap::from([(Field::Stamp, Value::Int(1))])).unwrap();
	assert_eq!(target.get(&Field::Text), Ok(&Value::Null));
}

#[test]
fn test_reset_single_key() {
	let mut target = builder(&[Field::Flag]);
	target.set(Field::Flag, true).unwrap();
	assert_eq!(target.get_as::<bool>(&Field::Flag), Ok(true));
	target.reset(Field::Flag).unwrap();
	assert_eq!(target.get_as::<bool>(&Field::Flag), Ok(false));
}

#[test]
fn test_null_for_non_nullable() {
	let mut target = builder(&[Field::Flag]);
	assert_eq!(
		target.set(Field::Flag, Value::Null).unwrap_err(),
		RecordError::NullNotAllowed {
			key: "Flag".to_string()
		}
	);
	assert_eq!(target.get(&Field::Flag), Ok(&Value::Bool(false)));
}

#[test]
fn test_from_origin_takes_origin_keys() {
	let origin = ValueMap::from([(Field::Stamp, Value::Int(3)), (Field::Text, Value::Null)]);
	let built = RecordBuilder::from_origin(&origin).unwrap();
	let keys: Vec<_> = built.key_set().iter().copied().collect();
	assert_eq!(keys, vec![Field::Stamp, Field::Text]);
	assert_eq!(built.as_map(), &origin);

	let invalid = ValueMap::from([(Field::Flag, Value::Null)]);
	assert!(RecordBuilder::from_origin(&invalid).is_err());
}

#[test]
fn test_assign_merges() {
	let mut target = builder(&[Field::Text, Field::Number]);
	target.set(Field::Number, 4).unwrap();
	target
		.assign(&ValueMap::from([(Field::Text, Value::from("t"))]))
		.unwrap();
	assert_eq!(target.get(&Field::Number), Ok(&Value::Int(4)));
	assert_eq!(target.get(&Field::Text), Ok(&Value::from("t")));
}

#[test]
fn test_into_record_matches_build() {
	let mut target = builder(&[Field::Text]);
	target.set(Field::Text, "moved").unwrap();
	let built = target.build();
	assert_eq!(target.into_record(), built);
}

fn arb_origin() -> impl Strategy<Value = ValueMap<Field>> {
	(
		proptest::option::of(proptest::option::of("[a-z]{0,8}")),
		proptest::option::of(proptest::option::of(any::<i64>())),
		proptest::option::of(any::<bool>()),
	)
		.prop_map(|(text, number, flag)| {
			let mut origin = ValueMap::new();
			if let Some(text) = text {
				origin.insert(Field::Text, Value::from(text));
			}
			if let Some(number) = number {
				origin.insert(Field::Number, Value::from(number));
			}
			if let Some(flag) = flag {
				origin.insert(Field::Flag, Value::from(flag));
			}
			origin
		})
}

proptest! {
	/// Values written through `set_all` read back unchanged; other keys keep their values.
	#[test]
	fn prop_set_all_reads_back(origin in arb_origin(), prior in any::<i64>()) {
		let mut target = builder(&[Field::Text, Field::Number, Field::Flag]);
		target.set(Field::Number, prior).unwrap();
		let before = target.as_map().clone();

		target.set_all(&origin).unwrap();

		for key in [Field::Text, Field::Number, Field::Flag] {
			let expected = origin.get(&key).unwrap_or(&before[&key]);
			prop_assert_eq!(target.get(&key).unwrap(), expected);
		}
	}

	/// Values written through `reset_all` read back unchanged; other keys return to initial.
	#[test]
	fn prop_reset_all_reads_back(origin in arb_origin(), prior in any::<i64>()) {
		let mut target = builder(&[Field::Text, Field::Number, Field::Flag]);
		target.set(Field::Number, prior).unwrap();

		target.reset_all(&origin).unwrap();

		for key in [Field::Text, Field::Number, Field::Flag] {
			let expected = origin.get(&key).cloned().unwrap_or_else(|| key.initial());
			prop_assert_eq!(target.get(&key).unwrap(), &expected);
		}
	}
}
