use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::{ValueMap, ValueType, keys};

keys! {
	enum Field {
		Label { type: String, nullable: false, initial: "" },
		Count { type: Int, nullable: true, initial: Value::Null },
		Anything { type: Any, nullable: false, initial: false },
	}
}

fn key_set(keys: &[Field]) -> IndexSet<Field> {
	keys.iter().copied().collect()
}

#[rstest]
#[case(Field::Label, Value::from("x"))]
#[case(Field::Count, Value::Int(3))]
#[case(Field::Count, Value::Null)]
#[case(Field::Anything, Value::List(vec![Value::Int(1)]))]
#[case(Field::Anything, Value::Bool(true))]
fn test_validate_accepts(#[case] key: Field, #[case] value: Value) {
	assert_eq!(validate(&key, value.clone()), Ok(value));
}

#[test]
fn test_validate_rejects_null_for_non_nullable() {
	assert_eq!(
		validate(&Field::Label, Value::Null),
		Err(RecordError::NullNotAllowed {
			key: "Label".to_string()
		})
	);
	assert_eq!(
		validate(&Field::Anything, Value::Null),
		Err(RecordError::NullNotAllowed {
			key: "Anything".to_string()
		})
	);
}

#[test]
fn test_validate_rejects_type_mismatch() {
	assert_eq!(
		validate(&Field::Count, Value::from("3")),
		Err(RecordError::TypeMismatch {
			key: "Count".to_string(),
			expected: ValueType::Int,
			got: "string",
		})
	);
}

#[test]
fn test_copy_reports_every_foreign_key() {
	let origin = ValueMap::from([
		(Field::Label, Value::from("a")),
		(Field::Count, Value::Int(1)),
		(Field::Anything, Value::Bool(true)),
	]);
	let mut target = ValueMap::new();

	let result = copy(
		&origin,
		&key_set(&[Field::Label]),
		CopyFlags::empty(),
		&mut target,
	);

	assert_eq!(
		result,
		Err(RecordError::UnknownKey {
			keys: vec!["Count".to_string(), "Anything".to_string()]
		})
	);
	assert!(target.is_empty(), "nothing may be written on foreign keys");
}

#[test]
fn test_copy_skips_foreign_keys_when_ignored() {
	let origin = ValueMap::from([(Field::Label, Value::from("a")), (Field::Count, Value::Int(1))]);
	let mut target = ValueMap::new();

	copy(
		&origin,
		&key_set(&[Field::Label]),
		CopyFlags::IGNORE_FOREIGN,
		&mut target,
	)
	.unwrap();

	assert_eq!(target, ValueMap::from([(Field::Label, Value::from("a"))]));
}

#[test]
fn test_copy_keeps_missing_keys_without_reset() {
	let origin = ValueMap::from([(Field::Label, Value::from("new"))]);
	let mut target = ValueMap::from([(Field::Label, Value::from("old")), (Field::Count, Value::Int(5))]);

	copy(
		&origin,
		&key_set(&[Field::Label, Field::Count]),
		CopyFlags::empty(),
		&mut target,
	)
	.unwrap();

	assert_eq!(target[&Field::Label], Value::from("new"));
	assert_eq!(target[&Field::Count], Value::Int(5));
}

#[test]
fn test_copy_resets_missing_keys() {
	let origin = ValueMap::from([(Field::Label, Value::from("new"))]);
	let mut target = ValueMap::from([(Field::Label, Value::from("old")), (Field::Count, Value::Int(5))]);

	copy(
		&origin,
		&key_set(&[Field::Label, Field::Count]),
		CopyFlags::RESET_MISSING,
		&mut target,
	)
	.unwrap();

	assert_eq!(target[&Field::Label], Value::from("new"));
	assert_eq!(target[&Field::Count], Value::Null);
}

#[test]
fn test_copy_value_violation_keeps_earlier_writes() {
	let origin = ValueMap::from([(Field::Label, Value::from("new")), (Field::Count, Value::from("bad"))]);
	let mut target = ValueMap::from([(Field::Label, Value::from("old")), (Field::Count, Value::Int(5))]);

	let result = copy(
		&origin,
		&key_set(&[Field::Label, Field::Count]),
		CopyFlags::empty(),
		&mut target,
	);

	assert!(matches!(result, Err(RecordError::TypeMismatch { .. })));
	assert_eq!(target[&Field::Label], Value::from("new"));
	assert_eq!(target[&Field::Count], Value::Int(5));
}
