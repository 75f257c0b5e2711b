//! Serde support for records.
//!
//! A record serializes as a map in key order. Deserializing reads a map and
//! applies it to a builder over the full key set: absent keys take their
//! initial values, and invalid values surface as deserialization errors.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::{Key, KeyEnum, Record, RecordBuilder, ValueMap};

impl<K: Key + Serialize> Serialize for Record<K> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_map(self.iter())
	}
}

impl<'de, K> Deserialize<'de> for Record<K>
where
	K: KeyEnum + Deserialize<'de>,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let origin = ValueMap::<K>::deserialize(deserializer)?;
		let mut builder = RecordBuilder::new().map_err(de::Error::custom)?;
		builder.reset_all(&origin).map_err(de::Error::custom)?;
		Ok(builder.into_record())
	}
}
