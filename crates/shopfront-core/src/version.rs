use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Marker for the format version of a persisted state file.
///
/// Serializes as the literal integer `V` and refuses any other value on
/// deserialization, so bumping `V` invalidates older blobs at parse time
/// instead of letting them load with reinterpreted fields.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Version<const V: u8>;

impl<const V: u8> Serialize for Version<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(V)
    }
}

impl<'de, const V: u8> Deserialize<'de> for Version<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor<const V: u8>;

        impl<const V: u8> Visitor<'_> for VersionVisitor<V> {
            type Value = Version<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "the version number {V}")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value == u64::from(V) {
                    Ok(Version)
                } else {
                    Err(E::custom(format!("expected version {V}, found {value}")))
                }
            }
        }

        deserializer.deserialize_u64(VersionVisitor)
    }
}
