//! The `Handler` asset record.
//!
//! A `Handler` is stored in world state under a caller-supplied identifier.
//! The identifier is the store key and is never part of the record itself.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// The persisted asset: a record with one string field.
///
/// Stored as `{"value":"..."}`. Decoding is lenient in the same way the
/// platform's reference decoder is:
///
/// - `null` decodes to the empty record
/// - the field name matches case-insensitively (`value`, `Value`, `VALUE`)
/// - a `null` field value leaves the field unchanged
/// - for repeated fields the last occurrence wins
/// - unknown fields are ignored and a missing field decodes to `""`
///
/// Anything that is not a JSON object or `null` is rejected, arrays included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Handler {
    pub value: String,
}

impl Handler {
    /// Create a record holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

const FIELD: &str = "value";

impl<'de> Deserialize<'de> for Handler {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(HandlerVisitor)
    }
}

struct HandlerVisitor;

impl<'de> Visitor<'de> for HandlerVisitor {
    type Value = Handler;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object holding a Handler record")
    }

    fn visit_none<E: de::Error>(self) -> Result<Handler, E> {
        Ok(Handler::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Handler, E> {
        Ok(Handler::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Handler, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Handler, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut handler = Handler::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(FIELD) {
                if let Some(value) = map.next_value::<Option<String>>()? {
                    handler.value = value;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(handler)
    }
}
