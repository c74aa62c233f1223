//! Raw and cleaned field value types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A value as it arrives from the source feed.
///
/// The feed carries only two shapes: JSON numbers and JSON strings. A field
/// that is absent from a record simply has no entry in the map; there is no
/// explicit null in the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

/// One raw record: an untyped, string-keyed mapping straight off the feed.
pub type RawRecord = BTreeMap<String, RawValue>;

/// A cleaned output cell.
///
/// Coercion always yields one of these, so a cleaned record is fully shaped
/// even when individual fields failed: an unparseable field keeps its raw
/// text, and a field whose source key was absent holds [`FieldValue::Missing`]
/// (serialized as JSON `null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<RawValue> for FieldValue {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Number(n) => Self::Number(n),
            RawValue::Text(t) => Self::Text(t),
        }
    }
}
