//! Raw feed loading.
//!
//! The data source hands over the full record sequence at once: a JSON
//! array of string-keyed objects whose values are numbers or strings. No
//! cleaning happens here; records pass through untouched for the
//! normalization engine.

use std::fs;
use std::path::Path;

use roster_model::RawRecord;

use crate::error::Result;

/// Reads a raw record feed from a JSON file.
pub fn read_feed(path: &Path) -> Result<Vec<RawRecord>> {
    let text = fs::read_to_string(path)?;
    let records = parse_feed(&text)?;
    tracing::debug!(path = %path.display(), records = records.len(), "raw feed loaded");
    Ok(records)
}

/// Parses a raw record feed from JSON text.
pub fn parse_feed(text: &str) -> Result<Vec<RawRecord>> {
    let records: Vec<RawRecord> = serde_json::from_str(text)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::RawValue;

    #[test]
    fn parses_mixed_value_shapes() {
        let records = parse_feed(r#"[{"id": 1, "name": "Ada"}, {"id": 2}]"#).expect("valid feed");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["id"], RawValue::Number(1.0));
        assert_eq!(records[0]["name"], RawValue::Text("Ada".into()));
        assert!(!records[1].contains_key("name"));
    }

    #[test]
    fn rejects_non_array_documents() {
        assert!(parse_feed(r#"{"id": 1}"#).is_err());
        assert!(parse_feed("not json").is_err());
    }

    #[test]
    fn rejects_unsupported_value_shapes() {
        // The feed contract is numbers and strings only.
        assert!(parse_feed(r#"[{"id": true}]"#).is_err());
        assert!(parse_feed(r#"[{"id": [1]}]"#).is_err());
    }
}
