//! Shared data model for the roster normalization toolkit.
//!
//! - **value**: raw feed values and cleaned output cells
//! - **diagnostic**: per-field warnings/errors and record status
//! - **employee**: the typed output entity

pub mod diagnostic;
pub mod employee;
pub mod value;

pub use diagnostic::{
    Diagnostic, Problems, RawSnapshot, RecordStatus, Severity, field_status, record_status,
};
pub use employee::Employee;
pub use value::{FieldValue, RawRecord, RawValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_serializes_untagged() {
        let json = serde_json::to_string(&FieldValue::Number(9.5)).expect("serialize number");
        assert_eq!(json, "9.5");
        let json = serde_json::to_string(&FieldValue::Text("abc".into())).expect("serialize text");
        assert_eq!(json, "\"abc\"");
        let json = serde_json::to_string(&FieldValue::Missing).expect("serialize missing");
        assert_eq!(json, "null");
    }

    #[test]
    fn field_value_deserializes_untagged() {
        let value: FieldValue = serde_json::from_str("128").expect("number");
        assert_eq!(value, FieldValue::Number(128.0));
        let value: FieldValue = serde_json::from_str("\"x\"").expect("text");
        assert_eq!(value, FieldValue::Text("x".into()));
        let value: FieldValue = serde_json::from_str("null").expect("missing");
        assert!(value.is_missing());
    }

    #[test]
    fn raw_value_rejects_other_shapes() {
        assert!(serde_json::from_str::<RawValue>("true").is_err());
        assert!(serde_json::from_str::<RawValue>("[1]").is_err());
    }

    #[test]
    fn accessors_expose_the_underlying_shape() {
        assert_eq!(FieldValue::Number(9.5).as_number(), Some(9.5));
        assert_eq!(FieldValue::Text("x".into()).as_text(), Some("x"));
        assert!(FieldValue::Missing.as_number().is_none());
        assert!(FieldValue::Number(1.0).as_text().is_none());
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Diagnostic::warn("w")).expect("serialize");
        assert_eq!(json, "{\"severity\":\"warn\",\"message\":\"w\"}");
    }

    #[test]
    fn status_error_dominates_warn() {
        let mut problems = Problems::new();
        problems.insert("salaryEuros".into(), vec![Diagnostic::warn("assumed EUR")]);
        assert_eq!(record_status(&problems), RecordStatus::Warn);
        problems.insert(
            "id".into(),
            vec![Diagnostic::warn("not a number"), Diagnostic::error("bad")],
        );
        assert_eq!(record_status(&problems), RecordStatus::Error);
        assert_eq!(record_status(&Problems::new()), RecordStatus::Ok);
    }

    #[test]
    fn field_status_classifies_three_ways() {
        assert_eq!(field_status(&[]), RecordStatus::Ok);
        assert_eq!(field_status(&[Diagnostic::warn("w")]), RecordStatus::Warn);
        assert_eq!(
            field_status(&[Diagnostic::warn("w"), Diagnostic::error("e")]),
            RecordStatus::Error
        );
    }
}
