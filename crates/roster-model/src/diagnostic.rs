//! Per-field diagnostics and record status.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// Severity of a single parsing anomaly.
///
/// `Warn` means the value was recovered through a best-effort coercion and
/// the coerced value is used downstream. `Error` means the value could not
/// be trusted at all; the field's pre-coercion value is substituted instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Error,
}

/// A severity-tagged message attached to one output field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warn,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Diagnostics accumulated during one record's parse, keyed by output field
/// name. A field with no entry parsed cleanly; one field may carry several
/// diagnostics.
pub type Problems = BTreeMap<String, Vec<Diagnostic>>;

/// The as-read source values captured during one record's parse, keyed by
/// output field name. Retained for audit and display even after successful
/// coercion; an absent source key is captured as [`FieldValue::Missing`].
pub type RawSnapshot = BTreeMap<String, FieldValue>;

/// Overall condition of a field or record, error dominating warn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Ok,
    Warn,
    Error,
}

/// Classifies one field's diagnostics.
pub fn field_status(diagnostics: &[Diagnostic]) -> RecordStatus {
    if diagnostics.iter().any(|d| d.severity == Severity::Error) {
        RecordStatus::Error
    } else if diagnostics.is_empty() {
        RecordStatus::Ok
    } else {
        RecordStatus::Warn
    }
}

/// Worst severity across all fields of a record.
pub fn record_status(problems: &Problems) -> RecordStatus {
    problems
        .values()
        .map(|diagnostics| field_status(diagnostics))
        .max_by_key(|status| match status {
            RecordStatus::Ok => 0,
            RecordStatus::Warn => 1,
            RecordStatus::Error => 2,
        })
        .unwrap_or_default()
}
