//! The typed employee entity produced by the cleaning pass.

use serde::{Deserialize, Serialize};

use crate::diagnostic::{Problems, RawSnapshot, RecordStatus};
use crate::value::FieldValue;

/// One cleaned employee record.
///
/// Each field nominally carries the type its coercer targets (numeric id and
/// score, string descriptions, EUR salary amount, ISO `YYYY-MM-DD` dates),
/// but the coercion contract lets a field degrade to its raw source value
/// when it cannot be trusted, so every field is a [`FieldValue`]. The
/// per-field diagnostics and the raw snapshot travel with the record for the
/// presentation layer to surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Numeric employee id.
    pub id: FieldValue,
    /// Dataset key the record was sourced from.
    pub pk_dataset: FieldValue,
    pub name: FieldValue,
    pub country: FieldValue,
    pub region: FieldValue,
    /// Coordinates kept as the source's single string.
    pub latlng: FieldValue,
    pub personal_quote: FieldValue,
    /// Salary normalized to a plain EUR amount.
    pub salary_euros: FieldValue,
    /// Sortable `YYYY-MM-DD` date.
    pub birthday: FieldValue,
    /// Sortable `YYYY-MM-DD` date.
    pub entry_date: FieldValue,
    pub address: FieldValue,
    pub phone: FieldValue,
    /// Numeric experience score.
    pub experience_score: FieldValue,
    pub favorite_food: FieldValue,
    /// Worst severity across all fields.
    pub status: RecordStatus,
    /// Diagnostics by output field name.
    pub problems: Problems,
    /// As-read source values by output field name.
    #[serde(rename = "originalData")]
    pub original: RawSnapshot,
}
