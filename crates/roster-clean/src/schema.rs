//! Declarative schema and record orchestration.
//!
//! A [`Schema`] is an ordered list of field rules built once at startup and
//! shared read-only across all record parses. `parse` walks the rules in
//! declared order against a fresh [`ParseState`], so one bad field can
//! never corrupt the rest of the record.

use std::collections::BTreeMap;

use roster_model::{FieldValue, Problems, RawRecord, RawSnapshot, RecordStatus, record_status};

use crate::coerce;
use crate::state::{FieldScope, MissingField, ParseState};

/// Coercion applied to one output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Number,
    Integer,
    Text,
    Money,
    Date,
}

impl Coercion {
    /// Human-readable name for listings.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Integer => "Integer",
            Self::Text => "Text",
            Self::Money => "Money (EUR)",
            Self::Date => "Date (ISO)",
        }
    }
}

/// One output field: where it comes from and how it is coerced.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Output field name; also the key diagnostics and snapshots use.
    pub target: String,
    /// Key read from the raw record.
    pub source: String,
    pub coercion: Coercion,
}

impl FieldRule {
    pub fn new(target: impl Into<String>, source: impl Into<String>, coercion: Coercion) -> Self {
        Self {
            target: target.into(),
            source: source.into(),
            coercion,
        }
    }
}

/// Everything one record's parse pass produced: the coerced values, the
/// diagnostics, and the raw snapshot, all keyed by output field name.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub values: BTreeMap<String, FieldValue>,
    pub problems: Problems,
    pub original: RawSnapshot,
}

impl Parsed {
    /// Worst severity across the record's fields.
    pub fn status(&self) -> RecordStatus {
        record_status(&self.problems)
    }

    /// Removes and returns one coerced value; [`FieldValue::Missing`] when
    /// the schema produced no such field.
    pub fn take(&mut self, target: &str) -> FieldValue {
        self.values.remove(target).unwrap_or_default()
    }
}

/// An ordered mapping from output field name to coercion rule.
#[derive(Debug, Clone)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Parses one raw record into the typed-values/diagnostics/snapshot
    /// triple.
    ///
    /// Fields are coerced in declared order, each inside its own field
    /// scope. A missing source key becomes an error diagnostic plus a
    /// [`FieldValue::Missing`] value and parsing continues with the next
    /// field; nothing else is caught here.
    pub fn parse(&self, raw: &RawRecord) -> Parsed {
        let mut state = ParseState::new(raw);
        let mut values = BTreeMap::new();

        for rule in &self.rules {
            let mut scope = state.field(&rule.target);
            let value = match run_coercer(rule, &mut scope) {
                Ok(value) => value,
                Err(missing) => {
                    scope.error(missing.to_string());
                    FieldValue::Missing
                }
            };
            values.insert(rule.target.clone(), value);
        }

        let (problems, original) = state.finish();
        Parsed {
            values,
            problems,
            original,
        }
    }
}

fn run_coercer(
    rule: &FieldRule,
    scope: &mut FieldScope<'_, '_>,
) -> Result<FieldValue, MissingField> {
    match rule.coercion {
        Coercion::Number => coerce::number(scope, &rule.source),
        Coercion::Integer => coerce::integer(scope, &rule.source),
        Coercion::Text => coerce::text(scope, &rule.source),
        Coercion::Money => coerce::money(scope, &rule.source),
        Coercion::Date => coerce::date(scope, &rule.source),
    }
}

/// Applies `schema` to every record in the input sequence, producing the
/// output sequence in the same order. No record is skipped: a record that
/// errors on every field still yields one (heavily flagged) output record.
pub fn clean_records(schema: &Schema, records: &[RawRecord]) -> Vec<Parsed> {
    let mut flagged = 0usize;
    let cleaned: Vec<Parsed> = records
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let parsed = schema.parse(raw);
            if !parsed.problems.is_empty() {
                flagged += 1;
                tracing::debug!(
                    record = index,
                    fields = parsed.problems.len(),
                    "record parsed with problems"
                );
            }
            parsed
        })
        .collect();
    tracing::info!(records = cleaned.len(), flagged, "record set normalized");
    cleaned
}
