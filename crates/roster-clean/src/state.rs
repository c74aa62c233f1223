//! Parsing state for a single record's cleaning pass.
//!
//! A [`ParseState`] lives exactly as long as one record's parse: it holds
//! the raw record plus the diagnostics and raw-snapshot maps being built,
//! and hands both off when the pass finishes. Coercers never touch the
//! state directly; they receive a [`FieldScope`] bound to the output field
//! currently being parsed, so a diagnostic can only ever be recorded
//! against an active field.

use roster_model::{Diagnostic, FieldValue, Problems, RawRecord, RawSnapshot, RawValue, Severity};
use thiserror::Error;

/// The expected "source key absent" condition.
///
/// Returned by [`FieldScope::read`]; it unwinds only to the schema loop,
/// which records it as an error diagnostic and substitutes
/// [`FieldValue::Missing`] before moving on to the next field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no '{path}' data was present for this record")]
pub struct MissingField {
    path: String,
}

impl MissingField {
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Accumulators for one record's parse pass.
#[derive(Debug)]
pub struct ParseState<'r> {
    raw: &'r RawRecord,
    problems: Problems,
    original: RawSnapshot,
}

impl<'r> ParseState<'r> {
    pub fn new(raw: &'r RawRecord) -> Self {
        Self {
            raw,
            problems: Problems::new(),
            original: RawSnapshot::new(),
        }
    }

    /// Activates `field` for the duration of the returned scope.
    pub fn field<'s>(&'s mut self, field: &'s str) -> FieldScope<'r, 's> {
        FieldScope { state: self, field }
    }

    /// Hands off the accumulated maps; the state is consumed.
    pub fn finish(self) -> (Problems, RawSnapshot) {
        (self.problems, self.original)
    }
}

/// Borrow of the parse state scoped to one output field.
///
/// This is the whole interface a coercer gets: reading source values and
/// logging diagnostics both happen through the active field.
#[derive(Debug)]
pub struct FieldScope<'r, 's> {
    state: &'s mut ParseState<'r>,
    field: &'s str,
}

impl FieldScope<'_, '_> {
    /// Reads `path` from the raw record.
    ///
    /// The as-read value is captured into the raw snapshot under the active
    /// output field name before anything else happens, so the snapshot is
    /// complete even when the key is absent.
    pub fn read(&mut self, path: &str) -> Result<RawValue, MissingField> {
        let value = self.state.raw.get(path);
        self.state.original.insert(
            self.field.to_string(),
            value.cloned().map_or(FieldValue::Missing, FieldValue::from),
        );
        value.cloned().ok_or_else(|| MissingField {
            path: path.to_string(),
        })
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(Severity::Warn, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(Severity::Error, message.into());
    }

    fn log(&mut self, severity: Severity, message: String) {
        self.state
            .problems
            .entry(self.field.to_string())
            .or_default()
            .push(Diagnostic { severity, message });
    }
}
