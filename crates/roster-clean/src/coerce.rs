//! Field coercers, one per semantic type.
//!
//! Every coercer reads through the active [`FieldScope`] and composes by
//! delegating to a lower-level coercer, layering its own checks on top:
//! `integer` -> `number` -> read, `money`/`date` -> `text` -> read. A
//! coercer always produces a value; recoverable defects warn, untrusted
//! values error and fall back to the raw input, and only the expected
//! "source key absent" condition propagates (as [`MissingField`], handled
//! by the schema loop).

use roster_model::{FieldValue, RawValue};

use crate::normalize::{datetime, money, numeric};
use crate::state::{FieldScope, MissingField};

/// Extracts a number. A raw number passes through unchanged; text warns and
/// is float-parsed; unparseable text errors and is returned verbatim, so
/// callers must tolerate a non-numeric result on error.
pub fn number(scope: &mut FieldScope<'_, '_>, path: &str) -> Result<FieldValue, MissingField> {
    match scope.read(path)? {
        RawValue::Number(n) => Ok(FieldValue::Number(n)),
        RawValue::Text(text) => {
            scope.warn(format!("expected a number for '{path}', got string"));
            match numeric::parse_f64(&text) {
                Some(n) => Ok(FieldValue::Number(n)),
                None => {
                    scope.error(format!("could not determine a numeric value from '{text}'"));
                    Ok(FieldValue::Text(text))
                }
            }
        }
    }
}

/// Extracts an integer. Delegates to [`number`] and warns when the result is
/// not a whole number; the value is kept as-is, never truncated.
pub fn integer(scope: &mut FieldScope<'_, '_>, path: &str) -> Result<FieldValue, MissingField> {
    let value = number(scope, path)?;
    match &value {
        FieldValue::Number(n) if n.fract() == 0.0 => {}
        FieldValue::Number(n) => {
            scope.warn(format!(
                "expected an integer for '{path}', got {}",
                numeric::format_numeric(*n)
            ));
        }
        FieldValue::Text(text) => {
            scope.warn(format!("expected an integer for '{path}', got {text}"));
        }
        FieldValue::Missing => {}
    }
    Ok(value)
}

/// Extracts a string; numbers warn and are stringified.
pub fn text(scope: &mut FieldScope<'_, '_>, path: &str) -> Result<FieldValue, MissingField> {
    read_text(scope, path).map(FieldValue::Text)
}

/// Extracts a currency amount as a plain EUR number.
///
/// Marker heuristic, in order: a dollar sign converts at the fixed
/// [`money::USD_TO_EUR`] rate with a warning; a value without a euro sign
/// warns that EUR was assumed; a euro-marked value passes silently. Only
/// those two markers are recognized — anything else (e.g. a pound sign) is
/// treated as already-EUR.
pub fn money(scope: &mut FieldScope<'_, '_>, path: &str) -> Result<FieldValue, MissingField> {
    let raw = read_text(scope, path)?;
    let mut amount = money::strip_currency(&raw);

    if raw.contains('$') {
        amount *= money::USD_TO_EUR;
        scope.warn(format!(
            "value was in $, USD was assumed and converted to EUR at {}",
            money::USD_TO_EUR
        ));
    } else if !raw.contains('€') {
        scope.warn("no currency marker present, EUR was assumed");
    }

    Ok(FieldValue::Number(amount))
}

/// Extracts a calendar date as a sortable `YYYY-MM-DD` string.
///
/// Two layout collisions are fixed up before the loose parser runs, then an
/// unparseable value errors and keeps the pre-parse string.
pub fn date(scope: &mut FieldScope<'_, '_>, path: &str) -> Result<FieldValue, MissingField> {
    let mut raw = read_text(scope, path)?;

    // The entry_date feed column is day-first while every other date in the
    // feed leads with the month; swap before the parser sees it.
    if path == "entry_date"
        && let Some(swapped) = datetime::swap_slash_day_month(&raw)
    {
        raw = swapped;
    }

    // Dotted short dates ("16.04.23") arrive day-first as well.
    if let Some(rewritten) = datetime::dotted_short_date_to_us(&raw) {
        raw = rewritten;
    }

    match datetime::parse_loose_date(&raw) {
        Some(date) => Ok(FieldValue::Text(datetime::format_iso_date(date))),
        None => {
            scope.error(format!("failed to parse a date from '{raw}'"));
            Ok(FieldValue::Text(raw))
        }
    }
}

/// Shared base for the string-shaped coercers.
fn read_text(scope: &mut FieldScope<'_, '_>, path: &str) -> Result<String, MissingField> {
    match scope.read(path)? {
        RawValue::Text(text) => Ok(text),
        RawValue::Number(n) => {
            scope.warn(format!("expected a string for '{path}', got number"));
            Ok(numeric::format_numeric(n))
        }
    }
}
