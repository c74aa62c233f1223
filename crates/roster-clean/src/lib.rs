//! Schema-driven validation and normalization engine.
//!
//! Turns loosely-structured raw records into fully-shaped, typed records
//! without ever discarding information: every anomaly becomes a per-field
//! warning or error, and the as-read source value of every field is kept
//! alongside the cleaned one.
//!
//! - **state**: per-record parsing state and field scoping
//! - **coerce**: the field coercers (number, integer, text, money, date)
//! - **schema**: rule list, record orchestration, record-set normalizer
//! - **normalize**: the format heuristics the coercers lean on
//! - **employee**: the concrete feed schema and its typed output

pub mod coerce;
pub mod employee;
pub mod normalize;
pub mod schema;
pub mod state;

pub use employee::{clean_employees, employee_schema, to_employee};
pub use schema::{Coercion, FieldRule, Parsed, Schema, clean_records};
pub use state::{FieldScope, MissingField, ParseState};
