//! The employee feed schema and conversion to the typed entity.

use roster_model::{Employee, RawRecord};

use crate::schema::{Coercion, FieldRule, Parsed, Schema, clean_records};

/// Field layout of the employee feed, in output order.
///
/// Cheap to build and immutable; callers construct it once and share it
/// across every record parse.
pub fn employee_schema() -> Schema {
    use Coercion::{Date, Integer, Money, Number, Text};
    Schema::new(vec![
        FieldRule::new("id", "id", Integer),
        FieldRule::new("pkDataset", "pk_dataset", Text),
        FieldRule::new("name", "name", Text),
        FieldRule::new("country", "country", Text),
        FieldRule::new("region", "region", Text),
        FieldRule::new("latlng", "latlng", Text),
        FieldRule::new("personalQuote", "personal_quote", Text),
        FieldRule::new("salaryEuros", "salary", Money),
        FieldRule::new("birthday", "birthday", Date),
        FieldRule::new("entryDate", "entry_date", Date),
        FieldRule::new("address", "address", Text),
        FieldRule::new("phone", "phone", Text),
        FieldRule::new("experienceScore", "experience_score", Number),
        FieldRule::new("favoriteFood", "favorite_food", Text),
    ])
}

/// Converts one parse result into the typed employee entity; the
/// diagnostics and snapshot maps are handed off, not copied.
pub fn to_employee(mut parsed: Parsed) -> Employee {
    let status = parsed.status();
    Employee {
        id: parsed.take("id"),
        pk_dataset: parsed.take("pkDataset"),
        name: parsed.take("name"),
        country: parsed.take("country"),
        region: parsed.take("region"),
        latlng: parsed.take("latlng"),
        personal_quote: parsed.take("personalQuote"),
        salary_euros: parsed.take("salaryEuros"),
        birthday: parsed.take("birthday"),
        entry_date: parsed.take("entryDate"),
        address: parsed.take("address"),
        phone: parsed.take("phone"),
        experience_score: parsed.take("experienceScore"),
        favorite_food: parsed.take("favoriteFood"),
        status,
        problems: parsed.problems,
        original: parsed.original,
    }
}

/// Cleans the full raw feed, one employee per input record, order preserved.
pub fn clean_employees(records: &[RawRecord]) -> Vec<Employee> {
    let schema = employee_schema();
    clean_records(&schema, records)
        .into_iter()
        .map(to_employee)
        .collect()
}
