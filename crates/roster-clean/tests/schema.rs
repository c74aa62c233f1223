//! End-to-end tests for schema orchestration and the employee feed.

use roster_clean::{clean_employees, clean_records, employee_schema};
use roster_model::{FieldValue, RawRecord, RawValue, RecordStatus, Severity};

fn sample_record() -> RawRecord {
    serde_json::from_str(
        r#"{
            "id": 128,
            "pk_dataset": "CEE7D98B-A5CA-4A16-4772-ED850A86B095",
            "name": "Sybill A. Mcgee",
            "country": "Sint Maarten",
            "region": "Pays de la Loire",
            "latlng": "-67.3217826816, -29.0963008512",
            "personal_quote": "semper, dui lectus rutrum urna, nec luctus felis",
            "salary": "€125,044",
            "birthday": "16/04/2023",
            "entry_date": "November 23rd, 2023",
            "address": "8722 Proin Road",
            "phone": "1-387-316-7764",
            "experience_score": 9,
            "favorite_food": "sandwiches, salads"
        }"#,
    )
    .expect("valid sample record")
}

#[test]
fn well_formed_record_parses_clean() {
    let schema = employee_schema();
    let parsed = schema.parse(&sample_record());

    assert_eq!(parsed.values["id"], FieldValue::Number(128.0));
    assert_eq!(parsed.values["salaryEuros"], FieldValue::Number(125044.0));
    assert_eq!(parsed.values["birthday"], FieldValue::Text("2023-04-16".into()));
    assert_eq!(parsed.values["entryDate"], FieldValue::Text("2023-11-23".into()));
    assert_eq!(
        parsed.values["experienceScore"],
        FieldValue::Number(9.0)
    );
    assert!(parsed.problems.is_empty());
    assert_eq!(parsed.status(), RecordStatus::Ok);
}

#[test]
fn snapshot_keeps_raw_values_under_output_names() {
    let schema = employee_schema();
    let parsed = schema.parse(&sample_record());

    // Even a successfully coerced field keeps its as-read source value.
    assert_eq!(
        parsed.original["salaryEuros"],
        FieldValue::Text("€125,044".into())
    );
    assert_eq!(
        parsed.original["birthday"],
        FieldValue::Text("16/04/2023".into())
    );
    assert_eq!(parsed.original["id"], FieldValue::Number(128.0));
    assert_eq!(parsed.original.len(), schema.rules().len());
}

#[test]
fn missing_field_is_flagged_and_parsing_continues() {
    let mut raw = sample_record();
    raw.remove("name");

    let parsed = employee_schema().parse(&raw);

    let diagnostics = &parsed.problems["name"];
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(
        diagnostics[0].message,
        "no 'name' data was present for this record"
    );
    assert!(parsed.values["name"].is_missing());
    assert!(parsed.original["name"].is_missing());

    // Every other field still parsed normally.
    assert_eq!(parsed.values["id"], FieldValue::Number(128.0));
    assert_eq!(parsed.values["entryDate"], FieldValue::Text("2023-11-23".into()));
    assert_eq!(parsed.problems.len(), 1);
    assert_eq!(parsed.status(), RecordStatus::Error);
}

#[test]
fn every_output_field_is_present_even_on_an_empty_record() {
    let parsed = employee_schema().parse(&RawRecord::new());

    let schema = employee_schema();
    assert_eq!(parsed.values.len(), schema.rules().len());
    for rule in schema.rules() {
        assert!(parsed.values[&rule.target].is_missing());
        assert_eq!(
            parsed.problems[&rule.target][0].severity,
            Severity::Error,
            "{} should be error-flagged",
            rule.target
        );
    }
}

#[test]
fn record_set_preserves_length_and_order() {
    let mut records = Vec::new();
    for id in [3.0, 1.0, 2.0] {
        let mut raw = sample_record();
        raw.insert("id".to_string(), RawValue::Number(id));
        records.push(raw);
    }

    let cleaned = clean_records(&employee_schema(), &records);

    assert_eq!(cleaned.len(), records.len());
    let ids: Vec<f64> = cleaned
        .iter()
        .map(|parsed| parsed.values["id"].as_number().expect("numeric id"))
        .collect();
    assert_eq!(ids, vec![3.0, 1.0, 2.0]);
}

#[test]
fn error_flagged_field_keeps_the_raw_value() {
    let mut raw = sample_record();
    raw.insert("experience_score".to_string(), RawValue::Text("high".into()));

    let parsed = employee_schema().parse(&raw);

    assert_eq!(
        parsed.values["experienceScore"],
        parsed.original["experienceScore"]
    );
    assert!(
        parsed.problems["experienceScore"]
            .iter()
            .any(|d| d.severity == Severity::Error)
    );
}

#[test]
fn cleaning_already_clean_values_is_stable() {
    let parsed = employee_schema().parse(&sample_record());

    // Re-run the cleaned values through the schema as if they had been
    // reserialized: typed values must come out unchanged.
    let mut round_trip = RawRecord::new();
    let schema = employee_schema();
    for rule in schema.rules() {
        let raw = match &parsed.values[&rule.target] {
            FieldValue::Number(n) => RawValue::Number(*n),
            FieldValue::Text(t) => RawValue::Text(t.clone()),
            FieldValue::Missing => continue,
        };
        round_trip.insert(rule.source.clone(), raw);
    }

    let reparsed = schema.parse(&round_trip);
    assert_eq!(reparsed.values, parsed.values);
}

#[test]
fn clean_employees_builds_typed_records() {
    let mut bad = sample_record();
    bad.remove("name");
    bad.insert("salary".to_string(), RawValue::Text("$100".into()));
    let records = vec![sample_record(), bad];

    let employees = clean_employees(&records);

    assert_eq!(employees.len(), 2);
    let clean = &employees[0];
    assert_eq!(clean.status, RecordStatus::Ok);
    assert_eq!(clean.name, FieldValue::Text("Sybill A. Mcgee".into()));
    assert_eq!(clean.entry_date, FieldValue::Text("2023-11-23".into()));
    assert!(clean.problems.is_empty());

    let flagged = &employees[1];
    assert_eq!(flagged.status, RecordStatus::Error);
    assert!(flagged.name.is_missing());
    let salary = flagged.salary_euros.as_number().expect("converted amount");
    assert!((salary - 94.0).abs() < 1e-9);
    assert!(flagged.problems.contains_key("salaryEuros"));
    assert_eq!(
        flagged.original["salaryEuros"],
        FieldValue::Text("$100".into())
    );
}
