use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use roster_clean::clean_employees;
use roster_ingest::read_feed;
use roster_model::Employee;

use crate::cli::CleanArgs;

/// Loads the raw feed, cleans it, and emits the normalized records as JSON
/// (to `--output` when given, stdout otherwise).
pub fn run_clean(args: &CleanArgs) -> Result<Vec<Employee>> {
    let records = read_feed(&args.input)
        .with_context(|| format!("read feed {}", args.input.display()))?;
    info!(records = records.len(), "feed loaded");

    let employees = clean_employees(&records);

    let json = serde_json::to_string_pretty(&employees).context("serialize cleaned records")?;
    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "cleaned records written");
        }
        None => println!("{json}"),
    }

    Ok(employees)
}
