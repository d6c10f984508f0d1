//! Loading and pre-filtering award rows.
//!
//! Rows arrive as a JSON array of objects keyed by the dataset's column names,
//! for example as embedded in the page:
//!
//! ```json
//! [{ "FISCAL_YEAR": "Fiscal Year 2025", "CAMPUS": "UH Manoa",
//!    "GROUP1": "Engineering", "GROUP2": "", "OUTCOME": "Bachelor's Degree",
//!    "AWARDS": "12" }]
//! ```

use std::collections::BTreeSet;

use log::info;
use serde_json::Value;

use super::error::SourceError;
use super::types::Row;

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Parse rows from a JSON array.
pub fn rows_from_json(json: &str) -> Result<Vec<Row>, SourceError> {
	let value: Value = serde_json::from_str(json)?;
	if !value.is_array() {
		return Err(SourceError::NotAnArray(kind_of(&value)));
	}
	let rows: Vec<Row> = serde_json::from_value(value)?;
	info!("gradgraph: loaded {} rows", rows.len());
	Ok(rows)
}

/// Rows matching the given campus and fiscal year. `None` matches anything.
pub fn filter_rows(rows: &[Row], campus: Option<&str>, fiscal_year: Option<&str>) -> Vec<Row> {
	rows.iter()
		.filter(|r| campus.is_none_or(|c| r.campus == c))
		.filter(|r| fiscal_year.is_none_or(|y| r.fiscal_year == y))
		.cloned()
		.collect()
}

/// Distinct campus names, sorted.
pub fn campuses(rows: &[Row]) -> Vec<String> {
	rows.iter()
		.map(|r| r.campus.as_str())
		.filter(|c| !c.is_empty())
		.collect::<BTreeSet<_>>()
		.into_iter()
		.map(str::to_string)
		.collect()
}

/// Distinct fiscal year labels, oldest first. Labels without a numeric year
/// sort last, alphabetically.
pub fn fiscal_years(rows: &[Row]) -> Vec<String> {
	let mut years: Vec<&Row> = rows.iter().filter(|r| !r.fiscal_year.is_empty()).collect();
	years.sort_by(|a, b| {
		let key = |r: &Row| (r.year().is_none(), r.year());
		key(*a).cmp(&key(*b)).then_with(|| a.fiscal_year.cmp(&b.fiscal_year))
	});
	let mut labels: Vec<String> = years.into_iter().map(|r| r.fiscal_year.clone()).collect();
	labels.dedup();
	labels
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r#"[
		{ "FISCAL_YEAR": "Fiscal Year 2025", "CAMPUS": "UH Manoa", "GROUP1": "Arts", "OUTCOME": "Bachelor's", "AWARDS": 5 },
		{ "FISCAL_YEAR": "Fiscal Year 2024", "CAMPUS": "UH Hilo", "GROUP1": "Arts", "OUTCOME": "Bachelor's", "AWARDS": "3" },
		{ "FISCAL_YEAR": "Fiscal Year 2025", "CAMPUS": "UH Hilo", "GROUP1": "Law", "OUTCOME": "Doctorate", "AWARDS": "x" }
	]"#;

	#[test]
	fn loads_rows() {
		let rows = rows_from_json(SAMPLE).unwrap();
		assert_eq!(rows.len(), 3);
		assert_eq!(rows[1].awards, 3);
		assert_eq!(rows[2].awards, 0);
	}

	#[test]
	fn rejects_non_array() {
		let err = rows_from_json(r#"{ "rows": [] }"#).unwrap_err();
		assert!(matches!(err, SourceError::NotAnArray("an object")));
		assert!(matches!(rows_from_json("[1,"), Err(SourceError::Json(_))));
	}

	#[test]
	fn empty_array_is_fine() {
		assert!(rows_from_json("[]").unwrap().is_empty());
	}

	#[test]
	fn filters_by_campus_and_year() {
		let rows = rows_from_json(SAMPLE).unwrap();
		assert_eq!(filter_rows(&rows, Some("UH Hilo"), None).len(), 2);
		assert_eq!(filter_rows(&rows, Some("UH Hilo"), Some("Fiscal Year 2025")).len(), 1);
		assert_eq!(filter_rows(&rows, None, None).len(), 3);
		assert!(filter_rows(&rows, Some("UH Maui"), None).is_empty());
	}

	#[test]
	fn distinct_listings() {
		let rows = rows_from_json(SAMPLE).unwrap();
		assert_eq!(campuses(&rows), vec!["UH Hilo", "UH Manoa"]);
		assert_eq!(fiscal_years(&rows), vec!["Fiscal Year 2024", "Fiscal Year 2025"]);
	}
}
