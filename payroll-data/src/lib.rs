//! CSV loader for the prime type catalog.
//!
//! The catalog describes the kinds of primes (bonuses/allowances) a
//! contract can carry, with the default taxability flags used to pre-fill
//! a new prime line. Once a line is added, its own flags are
//! authoritative; the catalog is reference data only.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does not matter.
//!
//! | Column                     | Required | Type    | Notes                                |
//! |----------------------------|----------|---------|--------------------------------------|
//! | `id`                       | yes      | integer | Unique per catalog                   |
//! | `label`                    | yes      | string  | e.g. `Prime de transport`            |
//! | `category`                 | yes      | string  | Free-form grouping                   |
//! | `description`              | no       | string  | Leave cell empty for none            |
//! | `taxable`                  | yes      | flag    | `true/false`, `1/0`, `oui/non`       |
//! | `subject_to_contributions` | yes      | flag    | Same values as `taxable`             |
//!
//! ### Example
//!
//! ```csv
//! id,label,category,description,taxable,subject_to_contributions
//! 1,Prime de transport,transport,Indemnité mensuelle,non,oui
//! 2,Prime d'ancienneté,anciennete,,oui,oui
//! ```

use std::io::Read;

use payroll_core::models::PrimeType;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading the prime type catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid flag value '{value}' in column '{column}' (row {row})")]
    InvalidFlag {
        column: &'static str,
        value: String,
        row: usize,
    },

    #[error("duplicate prime type id {0}")]
    DuplicateId(i32),
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::CsvParse(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: i32,
    label: String,
    category: String,
    #[serde(default)]
    description: Option<String>,
    taxable: String,
    subject_to_contributions: String,
}

/// Parses a boolean flag cell.
///
/// Accepts `true`/`false`, `1`/`0` and French `oui`/`non`, all
/// case-insensitive, since the catalogs in the field come from
/// spreadsheets maintained in French.
fn parse_flag(
    value: &str,
    column: &'static str,
    row: usize,
) -> Result<bool, CatalogError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "oui" => Ok(true),
        "false" | "0" | "non" => Ok(false),
        _ => Err(CatalogError::InvalidFlag {
            column,
            value: value.to_string(),
            row,
        }),
    }
}

/// Loads the prime type catalog from CSV text.
///
/// # Errors
///
/// Returns [`CatalogError`] on malformed CSV, an unparseable flag cell,
/// or a duplicated id.
pub fn load_prime_catalog<R: Read>(reader: R) -> Result<Vec<PrimeType>, CatalogError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut catalog: Vec<PrimeType> = Vec::new();

    for (i, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        // Rows are 1-based and the header occupies the first line.
        let row = i + 2;
        let record = record?;

        if catalog.iter().any(|p| p.id == record.id) {
            return Err(CatalogError::DuplicateId(record.id));
        }

        let description = record
            .description
            .filter(|d| !d.trim().is_empty());

        catalog.push(PrimeType {
            id: record.id,
            label: record.label,
            category: record.category,
            description,
            taxable: parse_flag(&record.taxable, "taxable", row)?,
            subject_to_contributions: parse_flag(
                &record.subject_to_contributions,
                "subject_to_contributions",
                row,
            )?,
        });
    }

    Ok(catalog)
}

/// Looks up a catalog entry by id.
pub fn find_prime_type(
    catalog: &[PrimeType],
    id: i32,
) -> Option<&PrimeType> {
    catalog.iter().find(|p| p.id == id)
}
