//! CSV input for the impulse spreadsheet
//!
//! The whole file is read and deserialized before anything is written, so a
//! malformed file fails the run up front with an I/O-kind error.

use crate::error::{Result, UploadError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Columns the row mapping reads; all of them must appear in the header row.
pub const REQUIRED_COLUMNS: [&str; 21] = [
    "impulseId",
    "sequence",
    "titleShort",
    "titleFull",
    "hookText",
    "motivatorText",
    "impulsLongText",
    "zonesBridgeText",
    "wellbeingWeight",
    "tags",
    "sleepActive",
    "stressActive",
    "herzActive",
    "entzuendungActive",
    "bewegungActive",
    "sleepDetailText",
    "stressDetailText",
    "herzDetailText",
    "entzuendungDetailText",
    "bewegungDetailText",
    "zoneFocusText",
];

/// One spreadsheet row, values exactly as they appear in the file
///
/// Empty cells deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRow {
    /// 1-based line of the record in the source file
    #[serde(skip)]
    pub line: usize,

    pub impulse_id: Option<String>,
    pub sequence: Option<String>,
    pub title_short: Option<String>,
    pub title_full: Option<String>,
    pub hook_text: Option<String>,
    pub motivator_text: Option<String>,
    #[serde(rename = "impulsLongText")]
    pub impulse_long_text: Option<String>,
    pub zones_bridge_text: Option<String>,
    pub wellbeing_weight: Option<String>,
    pub tags: Option<String>,

    pub sleep_active: Option<String>,
    pub stress_active: Option<String>,
    #[serde(rename = "herzActive")]
    pub heart_active: Option<String>,
    #[serde(rename = "entzuendungActive")]
    pub inflammation_active: Option<String>,
    #[serde(rename = "bewegungActive")]
    pub movement_active: Option<String>,

    pub sleep_detail_text: Option<String>,
    pub stress_detail_text: Option<String>,
    #[serde(rename = "herzDetailText")]
    pub heart_detail_text: Option<String>,
    #[serde(rename = "entzuendungDetailText")]
    pub inflammation_detail_text: Option<String>,
    #[serde(rename = "bewegungDetailText")]
    pub movement_detail_text: Option<String>,

    pub zone_focus_text: Option<String>,
}

/// Read every row of the CSV file at `path`
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<InputRow>> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let file = std::fs::File::open(path).map_err(|e| UploadError::io(&source, e))?;
    let rows = parse_rows(file, &source)?;

    debug!(path = %source, rows = rows.len(), "Read impulse spreadsheet");
    Ok(rows)
}

/// Parse rows from any reader; `source` names the input in error messages
///
/// Short rows are padded with missing values. A row with more cells than the
/// header is rejected, since that usually means an unquoted comma shifted the
/// columns.
pub fn parse_rows<R: std::io::Read>(reader: R, source: &str) -> Result<Vec<InputRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(UploadError::MissingColumns {
            path: source.to_string(),
            columns: missing,
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(rows.len() + 2);

        if record.len() > headers.len() {
            return Err(UploadError::ExtraCells {
                path: source.to_string(),
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }

        let mut row: InputRow = record.deserialize(Some(&headers))?;
        row.line = line;
        rows.push(row);
    }

    Ok(rows)
}
