use crate::error::RollError;
use crate::roll::config::DecodeConfig;
use crate::roll::decode;
use crate::roll::month::{DayRecords, Record};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Legacy exports embed U+FEFF mid-field; strip it along with the
/// surrounding whitespace, for keys and values alike.
fn clean_field(raw: &str) -> String {
    raw.trim().replace('\u{feff}', "")
}

fn parse_text(text: &str) -> Result<DayRecords, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(clean_field).collect();

    let mut records = DayRecords::new();
    for row in reader.records() {
        let row = row?;
        // A row wider than the header has trailing values with no field
        // name to key them under; drop it.
        if row.len() > headers.len() {
            continue;
        }
        let mut record = Record::new();
        for (i, name) in headers.iter().enumerate() {
            let value = row.get(i).map(clean_field).unwrap_or_default();
            record.insert(name.clone(), Value::String(value));
        }
        records.push(record);
    }
    Ok(records)
}

/// Read one day's CSV file into records, using header-row field names.
/// An empty result means "no usable data" and is not an error.
pub fn read_day_records(path: &Path, cfg: &DecodeConfig) -> Result<DayRecords, RollError> {
    let bytes = fs::read(path).map_err(|err| RollError::source_read(path, err))?;
    let text = decode::decode_text(&bytes, cfg);
    parse_text(&text).map_err(|err| RollError::source_read(path, err))
}
