use crate::error::RollError;
use crate::roll::config::DecodeConfig;
use crate::roll::decode;
use crate::roll::month::{DayRecords, Record};
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Spreadsheet-style exports render whole numbers as floats; fold an
/// integral `5.0` back to `5`. Plain digit strings pass through untouched,
/// so `007` keeps its leading zeros.
fn coerce_integral(value: &str) -> String {
    if !value.contains(['.', 'e', 'E']) {
        return value.to_string();
    }
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed.fract() == 0.0 && parsed.abs() < 9.0e15 => {
            format!("{}", parsed as i64)
        }
        _ => value.to_string(),
    }
}

fn parse_document(text: &str) -> DayRecords {
    let document = Html::parse_document(text);
    let table_selector = Selector::parse("table[id]").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();

    let Some(table) = document.select(&table_selector).next() else {
        return DayRecords::new();
    };

    let mut rows = table.select(&row_selector);
    let Some(header_row) = rows.next() else {
        return DayRecords::new();
    };
    let headers: Vec<String> = header_row.select(&cell_selector).map(cell_text).collect();
    if headers.is_empty() {
        return DayRecords::new();
    }

    let mut records = DayRecords::new();
    for row in rows {
        let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        let mut record = Record::new();
        for (i, name) in headers.iter().enumerate() {
            let value = cells
                .get(i)
                .map(|cell| coerce_integral(cell))
                .unwrap_or_default();
            record.insert(name.clone(), Value::String(value));
        }
        records.push(record);
    }
    records
}

/// Extract the first table carrying an `id` attribute from one day's HTML
/// page. No such table, or a table with no data rows, yields the explicit
/// empty result — distinct from a read failure.
pub fn read_day_records(path: &Path, cfg: &DecodeConfig) -> Result<DayRecords, RollError> {
    let bytes = fs::read(path).map_err(|err| RollError::source_read(path, err))?;
    let text = decode::decode_text(&bytes, cfg);
    Ok(parse_document(&text))
}
