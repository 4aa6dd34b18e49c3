use crate::error::RollError;
use crate::roll::month::DayRecords;
use std::fs;
use std::path::{Path, PathBuf};

/// Excel wants a BOM on UTF-8 CSVs; the JSON side stays BOM-free.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Write one extracted day table as `{day_key}.csv` in `dir`, columns in
/// record order. Exports are a convenience by-product; they are not under
/// the month document's atomicity contract.
pub fn write_day_csv(
    dir: &Path,
    day_key: &str,
    records: &DayRecords,
) -> Result<PathBuf, RollError> {
    let path = dir.join(format!("{day_key}.csv"));

    fs::create_dir_all(dir).map_err(|err| RollError::persist(&path, err))?;

    let headers: Vec<&str> = records
        .first()
        .map(|record| record.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&headers)
        .map_err(|err| RollError::persist(&path, err))?;
    for record in records {
        let row: Vec<&str> = headers
            .iter()
            .map(|name| record.get(*name).and_then(|v| v.as_str()).unwrap_or(""))
            .collect();
        writer
            .write_record(&row)
            .map_err(|err| RollError::persist(&path, err))?;
    }
    let body = writer
        .into_inner()
        .map_err(|err| RollError::persist(&path, err))?;

    let mut out = Vec::with_capacity(UTF8_BOM.len() + body.len());
    out.extend_from_slice(UTF8_BOM);
    out.extend_from_slice(&body);
    fs::write(&path, out).map_err(|err| RollError::persist(&path, err))?;

    Ok(path)
}
