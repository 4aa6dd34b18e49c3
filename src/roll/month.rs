use crate::error::RollError;
use crate::roll::util::write_json_atomic;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One parsed table row: field name → string value, in header order.
pub type Record = serde_json::Map<String, serde_json::Value>;
/// All records of one day. Never persisted empty.
pub type DayRecords = Vec<Record>;
/// Persisted month document: day key → that day's records. The BTreeMap
/// keeps day keys in ascending lexical (hence chronological) order, which
/// is also the serialization order.
pub type MonthDocument = BTreeMap<String, DayRecords>;

pub fn month_file_name(month: &str) -> String {
    format!("{month}.json")
}

/// Load a previously persisted month document. A missing file is an empty
/// month; an unreadable or unparsable one is an error the caller reports
/// and then treats as empty, to be replaced by the next successful save.
pub fn load(path: &Path) -> Result<MonthDocument, RollError> {
    if !path.exists() {
        return Ok(MonthDocument::new());
    }
    let raw = fs::read_to_string(path).map_err(|err| RollError::source_read(path, err))?;
    serde_json::from_str(&raw).map_err(|err| RollError::source_read(path, err))
}

/// Overlay `incoming` onto `existing`: every incoming day unconditionally
/// replaces any existing entry for the same key (no field-level union).
/// Applying the same batch twice yields the same document.
pub fn merge(existing: &MonthDocument, incoming: &MonthDocument) -> MonthDocument {
    let mut merged = existing.clone();
    for (day, records) in incoming {
        merged.insert(day.clone(), records.clone());
    }
    merged
}

/// Persist a month document: pretty-printed JSON, raw UTF-8 without BOM,
/// written all-or-nothing so a failure leaves any prior file untouched.
pub fn save(path: &Path, doc: &MonthDocument) -> Result<(), RollError> {
    write_json_atomic(path, doc)
}
