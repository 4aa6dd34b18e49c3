use crate::error::RollError;
use crate::roll::day_key::is_numeric_token;
use crate::roll::util::write_json_atomic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Manifest of available month documents, newest first. Rebuilt in full on
/// every update — never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    pub monthly: Vec<String>,
}

/// `YYYY_MM.json` and nothing else: exactly two purely-numeric components
/// once the suffix is stripped.
fn is_month_file_name(name: &str) -> bool {
    let Some(stem) = name.strip_suffix(".json") else {
        return false;
    };
    let parts: Vec<&str> = stem.split('_').collect();
    parts.len() == 2 && parts.iter().all(|p| is_numeric_token(p))
}

/// Rescan `data_dir` and produce the manifest covering exactly the month
/// documents present, as `{dir_name}/{file_name}` entries sorted
/// descending.
pub fn rebuild(data_dir: &Path) -> Result<IndexDocument, RollError> {
    let dir_name = data_dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("data");

    let read_dir = fs::read_dir(data_dir).map_err(|err| {
        RollError::Setup(format!("data directory unreadable: {}: {err}", data_dir.display()))
    })?;

    let mut monthly = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|err| {
            RollError::Setup(format!("data directory unreadable: {}: {err}", data_dir.display()))
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if is_month_file_name(name) {
            monthly.push(format!("{dir_name}/{name}"));
        }
    }

    monthly.sort_by(|a, b| b.cmp(a));
    Ok(IndexDocument { monthly })
}

/// Overwrite the prior index unconditionally, with the same all-or-nothing
/// discipline as month documents.
pub fn save(path: &Path, index: &IndexDocument) -> Result<(), RollError> {
    write_json_atomic(path, index)
}
