use crate::error::RollError;
use crate::roll::day_key;
use crate::roll::month;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One discovered source file and the day it carries.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub day_key: String,
}

/// Month group key → that month's source files, sorted by day key.
pub type MonthGroups = BTreeMap<String, Vec<SourceFile>>;

/// What converting a group would do, shown in the selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupStatus {
    /// No month document exists yet.
    New,
    /// A month document exists and at least one source day is not in it.
    Mergeable,
    /// Every source day is already present in the month document.
    Converted,
}

impl GroupStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Mergeable => "merge",
            Self::Converted => "done",
        }
    }
}

/// Discover `{YYYY}_{MM}_{DD}*.{extension}` files in `dir` and group them
/// by month. Files whose names do not yield a day key are returned
/// separately for the caller to report; they never fail the scan.
pub fn group_by_month(
    dir: &Path,
    extension: &str,
) -> Result<(MonthGroups, Vec<PathBuf>), RollError> {
    let read_dir = fs::read_dir(dir).map_err(|err| {
        RollError::Setup(format!("source directory unreadable: {}: {err}", dir.display()))
    })?;

    let mut groups: MonthGroups = BTreeMap::new();
    let mut unmatched = Vec::new();

    for entry in read_dir {
        let entry = entry.map_err(|err| {
            RollError::Setup(format!("source directory unreadable: {}: {err}", dir.display()))
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let has_extension = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if !has_extension {
            continue;
        }

        match day_key::parse(&path) {
            Ok(key) => groups.entry(key.month).or_default().push(SourceFile {
                path,
                day_key: key.day,
            }),
            Err(_) => unmatched.push(path),
        }
    }

    for files in groups.values_mut() {
        files.sort_by(|a, b| a.day_key.cmp(&b.day_key).then_with(|| a.path.cmp(&b.path)));
    }

    Ok((groups, unmatched))
}

pub fn group_status(data_dir: &Path, month_key: &str, files: &[SourceFile]) -> GroupStatus {
    let path = data_dir.join(month::month_file_name(month_key));
    if !path.exists() {
        return GroupStatus::New;
    }
    match month::load(&path) {
        Ok(existing) => {
            if files.iter().any(|f| !existing.contains_key(&f.day_key)) {
                GroupStatus::Mergeable
            } else {
                GroupStatus::Converted
            }
        }
        // An unreadable month document will be rebuilt; treat as mergeable.
        Err(_) => GroupStatus::Mergeable,
    }
}
