use crate::error::RollError;
use crate::roll::month::{self, DayRecords, MonthDocument};
use crate::roll::scan::SourceFile;
use crate::roll::warn;
use std::path::{Path, PathBuf};

/// Per-group statistics for the end-of-run summary.
#[derive(Debug, Clone, Default)]
pub struct GroupOutcome {
    pub month: String,
    pub files_seen: usize,
    pub days_new: usize,
    pub days_updated: usize,
    pub skipped: usize,
    pub records_merged: usize,
    pub total_days: usize,
    /// Source files that were actually converted; the only candidates the
    /// cleanup stage may ever delete.
    pub consumed: Vec<PathBuf>,
}

/// Convert one month group: overlay each readable day onto the existing
/// month document and persist the result once, atomically.
///
/// `read_day` is the source parser (CSV or HTML); an empty result from it
/// means "no usable data" and skips the file. Read failures skip the file
/// too — only the final persistence step, or a group with no usable data
/// at all, fails the group.
pub fn convert_group<F>(
    data_dir: &Path,
    month_key: &str,
    files: &[SourceFile],
    mut read_day: F,
) -> Result<GroupOutcome, RollError>
where
    F: FnMut(&SourceFile) -> Result<DayRecords, RollError>,
{
    let month_path = data_dir.join(month::month_file_name(month_key));
    let existing = match month::load(&month_path) {
        Ok(doc) => doc,
        Err(err) => {
            warn::emit(
                "EXISTING_MONTH_UNREADABLE",
                "load",
                &month_path.display().to_string(),
                &err.to_string(),
            );
            MonthDocument::new()
        }
    };
    if !existing.is_empty() {
        println!("  existing document: {} day(s)", existing.len());
    }

    let mut outcome = GroupOutcome {
        month: month_key.to_string(),
        ..GroupOutcome::default()
    };
    let mut incoming = MonthDocument::new();

    for file in files {
        outcome.files_seen += 1;
        match read_day(file) {
            Ok(records) if records.is_empty() => {
                outcome.skipped += 1;
                warn::emit(
                    "EMPTY_SOURCE",
                    "read",
                    &file.path.display().to_string(),
                    "no usable data",
                );
            }
            Ok(records) => {
                let verb = if existing.contains_key(&file.day_key) {
                    outcome.days_updated += 1;
                    "update"
                } else {
                    outcome.days_new += 1;
                    "new"
                };
                println!("  {}: {} record(s) ({verb})", file.day_key, records.len());
                outcome.records_merged += records.len();
                incoming.insert(file.day_key.clone(), records);
                outcome.consumed.push(file.path.clone());
            }
            Err(err) => {
                outcome.skipped += 1;
                warn::emit(
                    "SOURCE_READ_FAILED",
                    "read",
                    &file.path.display().to_string(),
                    &err.to_string(),
                );
            }
        }
    }

    if incoming.is_empty() {
        return Err(RollError::Setup(format!(
            "no usable data for {month_key}"
        )));
    }

    let merged = month::merge(&existing, &incoming);
    outcome.total_days = merged.len();
    month::save(&month_path, &merged)?;
    Ok(outcome)
}
