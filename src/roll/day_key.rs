use crate::error::RollError;
use std::path::Path;

/// Canonical identifiers derived from a source file name:
/// `day` is `YYYY_MM_DD`, `month` is the parent `YYYY_MM` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayKey {
    pub day: String,
    pub month: String,
}

/// True when `token` is non-empty and purely ASCII digits.
///
/// This is the single, canonical implementation — **do not** duplicate
/// this helper in other modules.
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Derive the day key from a file name.
///
/// Only the first whitespace-delimited token of the stem carries the date
/// (`2025_12_15 report.html` is accepted); after that, the first three
/// `_`-delimited tokens must be purely numeric. Anything following them is
/// a disambiguating suffix and is ignored. There is deliberately no
/// calendar check on the month/day ranges.
pub fn parse(path: &Path) -> Result<DayKey, RollError> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let date_part = stem.split_whitespace().next().unwrap_or("");

    let parts: Vec<&str> = date_part.split('_').collect();
    if parts.len() >= 3 && parts[..3].iter().all(|p| is_numeric_token(p)) {
        return Ok(DayKey {
            day: format!("{}_{}_{}", parts[0], parts[1], parts[2]),
            month: format!("{}_{}", parts[0], parts[1]),
        });
    }

    Err(RollError::ParseFailure(path.display().to_string()))
}
