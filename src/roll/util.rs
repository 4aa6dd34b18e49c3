use crate::error::RollError;
use std::io::Write;
use std::path::Path;

/// Serialize `value` as pretty JSON and write it to `path` all-or-nothing:
/// the bytes go to a temporary file in the destination directory which is
/// then renamed over the target. A failure at any step leaves a
/// previously-existing file untouched.
///
/// This is the single write path for month documents and the index —
/// **do not** hand-roll `fs::write` for either.
pub fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), RollError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|err| RollError::persist(path, err))?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp =
        tempfile::NamedTempFile::new_in(parent).map_err(|err| RollError::persist(path, err))?;
    tmp.write_all(json.as_bytes())
        .map_err(|err| RollError::persist(path, err))?;
    tmp.write_all(b"\n")
        .map_err(|err| RollError::persist(path, err))?;
    tmp.persist(path).map_err(|err| RollError::persist(path, err))?;
    Ok(())
}
