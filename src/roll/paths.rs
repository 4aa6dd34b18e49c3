use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Every component receives its directories through this struct; nothing
/// derives a path from the executable location at use sites.
#[derive(Debug, Clone)]
pub struct RollPaths {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub index_file: PathBuf,
    pub source_dir: PathBuf,
    pub export_dir: PathBuf,
}

fn env_or_default_path(var: &str, fallback: PathBuf) -> PathBuf {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
        _ => fallback,
    }
}

pub fn resolve_paths() -> Result<RollPaths> {
    let root = match env::var("MONTHROLL_ROOT") {
        Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
        _ => env::current_dir().context("current directory could not be resolved")?,
    };

    let data_dir = env_or_default_path("MONTHROLL_DATA_DIR", root.join("data"));
    let index_file = env_or_default_path("MONTHROLL_INDEX_FILE", root.join("files.json"));
    let source_dir = env_or_default_path("MONTHROLL_SOURCE_DIR", data_dir.clone());
    let export_dir = env_or_default_path("MONTHROLL_EXPORT_DIR", root.join("converter"));

    Ok(RollPaths {
        root,
        data_dir,
        index_file,
        source_dir,
        export_dir,
    })
}
