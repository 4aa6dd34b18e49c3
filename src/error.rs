use thiserror::Error;

/// Failure taxonomy of a conversion run.
///
/// `ParseFailure` and `SourceRead` are per-file: the file is skipped,
/// counted, and the batch continues. `Persist` and `Setup` abort the unit
/// of work they occur in.
#[derive(Debug, Error)]
pub enum RollError {
    #[error("file name does not yield a day key: {0}")]
    ParseFailure(String),
    #[error("failed to read source {path}: {reason}")]
    SourceRead { path: String, reason: String },
    #[error("failed to persist {path}: {reason}")]
    Persist { path: String, reason: String },
    #[error("{0}")]
    Setup(String),
}

impl RollError {
    pub fn source_read(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::SourceRead {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn persist(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::Persist {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}
