use crate::roll::prompt::Interact;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct CleanupOutcome {
    pub deleted: usize,
    pub failed: usize,
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

fn list_targets(paths: &[PathBuf]) {
    if paths.len() <= 10 {
        for path in paths {
            println!("  - {}", file_label(path));
        }
        return;
    }
    for path in &paths[..5] {
        println!("  - {}", file_label(path));
    }
    println!("  ... ({} more)", paths.len() - 10);
    for path in &paths[paths.len() - 5..] {
        println!("  - {}", file_label(path));
    }
}

/// Offer to delete files a run fully consumed. One explicit confirmation
/// gates the whole batch; deletion itself is per-file best effort, so one
/// failure never blocks the rest. Callers pass only files that were
/// actually converted.
pub fn delete_consumed(
    kind: &str,
    paths: &[PathBuf],
    interact: &mut dyn Interact,
) -> CleanupOutcome {
    let mut outcome = CleanupOutcome::default();
    if paths.is_empty() {
        return outcome;
    }

    println!("\n{} {kind} file(s) were consumed by this run:", paths.len());
    list_targets(paths);

    if !interact.confirm(&format!("Delete {} {kind} file(s)?", paths.len())) {
        println!("kept {kind} files");
        return outcome;
    }

    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => outcome.deleted += 1,
            Err(err) => {
                outcome.failed += 1;
                eprintln!("  failed to delete {}: {err}", file_label(path));
            }
        }
    }
    if outcome.failed > 0 {
        println!(
            "deleted {} {kind} file(s), {} failed",
            outcome.deleted, outcome.failed
        );
    } else {
        println!("deleted {} {kind} file(s)", outcome.deleted);
    }
    outcome
}
