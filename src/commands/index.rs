use anyhow::Result;

use crate::error::RollError;
use crate::roll::paths;
use crate::roll::prompt::Interact;

/// Standalone rebuild of the index manifest, confirm-gated like the
/// post-conversion update.
pub fn run(interact: &mut dyn Interact) -> Result<()> {
    let paths = paths::resolve_paths()?;

    if !paths.data_dir.exists() {
        return Err(RollError::Setup(format!(
            "data directory not found: {}",
            paths.data_dir.display()
        ))
        .into());
    }

    super::maybe_update_index(&paths, interact)
}
