pub mod convert;
pub mod import_html;
pub mod index;

use anyhow::Result;

use crate::roll::index as roll_index;
use crate::roll::paths::RollPaths;
use crate::roll::prompt::Interact;
use crate::roll::run::GroupOutcome;

pub fn print_group_summary(outcome: &GroupOutcome) {
    println!("\n{}.json written", outcome.month);
    println!("  files processed: {}", outcome.files_seen);
    println!("  days total:     {}", outcome.total_days);
    println!("  days added:     {}", outcome.days_new);
    println!("  days updated:   {}", outcome.days_updated);
    println!("  records merged: {}", outcome.records_merged);
    if outcome.skipped > 0 {
        println!("  files skipped:  {}", outcome.skipped);
    }
}

/// Confirm-gated full rebuild of the index manifest. Declining is not an
/// error and has no side effect.
pub fn maybe_update_index(paths: &RollPaths, interact: &mut dyn Interact) -> Result<()> {
    if !interact.confirm(&format!("Update {}?", paths.index_file.display())) {
        println!("index left unchanged");
        return Ok(());
    }

    let doc = roll_index::rebuild(&paths.data_dir)?;
    roll_index::save(&paths.index_file, &doc)?;
    println!(
        "index updated: {} month document(s) listed",
        doc.monthly.len()
    );
    Ok(())
}
