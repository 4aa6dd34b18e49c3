use anyhow::Result;
use std::path::PathBuf;

use crate::error::RollError;
use crate::roll::cleanup;
use crate::roll::config;
use crate::roll::export;
use crate::roll::html_source;
use crate::roll::paths;
use crate::roll::prompt::Interact;
use crate::roll::run;
use crate::roll::scan;
use crate::roll::warn;

#[derive(Debug, Clone)]
pub struct ImportHtmlOptions {
    pub folder: Option<PathBuf>,
    pub keep_sources: bool,
    pub export_csv: bool,
}

/// HTML variant: walk every month group found in the source folder,
/// extract the tagged table of each day, merge month by month, and
/// (optionally) leave a per-day CSV export behind.
pub fn run(opts: &ImportHtmlOptions, interact: &mut dyn Interact) -> Result<()> {
    let paths = paths::resolve_paths()?;
    let cfg = config::load_config(&paths.root)?;

    if !paths.data_dir.exists() {
        return Err(RollError::Setup(format!(
            "data directory not found: {}",
            paths.data_dir.display()
        ))
        .into());
    }

    let folder = match &opts.folder {
        Some(folder) => folder.clone(),
        None => {
            let Some(input) = interact.line("folder containing the HTML exports") else {
                return Err(RollError::Setup("no folder provided".to_string()).into());
            };
            // Windows paths pasted from Explorer arrive quoted.
            PathBuf::from(input.trim().trim_matches(['"', '\'']))
        }
    };
    if !folder.is_dir() {
        return Err(RollError::Setup(format!(
            "HTML folder not found: {}",
            folder.display()
        ))
        .into());
    }

    let (groups, unmatched) = scan::group_by_month(&folder, "html")?;
    for path in &unmatched {
        warn::emit(
            "DAY_KEY_MISMATCH",
            "scan",
            &path.display().to_string(),
            "expected a YYYY_MM_DD name prefix",
        );
    }
    if groups.is_empty() {
        return Err(RollError::Setup(format!(
            "no HTML files with a YYYY_MM_DD name found in {}",
            folder.display()
        ))
        .into());
    }

    let month_list: Vec<&str> = groups.keys().map(String::as_str).collect();
    println!(
        "found {} month group(s): {}",
        groups.len(),
        month_list.join(", ")
    );

    let mut converted_groups = 0usize;
    let mut consumed_html = Vec::new();
    let mut exported_csv = Vec::new();

    for (month_key, files) in &groups {
        println!("\nconverting {month_key} ({} file(s))", files.len());

        let result = run::convert_group(&paths.data_dir, month_key, files, |file| {
            let records = html_source::read_day_records(&file.path, &cfg.decode)?;
            if opts.export_csv && !records.is_empty() {
                match export::write_day_csv(&paths.export_dir, &file.day_key, &records) {
                    Ok(path) => exported_csv.push(path),
                    Err(err) => warn::emit(
                        "CSV_EXPORT_FAILED",
                        "export",
                        &file.path.display().to_string(),
                        &err.to_string(),
                    ),
                }
            }
            Ok(records)
        });

        match result {
            Ok(outcome) => {
                super::print_group_summary(&outcome);
                consumed_html.extend(outcome.consumed);
                converted_groups += 1;
            }
            // Persistence failures preserve prior state but end the run;
            // anything else (e.g. a group with no usable data) only skips
            // this group.
            Err(err @ RollError::Persist { .. }) => return Err(err.into()),
            Err(err) => warn::emit("GROUP_SKIPPED", "convert", month_key, &err.to_string()),
        }
    }

    if converted_groups == 0 {
        return Err(RollError::Setup("no usable data in any month group".to_string()).into());
    }

    if !opts.keep_sources {
        cleanup::delete_consumed("HTML", &consumed_html, interact);
    }
    if opts.export_csv {
        cleanup::delete_consumed("exported CSV", &exported_csv, interact);
    }

    super::maybe_update_index(&paths, interact)
}
