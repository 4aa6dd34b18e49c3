use anyhow::Result;

use crate::error::RollError;
use crate::roll::cleanup;
use crate::roll::config;
use crate::roll::csv_source;
use crate::roll::paths::{self, RollPaths};
use crate::roll::prompt::Interact;
use crate::roll::run;
use crate::roll::scan::{self, MonthGroups};
use crate::roll::warn;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub year_month: Option<String>,
    pub keep_sources: bool,
}

/// CSV variant: merge one month group of daily CSV files into its month
/// document, then offer cleanup and an index update.
pub fn run(opts: &ConvertOptions, interact: &mut dyn Interact) -> Result<()> {
    let paths = paths::resolve_paths()?;
    let cfg = config::load_config(&paths.root)?;

    if !paths.data_dir.exists() {
        return Err(RollError::Setup(format!(
            "data directory not found: {}",
            paths.data_dir.display()
        ))
        .into());
    }

    let (groups, unmatched) = scan::group_by_month(&paths.source_dir, "csv")?;
    for path in &unmatched {
        warn::emit(
            "DAY_KEY_MISMATCH",
            "scan",
            &path.display().to_string(),
            "expected a YYYY_MM_DD name prefix",
        );
    }

    let month_key = match &opts.year_month {
        Some(ym) => ym.trim().to_string(),
        None => choose_month(&paths, &groups, interact)?,
    };

    let Some(files) = groups.get(&month_key) else {
        return Err(RollError::Setup(format!(
            "no CSV files for {month_key} in {}",
            paths.source_dir.display()
        ))
        .into());
    };

    println!("\nconverting {month_key} ({} file(s))", files.len());
    let outcome = run::convert_group(&paths.data_dir, &month_key, files, |file| {
        csv_source::read_day_records(&file.path, &cfg.decode)
    })?;

    super::print_group_summary(&outcome);

    if !opts.keep_sources {
        cleanup::delete_consumed("CSV", &outcome.consumed, interact);
    }

    super::maybe_update_index(&paths, interact)
}

/// Interactive selection: list month groups with their status and accept
/// a 1-based menu number or a literal `YYYY_MM`.
fn choose_month(
    paths: &RollPaths,
    groups: &MonthGroups,
    interact: &mut dyn Interact,
) -> Result<String> {
    if groups.is_empty() {
        return Err(RollError::Setup(format!(
            "no convertible CSV files found in {}",
            paths.source_dir.display()
        ))
        .into());
    }

    println!("available months:");
    let months: Vec<&String> = groups.keys().collect();
    for (i, month_key) in months.iter().enumerate() {
        let files = &groups[*month_key];
        let status = scan::group_status(&paths.data_dir, month_key, files);
        println!(
            "  {}. {} ({} file(s), {})",
            i + 1,
            month_key,
            files.len(),
            status.label()
        );
    }

    let Some(input) = interact.line("month to convert (number or YYYY_MM)") else {
        return Err(RollError::Setup("no month selected".to_string()).into());
    };
    let input = input.trim().to_string();
    if input.is_empty() {
        return Err(RollError::Setup("no month selected".to_string()).into());
    }

    // A bare number is a menu position; anything else is taken literally.
    if input.bytes().all(|b| b.is_ascii_digit()) {
        let position: usize = input
            .parse()
            .map_err(|_| RollError::Setup(format!("invalid selection: {input}")))?;
        return match position.checked_sub(1).and_then(|i| months.get(i)) {
            Some(month_key) => Ok((*month_key).clone()),
            None => Err(RollError::Setup(format!("invalid selection: {input}")).into()),
        };
    }

    Ok(input)
}
