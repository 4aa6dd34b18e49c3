use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::roll::prompt::{AssumeYes, Interact, Terminal};

#[derive(Debug, Parser)]
#[command(
    name = "monthroll",
    version,
    about = "Consolidate daily CSV/HTML table exports into monthly JSON documents"
)]
struct Cli {
    /// Answer every confirmation prompt affirmatively (non-interactive use).
    #[arg(long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Merge one month of daily CSV files into its monthly JSON document.
    Convert {
        /// Month group to convert, e.g. 2025_12. Prompts with a menu when omitted.
        year_month: Option<String>,
        /// Leave converted source files in place (skip the cleanup stage).
        #[arg(long)]
        keep_sources: bool,
    },
    /// Extract ID-tagged tables from daily HTML exports and merge them month by month.
    ImportHtml {
        /// Folder containing YYYY_MM_DD*.html files. Prompted for when omitted.
        folder: Option<PathBuf>,
        /// Leave converted source files in place (skip the cleanup stage).
        #[arg(long)]
        keep_sources: bool,
        /// Skip the per-day CSV export.
        #[arg(long)]
        no_csv: bool,
    },
    /// Rescan the data directory and rewrite the month index manifest.
    Index,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut interact: Box<dyn Interact> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(Terminal::new())
    };

    match cli.command {
        Command::Convert {
            year_month,
            keep_sources,
        } => commands::convert::run(
            &commands::convert::ConvertOptions {
                year_month,
                keep_sources,
            },
            interact.as_mut(),
        ),
        Command::ImportHtml {
            folder,
            keep_sources,
            no_csv,
        } => commands::import_html::run(
            &commands::import_html::ImportHtmlOptions {
                folder,
                keep_sources,
                export_csv: !no_csv,
            },
            interact.as_mut(),
        ),
        Command::Index => commands::index::run(interact.as_mut()),
    }
}
