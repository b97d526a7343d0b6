//! CLI entry point for shortcut-guard
//!
//! Provides command-line interface for checking shortcuts and auditing
//! slot files for shortcuts that won't fire in password fields.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use shortcut_guard::config::{SlotAssignments, DEFAULT_SLOT_FILE};
use shortcut_guard::core::parse_shortcut;
use shortcut_guard::i18n::EnglishCatalog;
use shortcut_guard::report::{count_blocked, ShortcutReport};
use shortcut_guard::settings::{ShortcutSlot, ShortcutSource};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "shortcut-guard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check shortcuts given on the command line (e.g. "opt+c", "⌘⇧V")
    Check {
        /// Shortcuts to check
        #[arg(required = true)]
        shortcuts: Vec<String>,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Audit a slot file (lines of "slot = shortcut")
    Audit {
        /// Path to slot file
        #[arg(short, long, default_value = DEFAULT_SLOT_FILE)]
        config: PathBuf,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let reports = match cli.command {
        Commands::Check { shortcuts, json } => {
            let reports = check_shortcuts(&shortcuts)?;
            print_reports(&reports, json)?;
            reports
        }
        Commands::Audit { config, json } => {
            let reports = audit_slot_file(&config)?;
            print_reports(&reports, json)?;
            reports
        }
    };

    if count_blocked(&reports) > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Parse and classify each shortcut argument
fn check_shortcuts(shortcuts: &[String]) -> anyhow::Result<Vec<ShortcutReport>> {
    shortcuts
        .iter()
        .map(|text| {
            let shortcut = parse_shortcut(text)
                .with_context(|| format!("Invalid shortcut '{}'", text))?;
            Ok(ShortcutReport::new(text.as_str(), Some(&shortcut), &EnglishCatalog))
        })
        .collect()
}

/// Classify every slot in a slot file
///
/// Slots the file doesn't mention are reported as unassigned.
fn audit_slot_file(config_path: &Path) -> anyhow::Result<Vec<ShortcutReport>> {
    let slots = SlotAssignments::load(config_path)
        .with_context(|| format!("Failed to read slot file {}", config_path.display()))?;

    tracing::info!(assigned = slots.len(), "loaded slot file");

    Ok(ShortcutSlot::ALL
        .into_iter()
        .map(|slot| ShortcutReport::new(slot.name(), slots.shortcut(slot).as_ref(), &EnglishCatalog))
        .collect())
}

fn print_reports(reports: &[ShortcutReport], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    for report in reports {
        let label = report.label.bold();
        match (&report.shortcut, &report.symbols) {
            (Some(plain), Some(symbols)) if report.is_blocked() => {
                println!("{} {} {} ({})", "✗".red().bold(), label, symbols.yellow(), plain);
            }
            (Some(plain), Some(symbols)) => {
                println!("{} {} {} ({})", "✓".green(), label, symbols.cyan(), plain);
            }
            _ => println!("{} {} {}", "–".dimmed(), label, "unassigned".dimmed()),
        }

        if let Some(warning) = &report.warning {
            println!("    {}", warning.yellow());
        }
    }

    let blocked = count_blocked(reports);
    if blocked == 0 {
        println!("\n{} {}", "✓".green().bold(), "All shortcuts work in password fields".bold());
    } else {
        println!(
            "\n{} {} shortcut{} won't fire while a password field has focus",
            "⚠".yellow().bold(),
            blocked,
            if blocked == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
