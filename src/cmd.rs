//! Command implementations for the CLI interface.
//!
//! Each handler resolves its settings into a [`ReportConfig`], reads the log from disk
//! and hands the text to the parser and report generator.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::{Args, Subcommand};
use clap_complete::{generate, Shell};
use tracing::{debug, info, warn};

use crate::parser::LogParser;
use crate::report::generate_report;
use crate::sprint::Sprint;

/// Environment variable used when no developer name is given.
pub const NAME_ENV: &str = "SPREP_NAME";

/// How far back the default cutoff reaches before snapping to a Monday.
const DEFAULT_LOOKBACK_DAYS: i64 = 20;

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the log and print the per-sprint percentage report.
    Report {
        #[command(flatten)]
        source: SourceArgs,
        /// Developer name written on every row. Falls back to $SPREP_NAME.
        name: Option<String>,
        /// Write the report to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Also print the autocompleted sprints as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Parse the log and print its sprints as JSON, without validating them.
    Parse {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where the log comes from and which part of it to keep.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the work log.
    pub file: PathBuf,
    /// Ignore days before this date (YYYY-MM-DD). Defaults to the Monday on or after 20 days ago.
    #[arg(long)]
    pub since: Option<NaiveDate>,
    /// Only keep the last N sprints.
    #[arg(long)]
    pub last: Option<usize>,
}

/// Settings for one run, resolved from arguments and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub file: PathBuf,
    pub cutoff: NaiveDate,
    pub last: Option<usize>,
    pub date_format: String,
}

impl ReportConfig {
    pub fn resolve(source: SourceArgs, date_format: &str, today: NaiveDate) -> Self {
        ReportConfig {
            file: source.file,
            cutoff: source.since.unwrap_or_else(|| default_cutoff(today)),
            last: source.last,
            date_format: date_format.to_string(),
        }
    }
}

/// First Monday on or after `today` minus the lookback window.
pub fn default_cutoff(today: NaiveDate) -> NaiveDate {
    let start = today - Duration::days(DEFAULT_LOOKBACK_DAYS);
    let days_to_monday = (7 - start.weekday().num_days_from_monday()) % 7;
    start + Duration::days(days_to_monday as i64)
}

/// Pick the developer name from the argument or the environment.
pub fn resolve_name(name: Option<String>) -> Result<String> {
    name.or_else(|| std::env::var(NAME_ENV).ok())
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| anyhow!("Missing developer name: pass it after the log file or set {}", NAME_ENV))
}

/// Read and parse the log, keeping only the last sprints when asked to.
pub fn load_sprints(config: &ReportConfig) -> Result<Vec<Sprint>> {
    let notes = fs::read_to_string(&config.file)
        .with_context(|| format!("Failed to read work log {}", config.file.display()))?;
    info!(file = %config.file.display(), bytes = notes.len(), "read work log");
    debug!(cutoff = %config.cutoff, date_format = %config.date_format, "parsing");

    let mut sprints = LogParser::new(config.date_format.as_str())
        .parse(&notes, config.cutoff)
        .with_context(|| format!("Failed to parse {}", config.file.display()))?;

    if let Some(last) = config.last {
        let skip = sprints.len().saturating_sub(last);
        sprints = sprints.split_off(skip);
    }

    if sprints.is_empty() {
        warn!(cutoff = %config.cutoff, "no sprints found on or after the cutoff date");
    } else {
        info!(count = sprints.len(), "sprints found");
    }
    Ok(sprints)
}

/// Generate the report and write it to `output`, or stdout.
pub fn cmd_report(config: &ReportConfig, name: Option<String>, output: Option<PathBuf>, json: bool) -> Result<()> {
    let name = resolve_name(name)?;
    let mut sprints = load_sprints(config)?;
    let report = generate_report(&mut sprints, &name).context("Failed to generate report")?;

    if json {
        println!("{}", sprints_json(&sprints)?);
    }

    match output {
        Some(path) => {
            fs::write(&path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
            println!("Report for {} sprint(s) written to {}", sprints.len(), path.display());
        }
        None => print!("{}", report),
    }
    Ok(())
}

/// Print the parsed sprints as JSON.
pub fn cmd_parse(config: &ReportConfig) -> Result<()> {
    let sprints = load_sprints(config)?;
    println!("{}", sprints_json(&sprints)?);
    Ok(())
}

/// Pretty JSON view of the sprints, as printed by `parse` and `report --json`.
pub fn sprints_json(sprints: &[Sprint]) -> Result<String> {
    serde_json::to_string_pretty(sprints).context("Failed to serialize sprints")
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
