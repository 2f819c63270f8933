use clap::Parser;

use crate::cmd::Commands;
use crate::parser::DEFAULT_DATE_FORMAT;

/// Sprint time allocation reports from a daily work log.
/// Reads a plain text log and prints one tab separated row per task and sprint.
#[derive(Parser)]
#[command(name = "sprep", version, about = "Sprint time allocation reports from a daily work log")]
pub struct Cli {
    /// chrono format of the date that starts each day line.
    #[arg(long, global = true, default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// More logging on stderr: -v for debug, -vv for trace.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}
