use clap::Parser;
use tracing::Level;

use sprint_report::cli::Cli;
use sprint_report::cmd::*;

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Report { source, name, output, json } => {
            let config = ReportConfig::resolve(source, &cli.date_format, today());
            cmd_report(&config, name, output, json)
        }

        Commands::Parse { source } => {
            let config = ReportConfig::resolve(source, &cli.date_format, today());
            cmd_parse(&config)
        }

        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!();
        eprintln!("ERROR >>>>>>>>>>>");
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
