mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use runfold_core::OutputFormat;
use tracing_subscriber::EnvFilter;

use commands::{CollapseOverrides, InputSource};

#[derive(Parser)]
#[command(name = "runfold", version, about = "Collapse runs of repeated integers")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replace each run of equal adjacent integers with one occurrence
    Collapse {
        /// Integers, separated by spaces or commas. Reads --file or stdin when empty
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Read integers from this file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format: lines, inline or json
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Print run lengths alongside values
        #[arg(short, long, overrides_with = "no_count")]
        count: bool,

        /// Print values only, even if the config enables counts
        #[arg(long, overrides_with = "count")]
        no_count: bool,
    },
    /// Show the effective configuration and where it came from
    Config,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Collapse {
            values,
            file,
            format,
            count,
            no_count,
        } => {
            let count = match (count, no_count) {
                (true, _) => Some(true),
                (false, true) => Some(false),
                (false, false) => None,
            };
            commands::cmd_collapse(
                InputSource::pick(values, file),
                CollapseOverrides { format, count },
            )
        }
        Command::Config => commands::cmd_config(),
    };

    if let Err(e) = result {
        eprintln!("runfold: {e:#}");
        std::process::exit(1);
    }
}

/// `RUNFOLD_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("RUNFOLD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
