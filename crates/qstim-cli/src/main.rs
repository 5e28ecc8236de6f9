//! qstim Command-Line Interface
//!
//! Converts directories or lists of OpenQASM 2 files into Stim circuits.
//!
//! ```text
//! qstim convert -d circuits/
//! qstim convert -i bell.qasm -i ghz.qasm --out-dir stim/ --line-ending crlf
//! qstim gates
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use qstim_qasm2::LineEnding;

mod commands;
mod config;

use commands::convert::ConvertArgs;
use commands::{convert, gates, version};

/// qstim - translate Clifford OpenQASM 2 circuits to Stim
#[derive(Parser)]
#[command(name = "qstim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert QASM2 files to Stim
    Convert {
        /// Directory containing .qasm files
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Input file (repeatable)
        #[arg(short, long = "input")]
        inputs: Vec<PathBuf>,

        /// Output directory (defaults to next to each input)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Line ending for Stim output (lf, crlf)
        #[arg(long)]
        line_ending: Option<LineEnding>,

        /// Configuration file (YAML)
        #[arg(short, long, env = "QSTIM_CONFIG")]
        config: Option<PathBuf>,

        /// Translate without writing output files
        #[arg(long)]
        dry_run: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List the supported gates
    Gates,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Convert {
            dir,
            inputs,
            out_dir,
            line_ending,
            config,
            dry_run,
            format,
        } => convert::execute(&ConvertArgs {
            dir,
            inputs,
            out_dir,
            line_ending,
            config,
            dry_run,
            format,
        }),

        Commands::Gates => {
            gates::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
