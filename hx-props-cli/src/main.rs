//! hx-props CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use hx_props::observability::{self, LogFormat, ObservabilityConfig};
use hx_props_cli::{RenderCommand, ResolveCommand};

#[derive(Parser)]
#[command(name = "hx-props")]
#[command(version)]
#[command(about = "Render declarative props as htmx attributes", long_about = None)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON props bag as attributes
    Render {
        /// Props file (JSON object), `-` or omitted for stdin
        input: Option<PathBuf>,
        /// Configuration file (defaults to ./hx-props.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print a `name="value"` string instead of a JSON map
        #[arg(short, long)]
        stringify: bool,
        /// Emit values verbatim, without HTML escaping
        #[arg(long)]
        no_escape: bool,
        /// Always print JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the HTTP method and route a props bag resolves to
    Resolve {
        /// Props file (JSON object), `-` or omitted for stdin
        input: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Render {
            input,
            config,
            stringify,
            no_escape,
            json,
        } => RenderCommand {
            input,
            config,
            stringify,
            no_escape,
            json,
        }
        .execute(io::stdin().lock()),
        Commands::Resolve { input, json } => {
            ResolveCommand { input, json }.execute(io::stdin().lock())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = ObservabilityConfig::default()
        .with_filter("warn")
        .with_format(LogFormat::Compact);
    if cli.verbose {
        logging = logging.with_forced_filter("hx_props=trace,hx_props_cli=trace");
    }
    if let Err(err) = observability::init_with(&logging) {
        eprintln!("{} {err}", style("warning:").yellow().bold());
    }

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
