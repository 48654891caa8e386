//! nglga — command-line interface for nglga-core
//!
//! Loads `nigeria_states_and_lgas.json` from `--data-dir` (default `data`)
//! or from an explicit `--input` file, then runs one subcommand:
//!
//! - `stats`             counts of states and LGAs
//! - `states`            every state, one per line
//! - `lgas <STATE>`      LGAs of a state
//! - `find <LGA>`        the state owning an LGA
//! - `export <FORMAT>`   write CSV or SQLite next to the dataset
//!
//! Lookups print to stdout; logs go to stderr.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use nglga_core::{ExportFormat, LgaDb, LgaSearch};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let db = match &args.input {
        Some(path) => LgaDb::load_from_path(path)
            .with_context(|| format!("failed to load dataset {}", path.display()))?,
        None => LgaDb::load_from_dir(&args.data_dir).with_context(|| {
            format!("failed to load dataset from {}", args.data_dir.display())
        })?,
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  States (incl. FCT): {}", stats.states);
            println!("  LGAs: {}", stats.lgas);
        }

        Commands::States => {
            for s in db.states() {
                println!("{s}");
            }
        }

        Commands::Lgas { state } => {
            let lgas = db.lgas(&state);
            if lgas.is_empty() {
                eprintln!("No LGAs found for state: {state}");
            } else {
                for lga in lgas {
                    println!("{lga}");
                }
            }
        }

        Commands::Find { lga } => match db.find_state_by_lga(&lga) {
            Some(state) => println!("{state}"),
            None => eprintln!("No state found for LGA: {lga}"),
        },

        Commands::Export { format, output } => {
            let format: ExportFormat = format.into();
            let path = db
                .export(format, output.as_deref())
                .with_context(|| format!("{format} export failed"))?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise the level follows the `-v` count.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
