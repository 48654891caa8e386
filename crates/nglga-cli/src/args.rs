use clap::{Parser, Subcommand, ValueEnum};
use nglga_core::ExportFormat;
use std::path::PathBuf;

/// CLI arguments for nglga
#[derive(Debug, Parser)]
#[command(
    name = "nglga",
    version,
    about = "Query and export Nigerian states and their Local Government Areas"
)]
pub struct CliArgs {
    /// Directory holding nigeria_states_and_lgas.json; exports are written here too
    #[arg(short = 'd', long = "data-dir", global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Explicit dataset file (.json or .json.gz); overrides --data-dir
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List all states (and the FCT) in dataset order
    States,

    /// List the LGAs of a state
    Lgas {
        /// State name (case-insensitive, e.g. "akwa ibom")
        state: String,
    },

    /// Find the state that contains an LGA
    Find {
        /// LGA name (case-insensitive, e.g. "eti-osa")
        lga: String,
    },

    /// Export the dataset to CSV or SQLite
    Export {
        #[arg(value_enum)]
        format: FormatArg,

        /// Output file name, resolved against the data directory
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Sqlite,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Sqlite => ExportFormat::Sqlite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lookup_commands() {
        let args = CliArgs::try_parse_from(["nglga", "lgas", "akwa ibom"]).unwrap();
        assert_eq!(args.data_dir, PathBuf::from("data"));
        assert!(matches!(args.command, Commands::Lgas { state } if state == "akwa ibom"));

        let args = CliArgs::try_parse_from(["nglga", "find", "eti-osa", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Commands::Find { lga } if lga == "eti-osa"));
    }

    #[test]
    fn parses_export_with_global_options() {
        let args = CliArgs::try_parse_from([
            "nglga", "--data-dir", "/tmp/ng", "export", "sqlite", "-o", "x.db",
        ])
        .unwrap();
        assert_eq!(args.data_dir, PathBuf::from("/tmp/ng"));
        match args.command {
            Commands::Export { format, output } => {
                assert_eq!(ExportFormat::from(format), ExportFormat::Sqlite);
                assert_eq!(output, Some(PathBuf::from("x.db")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(CliArgs::try_parse_from(["nglga", "export", "xlsx"]).is_err());
    }
}
