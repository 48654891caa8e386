// crates/nglga-core/src/export/mod.rs

//! # Exporters
//!
//! Materialize the in-memory dataset into interchange formats:
//!
//! - [`LgaDb::export_to_csv`] writes a `State,LGA` table.
//! - [`LgaDb::export_to_sqlite`] (re)creates the `states_lgas` table.
//!
//! Both resolve the target name against [`LgaDb::data_dir`] and return the
//! resolved path. Rows come from [`LgaDb::pairs`], so the two outputs always
//! agree on content and order. Exports only read the database.

use crate::error::Result;
use crate::model::LgaDb;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

mod csv_file;
mod sqlite;

pub use sqlite::TABLE_NAME;

pub const DEFAULT_CSV_FILENAME: &str = "nigeria_states_and_lgas_export.csv";
pub const DEFAULT_SQLITE_FILENAME: &str = "nigeria_states_lgas.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Sqlite,
}

impl ExportFormat {
    pub fn default_filename(self) -> &'static str {
        match self {
            ExportFormat::Csv => DEFAULT_CSV_FILENAME,
            ExportFormat::Sqlite => DEFAULT_SQLITE_FILENAME,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Sqlite => f.write_str("sqlite"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "sqlite" | "db" => Ok(ExportFormat::Sqlite),
            other => Err(format!("unknown export format: {other} (expected csv or sqlite)")),
        }
    }
}

impl LgaDb {
    /// Export in `format`, to `filename` or the format's default file name.
    pub fn export(&self, format: ExportFormat, filename: Option<&Path>) -> Result<PathBuf> {
        let name = filename.unwrap_or_else(|| Path::new(format.default_filename()));
        match format {
            ExportFormat::Csv => self.export_to_csv(name),
            ExportFormat::Sqlite => self.export_to_sqlite(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_names() {
        assert_eq!("csv".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("sqlite".parse::<ExportFormat>(), Ok(ExportFormat::Sqlite));
        assert_eq!("db".parse::<ExportFormat>(), Ok(ExportFormat::Sqlite));
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for f in [ExportFormat::Csv, ExportFormat::Sqlite] {
            assert_eq!(f.to_string().parse::<ExportFormat>(), Ok(f));
        }
    }
}
