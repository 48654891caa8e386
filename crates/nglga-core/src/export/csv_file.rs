// crates/nglga-core/src/export/csv_file.rs
use crate::error::Result;
use crate::model::LgaDb;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

const HEADER: [&str; 2] = ["State", "LGA"];

impl LgaDb {
    /// Write the dataset as CSV: a `State,LGA` header, then one row per
    /// `(state, lga)` pair. Any existing file is overwritten.
    ///
    /// Fields containing commas, quotes or newlines are quoted.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nglga_core::LgaDb;
    ///
    /// let db = LgaDb::load().unwrap();
    /// let path = db.export_to_csv("nigeria_states_and_lgas_export.csv").unwrap();
    /// println!("wrote {}", path.display());
    /// ```
    pub fn export_to_csv(&self, filename: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.resolve(filename);
        let file = File::create(&path)?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(HEADER)?;
        let mut rows = 0usize;
        for (state, lga) in self.pairs() {
            writer.write_record([state, lga])?;
            rows += 1;
        }
        writer.flush()?;

        info!(path = %path.display(), rows, "exported CSV");
        Ok(path)
    }
}
