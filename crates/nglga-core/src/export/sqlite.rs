// crates/nglga-core/src/export/sqlite.rs
use crate::error::Result;
use crate::model::LgaDb;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the table written by [`LgaDb::export_to_sqlite`].
pub const TABLE_NAME: &str = "states_lgas";

impl LgaDb {
    /// Write the dataset into the `states_lgas` table of a SQLite file,
    /// creating the file if needed.
    ///
    /// The table is dropped and recreated on every call, so repeated exports
    /// never accumulate rows. Drop, create and all inserts run in a single
    /// transaction: if any step fails nothing is committed. The connection
    /// is closed when this returns, on success and on error.
    pub fn export_to_sqlite(&self, db_name: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.resolve(db_name);
        let mut conn = Connection::open(&path)?;

        let tx = conn.transaction()?;
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS {TABLE_NAME};
             CREATE TABLE {TABLE_NAME} (state TEXT, lga TEXT);"
        ))?;

        let mut rows = 0usize;
        {
            let mut stmt =
                tx.prepare(&format!("INSERT INTO {TABLE_NAME} (state, lga) VALUES (?1, ?2)"))?;
            for (state, lga) in self.pairs() {
                stmt.execute(params![state, lga])?;
                rows += 1;
            }
        }
        tx.commit()?;

        info!(path = %path.display(), table = TABLE_NAME, rows, "exported SQLite");
        Ok(path)
    }
}
