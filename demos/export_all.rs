//! Export example for nglga-rs
//!
//! Writes the bundled dataset to CSV and SQLite in a directory given on the
//! command line (default: the current directory), with error handling for
//! a missing dataset.

use nglga_rs::prelude::*;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("=== nglga-rs Export Example ===\n");

    // Example 1: A missing dataset is an error, not an empty database
    println!("--- Example 1: Loading from a directory without a dataset ---");
    match LgaDb::load_from_dir("/nonexistent") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(LgaError::NotFound(msg)) => println!("  ✗ {msg}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: Export both formats
    println!("--- Example 2: Export CSV and SQLite ---");
    // Export names resolve against the data dir, so make the target absolute.
    let out_dir = std::env::current_dir()?.join(
        std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .unwrap_or_default(),
    );
    let db = LgaDb::load_from_dir(LgaDb::bundled_data_dir())?;

    let csv = db.export_to_csv(out_dir.join(DEFAULT_CSV_FILENAME))?;
    println!("  ✓ CSV:    {}", csv.display());

    let sqlite = db.export_to_sqlite(out_dir.join(DEFAULT_SQLITE_FILENAME))?;
    println!("  ✓ SQLite: {} (table {TABLE_NAME})", sqlite.display());

    Ok(())
}
