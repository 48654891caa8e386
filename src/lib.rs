//! nglga-rs: umbrella crate over [`nglga_core`].
//!
//! Re-exports the core API and a prelude for the demo programs.

pub use nglga_core::*;

/// Common types and traits in one import.
pub mod prelude {
    pub use nglga_core::export::{DEFAULT_CSV_FILENAME, DEFAULT_SQLITE_FILENAME, TABLE_NAME};
    pub use nglga_core::{
        DbStats, ExportFormat, LgaDb, LgaError, LgaSearch, NameMatch, Result, State,
    };
}
