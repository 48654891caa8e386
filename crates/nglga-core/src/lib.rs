// crates/nglga-core/src/lib.rs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # nglga-core
//!
//! Reference data for the 36 states of Nigeria plus the Federal Capital
//! Territory, each with its Local Government Areas (LGAs).
//!
//! Load the dataset once, then list states, list a state's LGAs, find the
//! state that owns an LGA, or export everything to CSV or SQLite.
//!
//! ```no_run
//! use nglga_core::{LgaDb, LgaSearch};
//!
//! let db = LgaDb::load_from_dir("data")?;
//! println!("{} states", db.states().len());
//! println!("{:?}", db.lgas("lagos"));
//! println!("{:?}", db.find_state_by_lga("eti-osa")); // Some("Lagos")
//! db.export_to_csv("nigeria_states_and_lgas_export.csv")?;
//! db.export_to_sqlite("nigeria_states_lgas.db")?;
//! # Ok::<(), nglga_core::LgaError>(())
//! ```

pub mod common;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{LgaError, Result};
pub use crate::export::ExportFormat;
pub use crate::model::{LgaDb, State};
// The search trait must be in scope for the query methods
pub use crate::traits::{LgaSearch, NameMatch};
