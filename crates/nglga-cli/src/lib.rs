//! nglga-cli
//! =========
//!
//! Command-line interface for the `nglga-core` database of Nigerian states
//! and Local Government Areas.
//!
//! This crate primarily provides a binary (`nglga`). The small library
//! target exists so that docs.rs renders this overview.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! nglga --help
//! nglga stats
//! nglga states
//! nglga lgas "akwa ibom"
//! nglga find eti-osa
//! nglga export csv
//! nglga --data-dir ./data export sqlite --output lgas.db
//! ```
//!
//! For programmatic access use the [`nglga-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
