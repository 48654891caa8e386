// crates/nglga-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file lookup, optional gzip) and delegates the
//! payload to the JSON parser. Loading is all-or-nothing: a value is only
//! returned once every state has been parsed.

use crate::error::Result;
use crate::model::LgaDb;
use crate::traits::LgaSearch;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

mod common_io;
mod json;

pub const DATASET_FILENAME: &str = "nigeria_states_and_lgas.json";

impl LgaDb {
    /// Default data directory, relative to the working directory.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DATASET_FILENAME
    }

    /// The `data/` directory shipped inside this crate.
    pub fn bundled_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Load `nigeria_states_and_lgas.json` from [`LgaDb::default_data_dir`].
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Self::default_data_dir())
    }

    /// Load `nigeria_states_and_lgas.json` from `dir`.
    ///
    /// Exports from the returned database are written into `dir` as well.
    ///
    /// # Errors
    ///
    /// [`LgaError::NotFound`](crate::LgaError::NotFound) when the file is
    /// missing, [`LgaError::Malformed`](crate::LgaError::Malformed) when it is
    /// not an object of state name to array of LGA names.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Self::load_file(&dir.join(DATASET_FILENAME), dir.to_path_buf())
    }

    /// Load an explicit dataset file. Its parent directory becomes the
    /// export directory. Files ending in `.gz` are decompressed when the
    /// `compact` feature is on.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::load_file(path, dir)
    }

    /// Parse a dataset from any reader.
    pub fn from_reader<R: Read>(reader: R, data_dir: impl Into<PathBuf>) -> Result<Self> {
        let states = json::parse_states(reader)?;
        Ok(Self::from_parts(data_dir.into(), states))
    }

    /// Parse a dataset held in memory.
    pub fn from_json_str(json: &str, data_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::from_reader(json.as_bytes(), data_dir)
    }

    fn load_file(path: &Path, data_dir: PathBuf) -> Result<Self> {
        debug!(path = %path.display(), "opening dataset");
        let reader = common_io::open_stream(path)?;
        let db = Self::from_reader(reader, data_dir)?;

        let stats = db.stats();
        debug!(
            path = %path.display(),
            states = stats.states,
            lgas = stats.lgas,
            "dataset loaded"
        );
        Ok(db)
    }
}
