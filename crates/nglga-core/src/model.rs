// crates/nglga-core/src/model.rs

//! # Domain Model
//!
//! The dataset is a two-level hierarchy: an ordered list of [`State`]s, each
//! owning an ordered list of LGA names. Order is the key order of the source
//! document and is preserved for listing and for both exports.

use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A state (or the FCT) and its Local Government Areas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    /// LGA names exactly as the source spells them.
    pub lgas: Vec<String>,
}

impl State {
    pub fn new(name: impl Into<String>, lgas: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lgas,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn lgas(&self) -> &[String] {
        &self.lgas
    }
}

impl NameMatch for State {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// The reference database of Nigerian states and their LGAs.
///
/// Built once by the loader (see [`LgaDb::load_from_dir`]) and immutable
/// afterwards: there are no mutating methods, so a loaded value can be
/// shared freely between threads. Queries live on the
/// [`LgaSearch`](crate::LgaSearch) trait, exports in [`crate::export`].
#[derive(Clone, Debug)]
pub struct LgaDb {
    /// Directory export file names are resolved against.
    pub(crate) data_dir: PathBuf,
    /// States in source document order.
    pub(crate) states: Vec<State>,
}

impl LgaDb {
    pub(crate) fn from_parts(data_dir: PathBuf, states: Vec<State>) -> Self {
        Self { data_dir, states }
    }

    /// Directory the dataset was loaded from; exports are written here.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Every `(state, lga)` pair: states in source order, LGAs in stored
    /// order within each state. Both exporters write rows in this order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.states.iter().flat_map(|s| {
            s.lgas
                .iter()
                .map(move |lga| (s.name.as_str(), lga.as_str()))
        })
    }

    /// Resolve `name` against the data directory. An absolute `name`
    /// replaces the directory entirely.
    pub(crate) fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(name)
    }
}
