// crates/nglga-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`LgaSearch::stats`](crate::LgaSearch::stats); the counts
/// reflect the in-memory dataset exactly as it was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub states: usize,
    pub lgas: usize,
}
