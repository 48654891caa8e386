// crates/nglga-core/src/loader/json.rs

//! Parser for the source document: a JSON object mapping each state name to
//! an array of LGA names.
//!
//! ```json
//! { "Abia": ["Aba North", "Aba South"], "FCT": ["Abaji", "Bwari"] }
//! ```

use crate::error::{LgaError, Result};
use crate::model::State;
use serde_json::{Map, Value};
use std::io::Read;

/// Parse the whole document. Key order is preserved (`preserve_order`); a
/// key repeated in the document keeps its first position and its last value.
pub(crate) fn parse_states<R: Read>(reader: R) -> Result<Vec<State>> {
    let raw: Map<String, Value> = serde_json::from_reader(reader).map_err(classify)?;
    raw.into_iter()
        .map(|(name, value)| {
            let lgas: Vec<String> = serde_json::from_value(value).map_err(LgaError::Malformed)?;
            Ok(State::new(name, lgas))
        })
        .collect()
}

/// Read failures stay I/O errors; everything else is a shape problem.
fn classify(e: serde_json::Error) -> LgaError {
    if e.is_io() {
        LgaError::Io(e.into())
    } else {
        LgaError::Malformed(e)
    }
}
