// crates/nglga-core/src/loader/common_io.rs
use crate::error::{LgaError, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file, buffers it, and unwraps gzip when the file name
/// ends in `.gz`. Returns a generic reader so callers don't care about the
/// compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            LgaError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        }
        _ => LgaError::Io(e),
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(all(test, feature = "compact"))]
mod tests {
    use super::*;

    #[test]
    fn detects_gzip_by_extension() {
        assert!(is_gzip(Path::new("data/nigeria_states_and_lgas.json.gz")));
        assert!(is_gzip(Path::new("x.GZ")));
        assert!(!is_gzip(Path::new("data/nigeria_states_and_lgas.json")));
        assert!(!is_gzip(Path::new("gz")));
    }
}
