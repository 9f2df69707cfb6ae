//! Loading a purchase request from a JSON document.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tickets_domain::PurchaseRequest;

#[derive(Error, Debug)]
pub enum RequestFileError {
    #[error("Could not read request file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Request file {} is not a valid purchase request: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a [`PurchaseRequest`] from `path`.
///
/// `null` account ids, line lists and lines are accepted here so that
/// validation can report them.
pub fn load_request_file(path: &Path) -> Result<PurchaseRequest, RequestFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| RequestFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| RequestFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
