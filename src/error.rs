//! Error types returned by the extraction and writing APIs.
//!
//! Only resource writing and file I/O can fail. An empty scan, a malformed
//! call or a duplicate key are regular outcomes, not errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The target resource file must be seeded before it can be updated.
    #[error("{} doesn't exist", .path.display())]
    MissingTargetFile { path: PathBuf },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
