//! Error types for start-up and I/O failures.
//!
//! Rejected column names are not errors; the session reports them inline and
//! keeps going.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid duration {text:?}: {reason}")]
    InvalidDuration { text: String, reason: &'static str },

    #[error("failed to read seed file {path}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn duration(text: &str, reason: &'static str) -> Self {
        Self::InvalidDuration {
            text: text.to_string(),
            reason,
        }
    }
}
