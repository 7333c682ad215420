// error.rs - Failures surfaced to the entry point

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    /// Negative generation count or grid dimension.
    #[error("{0}")]
    Configuration(String),

    /// Input file could not be opened or read.
    #[error("error opening {}, probably bad file name or insufficient privilege?", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
