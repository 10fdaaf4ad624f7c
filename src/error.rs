use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read counter file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("counter file '{}' does not hold a number: {content:?}", .path.display())]
    Parse { path: PathBuf, content: String },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Why a measure spec was left out at startup. Not fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    MissingFile { spec: String, path: PathBuf },
    BadMultiplier { spec: String, value: String },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::MissingFile { spec, path } => write!(
                f,
                "Wrong measure '{}': file '{}' does not exist",
                spec,
                path.display()
            ),
            Rejection::BadMultiplier { spec, value } => write!(
                f,
                "Wrong measure '{}': multiplier '{}' is not a non-negative number",
                spec, value
            ),
        }
    }
}
