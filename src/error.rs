//! Error types for the extraction pipeline
//!
//! Every failure is fatal for the run. Errors are split into the input side
//! (file missing, unreadable, or not valid text) and the output side
//! (destination cannot be created or written).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Cannot read input file {path:?}")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input file {path:?} is not valid UTF-8 (first invalid byte at offset {valid_up_to}, looks like {detected})")]
    Decode {
        path: PathBuf,
        valid_up_to: usize,
        detected: &'static str,
    },

    #[error("Cannot write output file {path:?}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Input {
            path: path.into(),
            source,
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// True for failures on the source side (missing, unreadable, undecodable).
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Decode { .. })
    }

    /// True when the destination could not be written.
    pub fn is_output(&self) -> bool {
        matches!(self, Self::Output { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
