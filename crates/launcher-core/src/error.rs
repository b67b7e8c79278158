//! Error types for launching tools

use std::path::PathBuf;
use thiserror::Error;

/// Why a launch did not produce a usable exit status
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The interpreter could not be started at all
    #[error("failed to start '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The child ran but exited without a status code (e.g. killed by a signal)
    #[error("'{}' exited without a status code", .program.display())]
    NoStatus { program: PathBuf },

    /// Waiting on the child failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LaunchError {
    /// Create a spawn error for the given program
    pub fn spawn(program: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LaunchError::Spawn {
            program: program.into(),
            source,
        }
    }
}
