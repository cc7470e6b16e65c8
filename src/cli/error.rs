//! CLI-level errors (wraps outline errors)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::errors::OutlineError;
use crate::exitcode;

/// Top-level error type; everything the binary can print to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Outline(#[from] OutlineError),

    #[error("cannot read {path}: {source}")]
    Input { path: PathBuf, source: io::Error },

    #[error("cannot write {path}: {source}")]
    Output { path: PathBuf, source: io::Error },

    #[error("invalid language tag {0:?} (expected two lowercase letters)")]
    InvalidLang(String),
}

/// Result alias used throughout the CLI layer.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Process exit code this error should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Outline(OutlineError::UnderIndented { .. }) => exitcode::DATAERR,
            CliError::Outline(OutlineError::Config { .. }) => exitcode::CONFIG,
            CliError::Input { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                exitcode::NOINPUT
            }
            CliError::Input { .. } => exitcode::IOERR,
            CliError::Output { .. } => exitcode::CANTCREAT,
            CliError::InvalidLang(_) => exitcode::USAGE,
        }
    }
}
