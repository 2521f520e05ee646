use std::fmt::Display;

use branch_and_hole::catalog::HoleFileError;
use thiserror::Error;

pub(crate) type RunResult<T> = Result<T, RunError>;

#[derive(Debug, Error)]
pub(crate) enum RunError {
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
    #[error("the instance file {0} is not supported; expected a '*.mps' file")]
    InvalidInstanceFile(String),
    #[error("could not open log file {0}")]
    OpenLogFile(String),
    #[error("invalid hole file, more details: {0}")]
    HoleFile(#[from] HoleFileError),
}

impl RunError {
    pub(crate) fn invalid_instance(path: impl Display) -> Self {
        Self::InvalidInstanceFile(format!("{path}"))
    }

    pub(crate) fn open_log_file(path: impl Display) -> Self {
        Self::OpenLogFile(format!("{path}"))
    }
}
