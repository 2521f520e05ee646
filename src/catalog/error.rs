use thiserror::Error;

/// The ways in which reading a hole specification file can fail.
///
/// Any failure is fatal to the read: no partial catalog is ever returned.
#[derive(Debug, Error)]
pub enum HoleFileError {
    #[error("failed to read hole file")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("expected {expected}, got '{token}'")]
    InvalidToken {
        expected: &'static str,
        token: Box<str>,
    },
}
