use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatError {
    #[error("ccat: {0}: No such file or directory")]
    NotFound(String),

    #[error("You don't have permission to read this file")]
    PermissionDenied,

    #[error("Unexpected IO error : {0}")]
    Io(#[from] io::Error),

    #[error("ccat: input is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

impl CatError {
    /// Classifies an I/O failure raised while opening or reading `filename`.
    pub fn from_io(err: io::Error, filename: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => CatError::NotFound(filename.to_string()),
            io::ErrorKind::PermissionDenied => CatError::PermissionDenied,
            _ => CatError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatError>;
