//! Error handling for clean-folder.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while validating, creating or prompting.
///
/// Failures of the "reveal in file manager" action are not represented here:
/// they are swallowed by the revealer itself.
#[derive(Error, Debug)]
pub enum Error {
    /// Project name is empty or contains reserved characters.
    #[error("{0}")]
    ValidationError(String),

    /// The host refused to create a directory.
    #[error("Permission denied: cannot create '{}'.", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The host rejected the path, or a non-directory entry occupies it.
    #[error("Invalid path '{}': {}.", path.display(), source)]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other filesystem failure.
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Terminal interaction failed.
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

impl Error {
    /// Classifies a failed directory creation at `path`.
    pub fn from_create_dir(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => {
                Error::PermissionDenied { path: path.to_path_buf(), source }
            }
            io::ErrorKind::AlreadyExists
            | io::ErrorKind::NotADirectory
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::InvalidFilename => {
                Error::InvalidPath { path: path.to_path_buf(), source }
            }
            _ => Error::IoError(source),
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::PromptError(err.to_string())
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
