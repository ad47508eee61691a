//! # Error reporting for reading of linear program files
use std::io;

use thiserror::Error;

/// An `Import` error is created when an error was encountered during IO or parsing.
#[derive(Debug, Error)]
pub enum Import {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(io::Error),
    /// Contents of the file could not be parsed into a problem description.
    #[error("could not parse problem file: {0}")]
    Parse(serde_json::Error),
    /// The dimensions of the problem described by the file don't agree.
    #[error(transparent)]
    LinearProgram(crate::error::Error),
}
