use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for touchup operations
#[derive(Error, Diagnostic, Debug)]
pub enum TouchupError {
    #[error("IO error: {0}")]
    #[diagnostic(code(touchup::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(touchup::io))]
    Io { path: PathBuf, message: String },

    #[error("File not found: {path}")]
    #[diagnostic(code(touchup::not_found), help("Check the path and try again"))]
    FileNotFound { path: PathBuf },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(touchup::decode))]
    Decode { path: PathBuf, message: String },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(touchup::encode))]
    Encode { path: PathBuf, message: String },

    #[error("Out of bounds: {message}")]
    #[diagnostic(code(touchup::bounds))]
    Bounds {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid size: {message}")]
    #[diagnostic(code(touchup::size))]
    Size {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(touchup::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TouchupError>;
