use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for icongen operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(icongen::io))]
    Io { path: PathBuf, message: String },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(icongen::image))]
    Image { path: PathBuf, message: String },

    #[error("Repository sync failed for {path}: {message}")]
    #[diagnostic(code(icongen::sync))]
    Sync {
        path: PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    /// The SVG source could not be opened or parsed. Vector pipelines
    /// report this and move on to the next icon.
    #[error("Unable to parse {path}: {message}")]
    #[diagnostic(code(icongen::svg))]
    SvgSource { path: PathBuf, message: String },

    #[error("Invalid SVG image generated: {path}")]
    #[diagnostic(code(icongen::svg))]
    InvalidSvg { path: PathBuf },

    #[error("Unable to encode SVG: {message}")]
    #[diagnostic(code(icongen::svg))]
    Encode { message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(icongen::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl IconError {
    /// Whether a pipeline may skip the current icon and continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, IconError::SvgSource { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        IconError::Io {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
