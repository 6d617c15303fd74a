use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while turning token files into a stylesheet.
#[derive(Error, Diagnostic, Debug)]
pub enum TokenError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tokens::io))]
    Io { path: PathBuf, message: String },

    #[error("Tokens directory not found: {path}")]
    #[diagnostic(
        code(tokens::missing_dir),
        help("pass --tokens <DIR> or create the directory")
    )]
    MissingDirectory { path: PathBuf },

    #[error("Parse error in {path}: {message}")]
    #[diagnostic(code(tokens::parse))]
    Parse {
        path: PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TokenError {
    pub(crate) fn io(path: impl Into<PathBuf>, context: &str, err: std::io::Error) -> Self {
        TokenError::Io {
            path: path.into(),
            message: format!("{context}: {err}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
