//! Application-level failures of the command-line front-end.
//!
//! Lexical and syntax problems in the Java input are not errors here; they
//! are reported as [`Diagnostic`](crate::parser::token::Diagnostic) data
//! inside a [`TranslationReport`](crate::pipeline::TranslationReport).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("invalid log filter '{filter}': {message}")]
    LogFilter { filter: String, message: String },

    /// The requested output needs generated code, but the input had errors.
    #[error("translation unavailable: {count} error(s) in the source")]
    TranslationFailed { count: usize },
}

pub type AppResult<T> = Result<T, AppError>;
