use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} '{key}' not found in the reference table")]
    NotFound { kind: &'static str, key: String },
    #[error("duplicate {kind} '{key}' in the reference table")]
    DuplicateEntry { kind: &'static str, key: String },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Comparison tolerance for derived dimensions, inches.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tolerance {
    pub linear: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { linear: 1.0e-9 }
    }
}
