use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    path: PathBuf,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, path: PathBuf) -> Self {
        Error {
            internal_error: error_impl,
            path,
        }
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { .. } => "SourceUnavailable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { reason } => {
                ErrorTip::Suggestion(format!("Could not open the file: {}", reason))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("source unavailable: {reason:?}")]
    SourceUnavailable { reason: String },
}
