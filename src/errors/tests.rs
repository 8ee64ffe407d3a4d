//! Unit tests for error handling.

use std::path::{Path, PathBuf};

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::SourceUnavailable {
            reason: "No such file or directory".to_string(),
        },
        PathBuf::from("input.txt"),
    );

    assert_eq!(error.get_error_name(), "SourceUnavailable");
}

#[test]
fn test_error_path() {
    let error = Error::new(
        ErrorImpl::SourceUnavailable {
            reason: "Permission denied".to_string(),
        },
        PathBuf::from("locked/input.txt"),
    );

    assert_eq!(error.get_path(), Path::new("locked/input.txt"));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::SourceUnavailable {
            reason: "No such file or directory".to_string(),
        },
        PathBuf::from("input.txt"),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => {
            assert_eq!(
                suggestion,
                "Could not open the file: No such file or directory"
            );
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_impl_message() {
    let error = ErrorImpl::SourceUnavailable {
        reason: "No such file or directory".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "source unavailable: \"No such file or directory\""
    );
}
