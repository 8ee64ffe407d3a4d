#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf};

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::scanner::scanner::{scan_lines, TokenBuckets};

pub mod classify;
pub mod errors;
pub mod macros;
pub mod report;
pub mod scanner;

extern crate regex;

/// Reads the source file into owned lines.
///
/// The only recognized failure: the file cannot be opened or read, in
/// which case no partial result is produced.
pub fn read_source_lines(path: PathBuf) -> Result<Vec<String>, Error> {
    let contents = fs::read_to_string(&path).map_err(|err| {
        Error::new(
            ErrorImpl::SourceUnavailable {
                reason: err.to_string(),
            },
            path.clone(),
        )
    })?;

    Ok(contents.lines().map(String::from).collect())
}

/// Reads and scans one source file, yielding the category buckets.
pub fn scan_source(path: PathBuf) -> Result<TokenBuckets, Error> {
    let lines = read_source_lines(path)?;
    Ok(scan_lines(lines.iter().map(String::as_str)))
}

pub fn display_error(error: Error) {
    /*
        Error: name (tip)
        -> input.txt
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", error.get_path().to_string_lossy());
}
