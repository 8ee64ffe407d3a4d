//! Token classification module for the scanner.
//!
//! This module decides the lexical category of a whitespace-delimited
//! token. It handles:
//!
//! - Recognition of keywords, identifiers, constants, and string literals
//! - Recognition of operators, punctuation, and brackets
//! - Detection of preprocessor directives
//! - Priority ordering between overlapping categories

pub mod classify;
pub mod tables;
