use std::io::{self, Write};

use crate::classify::classify::Category;
use crate::scanner::scanner::TokenBuckets;

/// The categories included in the printed report, in print order.
///
/// String literals and preprocessor directives are accumulated during
/// the scan but stay out of the report; callers wanting them read the
/// buckets directly.
pub const REPORTED_CATEGORIES: [Category; 6] = [
    Category::Keyword,
    Category::Identifier,
    Category::Constant,
    Category::Operator,
    Category::Punctuation,
    Category::Parenthesis,
];

/// Writes one `<Label>: (<count>) -> <tok>, <tok>, ` line per reported
/// category.
pub fn write_report<W: Write>(out: &mut W, buckets: &TokenBuckets) -> io::Result<()> {
    for category in REPORTED_CATEGORIES {
        let tokens = buckets.bucket(category);

        write!(out, "{}: ({}) -> ", category, tokens.len())?;
        for token in tokens {
            write!(out, "{}, ", token)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
