use crate::classify::classify::{
    is_constant, is_identifier, is_operator, is_parenthesis, is_punctuation, Category,
};

use super::scanner::TokenBuckets;

/// Breaks a glued token into identifiable components.
///
/// Runs of alphanumeric-or-underscore characters are tested as
/// identifier then constant; every other character is tested on its
/// own as operator, punctuation, then bracket. Characters and runs
/// matching nothing are dropped. Multi-character operators glued
/// inside a token come out as their single characters, since only one
/// offending character is tested at a time.
pub fn decompose(token: &str, buckets: &mut TokenBuckets) {
    let mut run = String::new();

    for c in token.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            run.push(c);
            continue;
        }

        flush_run(&mut run, buckets);

        let symbol = c.to_string();
        if is_operator(&symbol) {
            buckets.push(Category::Operator, symbol);
        } else if is_punctuation(&symbol) {
            buckets.push(Category::Punctuation, symbol);
        } else if is_parenthesis(&symbol) {
            buckets.push(Category::Parenthesis, symbol);
        }
    }

    flush_run(&mut run, buckets);
}

fn flush_run(run: &mut String, buckets: &mut TokenBuckets) {
    if run.is_empty() {
        return;
    }

    if is_identifier(run) {
        buckets.push(Category::Identifier, std::mem::take(run));
    } else if is_constant(run) {
        buckets.push(Category::Constant, std::mem::take(run));
    } else {
        run.clear();
    }
}
