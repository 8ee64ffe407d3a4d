use crate::classify::classify::{classify, Category};

use super::{comments::CommentFilter, fallback::decompose};

/// Per-category token listings produced by one scan.
///
/// Tokens appear in first-seen order within each bucket and duplicates
/// are kept, so the listings preserve frequency rather than acting as
/// a symbol table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuckets {
    pub keywords: Vec<String>,
    pub identifiers: Vec<String>,
    pub constants: Vec<String>,
    pub operators: Vec<String>,
    pub punctuations: Vec<String>,
    pub parenthesis: Vec<String>,
    pub string_literals: Vec<String>,
    pub preprocessors: Vec<String>,
}

impl TokenBuckets {
    pub fn new() -> TokenBuckets {
        TokenBuckets::default()
    }

    pub fn push(&mut self, category: Category, token: String) {
        match category {
            Category::Keyword => self.keywords.push(token),
            Category::Identifier => self.identifiers.push(token),
            Category::Constant => self.constants.push(token),
            Category::Operator => self.operators.push(token),
            Category::Punctuation => self.punctuations.push(token),
            Category::Parenthesis => self.parenthesis.push(token),
            Category::StringLiteral => self.string_literals.push(token),
            Category::Preprocessor => self.preprocessors.push(token),
        }
    }

    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Keyword => &self.keywords,
            Category::Identifier => &self.identifiers,
            Category::Constant => &self.constants,
            Category::Operator => &self.operators,
            Category::Punctuation => &self.punctuations,
            Category::Parenthesis => &self.parenthesis,
            Category::StringLiteral => &self.string_literals,
            Category::Preprocessor => &self.preprocessors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
            && self.identifiers.is_empty()
            && self.constants.is_empty()
            && self.operators.is_empty()
            && self.punctuations.is_empty()
            && self.parenthesis.is_empty()
            && self.string_literals.is_empty()
            && self.preprocessors.is_empty()
    }
}

/// Line-oriented scan driver.
///
/// Owns the comment state and the accumulated buckets for the duration
/// of one scan; construct a fresh instance per scan.
pub struct Scanner {
    buckets: TokenBuckets,
    comments: CommentFilter,
}

impl Scanner {
    pub fn new() -> Scanner {
        Scanner {
            buckets: TokenBuckets::new(),
            comments: CommentFilter::new(),
        }
    }

    pub fn scan_line(&mut self, line: &str) {
        if self.comments.suppress(line) {
            return;
        }

        for token in line.split_whitespace() {
            match classify(token) {
                Some(category) => self.buckets.push(category, token.to_string()),
                None => decompose(token, &mut self.buckets),
            }
        }
    }

    pub fn finish(self) -> TokenBuckets {
        self.buckets
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new()
    }
}

pub fn scan_lines<'a, I>(lines: I) -> TokenBuckets
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = Scanner::new();

    for line in lines {
        scanner.scan_line(line);
    }

    scanner.finish()
}
