use std::fmt::Display;

use super::tables::{
    CONSTANT, IDENTIFIER, KEYWORDS, OPERATORS, PARENTHESIS, PUNCTUATIONS, STRING_LITERAL,
};

/// The lexical categories a token can belong to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Keyword,
    Identifier,
    Constant,
    Operator,
    Punctuation,
    Parenthesis,
    StringLiteral,
    Preprocessor,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Keyword => "Keywords",
            Category::Identifier => "Identifiers",
            Category::Constant => "Constants",
            Category::Operator => "Operators",
            Category::Punctuation => "Punctuations",
            Category::Parenthesis => "Parenthesis",
            Category::StringLiteral => "StringLiterals",
            Category::Preprocessor => "Preprocessors",
        };
        write!(f, "{}", label)
    }
}

pub fn is_preprocessor(word: &str) -> bool {
    word.starts_with('#')
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

pub fn is_string_literal(word: &str) -> bool {
    STRING_LITERAL.is_match(word)
}

pub fn is_identifier(word: &str) -> bool {
    IDENTIFIER.is_match(word)
}

pub fn is_constant(word: &str) -> bool {
    CONSTANT.is_match(word)
}

pub fn is_operator(word: &str) -> bool {
    OPERATORS.contains(word)
}

pub fn is_punctuation(word: &str) -> bool {
    PUNCTUATIONS.contains(word)
}

pub fn is_parenthesis(word: &str) -> bool {
    PARENTHESIS.contains(word)
}

/// Classifies a whole token, first matching rule wins.
///
/// Returns `None` when no rule matches; the caller decides whether to
/// drop the token or hand it to the fallback decomposer.
pub fn classify(word: &str) -> Option<Category> {
    if is_preprocessor(word) {
        Some(Category::Preprocessor)
    } else if is_keyword(word) {
        Some(Category::Keyword)
    } else if is_string_literal(word) {
        Some(Category::StringLiteral)
    } else if is_identifier(word) {
        Some(Category::Identifier)
    } else if is_constant(word) {
        Some(Category::Constant)
    } else if is_operator(word) {
        Some(Category::Operator)
    } else if is_punctuation(word) {
        Some(Category::Punctuation)
    } else if is_parenthesis(word) {
        Some(Category::Parenthesis)
    } else {
        None
    }
}
