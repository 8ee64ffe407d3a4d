use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::STR_SET;

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = STR_SET![
        "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
        "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
        "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
        "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
        "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
        "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
        "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
        "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
        "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
        "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
        "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
    ];
    pub static ref OPERATORS: HashSet<&'static str> = STR_SET![
        "+", "-", "*", "/", "=", "<<", ">>", ">", "<", ">=", "<=", "==", "!=",
    ];
    pub static ref PUNCTUATIONS: HashSet<&'static str> = STR_SET![";", ",", ".", "!", "?"];
    pub static ref PARENTHESIS: HashSet<&'static str> = STR_SET!["(", ")", "{", "}", "[", "]"];
    pub static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    pub static ref CONSTANT: Regex = Regex::new("^-?[0-9]+(\\.[0-9]+)?$").unwrap();
    pub static ref STRING_LITERAL: Regex = Regex::new("^\".*\"$").unwrap();
}
