//! V word tables

use super::LanguageData;

const TYPES: &[&str] = &[
    "bool", "byte", "f32", "f64", "i8", "i16", "i64", "int", "rune",
    "string", "u16", "u32", "u64", "voidptr",
];

const KEYWORDS: &[&str] = &[
    "as", "assert", "atomic", "break", "const", "continue", "defer",
    "else", "enum", "fn", "for", "go", "goto", "if", "import", "in",
    "interface", "is", "lock", "match", "module", "mut", "or", "pub",
    "return", "rlock", "select", "shared", "sizeof", "static", "struct",
    "type", "union", "unsafe",
];

const BUILTINS: &[&str] = &["eprintln", "panic", "print", "println"];

const LITERALS: &[&str] = &["false", "none", "true"];

const OTHERS: &[&str] = &[];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
