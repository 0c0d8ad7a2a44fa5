//! PHP word tables

use super::LanguageData;

const TYPES: &[&str] = &[
    "array", "bool", "callable", "float", "int", "iterable", "mixed",
    "object", "string", "void",
];

const KEYWORDS: &[&str] = &[
    "abstract", "and", "as", "break", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "do", "echo", "else",
    "elseif", "enum", "extends", "final", "finally", "fn", "for",
    "foreach", "function", "global", "goto", "if", "implements",
    "include", "include_once", "instanceof", "insteadof", "interface",
    "match", "namespace", "new", "or", "print", "private", "protected",
    "public", "readonly", "require", "require_once", "return", "static",
    "switch", "throw", "trait", "try", "use", "var", "while", "xor",
    "yield",
];

const BUILTINS: &[&str] = &[
    "array_filter", "array_keys", "array_map", "array_merge", "count",
    "die", "empty", "explode", "implode", "in_array", "isset", "json_decode",
    "json_encode", "preg_match", "printf", "sprintf", "str_replace",
    "strlen", "strpos", "strtolower", "strtoupper", "unset", "var_dump",
];

const LITERALS: &[&str] = &["FALSE", "NULL", "TRUE", "false", "null", "true"];

const OTHERS: &[&str] = &[];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
