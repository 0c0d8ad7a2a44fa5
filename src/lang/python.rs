//! Python word tables

use super::LanguageData;

const TYPES: &[&str] = &[
    "bool", "bytearray", "bytes", "complex", "dict", "float", "frozenset",
    "int", "list", "object", "set", "str", "tuple",
];

const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from",
    "global", "if", "import", "in", "is", "lambda", "nonlocal", "not",
    "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

const BUILTINS: &[&str] = &[
    "abs", "all", "any", "enumerate", "filter", "format", "getattr",
    "hasattr", "hash", "id", "input", "isinstance", "issubclass", "iter",
    "len", "map", "max", "min", "next", "open", "ord", "print", "range",
    "repr", "reversed", "round", "setattr", "sorted", "sum", "super",
    "type", "vars", "zip",
];

const LITERALS: &[&str] = &["Ellipsis", "False", "None", "NotImplemented", "True"];

const OTHERS: &[&str] = &["cls", "self"];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
