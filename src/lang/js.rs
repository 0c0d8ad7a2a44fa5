//! JavaScript word tables

use super::LanguageData;

const TYPES: &[&str] = &[
    "Array", "ArrayBuffer", "BigInt", "Boolean", "Date", "Error", "Map",
    "Number", "Object", "Promise", "Proxy", "RegExp", "Set", "String",
    "Symbol", "WeakMap", "WeakSet",
];

const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const",
    "continue", "debugger", "default", "delete", "do", "else", "export",
    "extends", "finally", "for", "function", "get", "if", "import", "in",
    "instanceof", "let", "new", "of", "return", "set", "static", "super",
    "switch", "this", "throw", "try", "typeof", "var", "void", "while",
    "with", "yield",
];

const BUILTINS: &[&str] = &[
    "console", "document", "window", "fetch", "require", "module",
    "exports", "process", "JSON", "Math", "parseFloat", "parseInt",
    "setInterval", "setTimeout", "clearInterval", "clearTimeout",
    "encodeURIComponent", "decodeURIComponent", "isNaN",
];

const LITERALS: &[&str] = &[
    "false", "null", "true", "undefined", "NaN", "Infinity",
];

const OTHERS: &[&str] = &[];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
