//! TypeScript word tables

use super::LanguageData;

const TYPES: &[&str] = &[
    "Array", "ArrayBuffer", "BigInt", "Boolean", "Date", "Error", "Map",
    "Number", "Object", "Promise", "Proxy", "Record", "RegExp", "Set",
    "String", "Symbol", "WeakMap", "WeakSet", "any", "bigint", "boolean",
    "never", "number", "object", "string", "symbol", "unknown", "void",
];

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "break", "case", "catch", "class",
    "const", "continue", "debugger", "declare", "default", "delete", "do",
    "else", "enum", "export", "extends", "finally", "for", "function",
    "get", "if", "implements", "import", "in", "infer", "instanceof",
    "interface", "is", "keyof", "let", "namespace", "new", "of",
    "override", "private", "protected", "public", "readonly", "return",
    "satisfies", "set", "static", "super", "switch", "this", "throw",
    "try", "type", "typeof", "var", "while", "with", "yield",
];

const BUILTINS: &[&str] = &[
    "console", "document", "window", "fetch", "require", "module",
    "exports", "process", "JSON", "Math", "parseFloat", "parseInt",
    "setInterval", "setTimeout", "clearInterval", "clearTimeout",
];

const LITERALS: &[&str] = &[
    "false", "null", "true", "undefined", "NaN", "Infinity",
];

const OTHERS: &[&str] = &[];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
