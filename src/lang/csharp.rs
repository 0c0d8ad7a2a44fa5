//! C# word tables

use super::LanguageData;

const TYPES: &[&str] = &[
    "bool", "byte", "char", "decimal", "double", "dynamic", "float",
    "int", "long", "object", "sbyte", "short", "string", "uint", "ulong",
    "ushort", "var", "void",
];

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "base", "break", "case", "catch",
    "checked", "class", "const", "continue", "default", "delegate", "do",
    "else", "enum", "event", "explicit", "extern", "finally", "fixed",
    "for", "foreach", "goto", "if", "implicit", "in", "interface",
    "internal", "is", "lock", "namespace", "new", "operator", "out",
    "override", "params", "private", "protected", "public", "readonly",
    "record", "ref", "return", "sealed", "sizeof", "stackalloc", "static",
    "struct", "switch", "this", "throw", "try", "typeof", "unchecked",
    "unsafe", "using", "virtual", "volatile", "when", "where", "while",
    "yield",
];

const BUILTINS: &[&str] = &[
    "Console", "Dictionary", "Exception", "List", "Math", "ReadLine",
    "Task", "WriteLine", "nameof",
];

const LITERALS: &[&str] = &["false", "null", "true"];

const OTHERS: &[&str] = &[];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
