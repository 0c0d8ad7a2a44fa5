//! Java word tables

use super::LanguageData;

const TYPES: &[&str] = &[
    "Boolean", "Byte", "Character", "Double", "Float", "Integer", "Long",
    "Object", "Short", "String", "boolean", "byte", "char", "double",
    "float", "int", "long", "short", "void",
];

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "break", "case", "catch", "class", "const",
    "continue", "default", "do", "else", "enum", "extends", "final",
    "finally", "for", "goto", "if", "implements", "import", "instanceof",
    "interface", "native", "new", "package", "permits", "private",
    "protected", "public", "record", "return", "sealed", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "try", "var", "volatile", "while",
];

const BUILTINS: &[&str] = &[
    "ArrayList", "Arrays", "Collections", "HashMap", "HashSet", "List",
    "Map", "Math", "Optional", "Set", "Stream", "StringBuilder", "System",
    "Thread", "out", "println",
];

const LITERALS: &[&str] = &["false", "null", "true"];

const OTHERS: &[&str] = &[];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
