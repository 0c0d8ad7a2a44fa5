//! C and C++ word tables (shared by both fence tags)

use super::LanguageData;

const TYPES: &[&str] = &[
    "bool", "char", "const", "double", "float", "int", "long", "short",
    "signed", "size_t", "ssize_t", "unsigned", "void", "wchar_t",
    "int8_t", "int16_t", "int32_t", "int64_t", "intptr_t",
    "uint8_t", "uint16_t", "uint32_t", "uint64_t", "uintptr_t",
    "ptrdiff_t", "auto",
];

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "concept", "constexpr", "continue",
    "decltype", "default", "delete", "do", "else", "enum", "explicit",
    "extern", "final", "for", "friend", "goto", "if", "inline", "mutable",
    "namespace", "new", "noexcept", "operator", "override", "private",
    "protected", "public", "register", "return", "sizeof", "static",
    "struct", "switch", "template", "this", "throw", "try", "typedef",
    "typeid", "typename", "union", "using", "virtual", "volatile", "while",
];

const BUILTINS: &[&str] = &[
    "std", "string", "vector", "map", "set", "array", "deque", "list",
    "unique_ptr", "shared_ptr", "weak_ptr", "cout", "cin", "cerr", "endl",
    "printf", "scanf", "malloc", "calloc", "free", "memcpy", "memset",
    "strlen", "strcmp", "move", "forward",
];

const LITERALS: &[&str] = &["false", "nullptr", "true", "NULL"];

const OTHERS: &[&str] = &[
    "define", "elif", "endif", "error", "ifdef", "ifndef", "include",
    "pragma", "undef",
];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
