//! VEX word tables

use super::LanguageData;

const TYPES: &[&str] = &[
    "bsdf", "dict", "float", "int", "matrix", "matrix2", "matrix3",
    "string", "vector", "vector2", "vector4",
];

const KEYWORDS: &[&str] = &[
    "break", "continue", "do", "else", "export", "for", "foreach",
    "forpoints", "function", "gather", "if", "illuminance", "import",
    "return", "while",
];

const BUILTINS: &[&str] = &[
    "abs", "addpoint", "addprim", "addvertex", "atan2", "ceil", "chf",
    "chi", "chramp", "chs", "chv", "clamp", "cos", "cross", "detail",
    "dot", "fit", "fit01", "floor", "length", "lerp", "max", "min",
    "noise", "normalize", "point", "pow", "prim", "printf", "rand",
    "setpointattrib", "sin", "sprintf", "sqrt", "tan", "vertex",
];

const LITERALS: &[&str] = &["PI"];

const OTHERS: &[&str] = &[];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
