//! QML word tables

use super::LanguageData;

const TYPES: &[&str] = &[
    "bool", "color", "date", "double", "enumeration", "font", "int",
    "list", "point", "real", "rect", "size", "string", "url", "var",
    "variant", "vector2d", "vector3d", "vector4d",
];

const KEYWORDS: &[&str] = &[
    "alias", "as", "break", "case", "catch", "const", "continue",
    "default", "delete", "do", "else", "finally", "for", "function", "if",
    "import", "in", "instanceof", "new", "on", "property", "readonly",
    "required", "return", "signal", "switch", "this", "throw", "try",
    "typeof", "var", "while",
];

const BUILTINS: &[&str] = &[
    "Behavior", "Component", "Connections", "Item", "ListModel",
    "ListView", "Loader", "MouseArea", "Qt", "Rectangle", "Repeater",
    "Row", "Column", "State", "Text", "Timer", "Transition", "anchors",
    "console", "parent",
];

const LITERALS: &[&str] = &["false", "null", "true", "undefined"];

const OTHERS: &[&str] = &[];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
