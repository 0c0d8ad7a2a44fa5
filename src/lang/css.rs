//! CSS word tables
//!
//! Hyphenated property names cannot be whole-word matched by the scanner,
//! so the tables carry the single-word properties and common value
//! keywords; selectors get their own pass in `code::css`.

use super::LanguageData;

const TYPES: &[&str] = &[
    "a", "body", "button", "div", "footer", "form", "h1", "h2", "h3",
    "header", "html", "img", "input", "li", "nav", "p", "span", "table",
    "td", "th", "tr", "ul",
];

const KEYWORDS: &[&str] = &[
    "background", "border", "bottom", "clear", "color", "content",
    "cursor", "display", "filter", "float", "font", "height", "left",
    "margin", "opacity", "overflow", "padding", "position", "right",
    "top", "transform", "transition", "visibility", "width", "zoom",
];

const BUILTINS: &[&str] = &[];

const LITERALS: &[&str] = &[
    "absolute", "auto", "block", "bold", "dashed", "dotted", "fixed",
    "flex", "grid", "hidden", "inherit", "initial", "inline", "italic",
    "none", "relative", "solid", "static", "sticky", "visible",
];

const OTHERS: &[&str] = &[];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
