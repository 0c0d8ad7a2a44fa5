//! Per-language word tables for the code scanner
//!
//! Each supported language contributes five word lists: types, keywords,
//! builtins, literal constants and "others" (preprocessor directives and
//! the like). The lists are bucketed by the first byte of each word, so
//! the scanner dispatches on the current letter in O(1) and only compares
//! against the handful of words sharing it.

mod bash;
mod cpp;
mod csharp;
mod css;
mod go;
mod java;
mod js;
mod json;
mod php;
mod python;
mod qml;
mod rust;
mod sql;
mod ts;
mod v;
mod vex;
mod yaml;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::state::HighlighterState;

/// Words grouped by their first byte.
pub type WordMap = HashMap<u8, Vec<&'static str>>;

/// The five word tables of one language.
pub struct LanguageData {
    pub types: WordMap,
    pub keywords: WordMap,
    pub builtins: WordMap,
    pub literals: WordMap,
    pub others: WordMap,
}

impl LanguageData {
    fn new(
        types: &[&'static str],
        keywords: &[&'static str],
        builtins: &[&'static str],
        literals: &[&'static str],
        others: &[&'static str],
    ) -> Self {
        Self {
            types: bucket(types),
            keywords: bucket(keywords),
            builtins: bucket(builtins),
            literals: bucket(literals),
            others: bucket(others),
        }
    }
}

fn bucket(words: &[&'static str]) -> WordMap {
    let mut map = WordMap::new();
    for &word in words {
        let first = word.as_bytes()[0];
        map.entry(first).or_default().push(word);
    }
    map
}

/// Word tables for a language state; `None` for the generic code block and
/// the hand-written scanners that carry no tables.
pub(crate) fn for_state(state: HighlighterState) -> Option<&'static LanguageData> {
    use HighlighterState::*;

    macro_rules! cached {
        ($cell:ident, $builder:expr) => {{
            static $cell: OnceLock<LanguageData> = OnceLock::new();
            Some($cell.get_or_init($builder))
        }};
    }

    match state.without_comment() {
        CodeCpp | CodeC => cached!(CPP, cpp::data),
        CodeJs => cached!(JS, js::data),
        CodeTypeScript => cached!(TS, ts::data),
        CodeQML => cached!(QML, qml::data),
        CodePHP => cached!(PHP, php::data),
        CodePython => cached!(PYTHON, python::data),
        CodeBash => cached!(BASH, bash::data),
        CodeRust => cached!(RUST, rust::data),
        CodeJava => cached!(JAVA, java::data),
        CodeCSharp => cached!(CSHARP, csharp::data),
        CodeGo => cached!(GO, go::data),
        CodeV => cached!(V, v::data),
        CodeSQL => cached!(SQL, sql::data),
        CodeJSON => cached!(JSON, json::data),
        CodeCSS => cached!(CSS, css::data),
        CodeYAML => cached!(YAML, yaml::data),
        CodeVex => cached!(VEX, vex::data),
        _ => None,
    }
}

/// Maps a lowercased fenced-code tag to its language state.
///
/// The table is a process-wide immutable initialized on first use; its
/// contents are part of the public interface. Unknown tags make the fence
/// fall back to the generic `CodeBlock` state.
pub fn language_for_tag(tag: &str) -> Option<HighlighterState> {
    use HighlighterState::*;

    static REGISTRY: OnceLock<HashMap<&'static str, HighlighterState>> = OnceLock::new();
    let registry = REGISTRY.get_or_init(|| {
        HashMap::from([
            ("bash", CodeBash),
            ("c", CodeC),
            ("cpp", CodeCpp),
            ("cxx", CodeCpp),
            ("c++", CodeCpp),
            ("c#", CodeCSharp),
            ("csharp", CodeCSharp),
            ("css", CodeCSS),
            ("go", CodeGo),
            ("html", CodeXML),
            ("ini", CodeINI),
            ("java", CodeJava),
            ("javascript", CodeJava),
            ("js", CodeJs),
            ("json", CodeJSON),
            ("php", CodePHP),
            ("py", CodePython),
            ("python", CodePython),
            ("qml", CodeQML),
            ("rust", CodeRust),
            ("sh", CodeBash),
            ("sql", CodeSQL),
            ("taggerscript", CodeTaggerScript),
            ("ts", CodeTypeScript),
            ("typescript", CodeTypeScript),
            ("v", CodeV),
            ("vex", CodeVex),
            ("xml", CodeXML),
            ("yml", CodeYAML),
            ("yaml", CodeYAML),
        ])
    });
    registry.get(tag).copied()
}
