//! Embedded code highlighting for fenced blocks
//!
//! One pass over the line with a cursor: comments and literals are picked
//! up while skipping non-letters, words are matched whole against the
//! language's first-byte-bucketed tables. A handful of languages have
//! hand-written scanners instead of (XML, INI, tagger script) or on top
//! of (CSS, YAML) the generic pass.

pub(crate) mod css;
pub(crate) mod ini;
pub(crate) mod literals;
pub(crate) mod tagger;
pub(crate) mod xml;
pub(crate) mod yaml;

use crate::highlighter::LineJob;
use crate::lang::{self, WordMap};
use crate::state::HighlighterState;
use crate::state::HighlighterState::*;

/// Letters for word-boundary purposes. Bytes above ASCII belong to
/// multi-byte characters and are treated as word material so spans never
/// split a UTF-8 sequence.
pub(crate) fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b >= 0x80
}

/// First occurrence of `needle` in `haystack` at or after `from`.
pub(crate) fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Highlights one line inside a fenced code block. `job.state` carries the
/// language; it may flip to/from the language's comment variant.
pub(crate) fn highlight(job: &mut LineJob) {
    if job.text.is_empty() {
        return;
    }

    let state = job.state.without_comment();
    match state {
        CodeXML => return xml::highlight(job),
        CodeINI => return ini::highlight(job),
        CodeTaggerScript => return tagger::highlight(job),
        _ => {}
    }

    let comment_char = match state {
        CodeBash | CodePython | CodeYAML => Some(b'#'),
        _ => None,
    };
    scan(job, lang::for_state(state), comment_char);

    match state {
        CodeCSS => css::post_highlight(job),
        CodeYAML => yaml::post_highlight(job),
        _ => {}
    }
}

/// The generic scanner (see module docs). `data` is `None` for untagged
/// code blocks, which still get comment and literal scanning.
fn scan(job: &mut LineJob, data: Option<&lang::LanguageData>, comment_char: Option<u8>) {
    let bytes = job.text.as_bytes();
    let n = bytes.len();

    // the whole line keeps the monospaced code-block style underneath
    job.set_style(0, n, CodeBlock);

    let mut i = 0usize;

    // continuation of a /* */ comment from the previous line
    if job.state.in_comment() {
        match find(bytes, b"*/", 0) {
            None => {
                job.set_style(0, n, CodeComment);
                return;
            }
            Some(close) => {
                job.state = job.state.without_comment();
                job.set_style(0, close + 2, CodeComment);
                i = close + 2;
            }
        }
    }

    while i < n {
        // skip everything that cannot start a word
        while i < n && !is_letter(bytes[i]) {
            if bytes[i].is_ascii_whitespace() {
                i += 1;
                if i == n {
                    break;
                }
                if is_letter(bytes[i]) {
                    break;
                }
                continue;
            }
            if comment_char.is_none() && bytes[i] == b'/' && i + 1 < n {
                if bytes[i + 1] == b'/' {
                    job.set_style(i, n, CodeComment);
                    return;
                }
                if bytes[i + 1] == b'*' {
                    match find(bytes, b"*/", i + 2) {
                        None => {
                            // unterminated: languages with a comment pair
                            // carry it to the next line
                            if let Some(comment) = job.state.comment_variant() {
                                job.state = comment;
                            }
                            job.set_style(i, n, CodeComment);
                            return;
                        }
                        Some(close) => {
                            job.set_style(i, close + 2, CodeComment);
                            i = close + 2;
                            if i >= n {
                                return;
                            }
                        }
                    }
                }
            } else if Some(bytes[i]) == comment_char {
                job.set_style(i, n, CodeComment);
                return;
            } else if bytes[i].is_ascii_digit() {
                i = literals::scan_numeric(job, i);
            } else if bytes[i] == b'"' {
                i = literals::scan_string(job, i, b'"');
            } else if bytes[i] == b'\'' {
                i = literals::scan_string(job, i, b'\'');
            }
            if i >= n {
                break;
            }
            i += 1;
        }
        if i >= n {
            break;
        }

        let pos = i;
        let Some(data) = data else {
            while i < n && is_letter(bytes[i]) {
                i += 1;
            }
            continue;
        };

        i = apply_words(job, i, &data.types, CodeType);
        if i >= n || !is_letter(bytes[i]) {
            continue;
        }
        i = apply_words(job, i, &data.keywords, CodeKeyWord);
        if i >= n || !is_letter(bytes[i]) {
            continue;
        }
        i = apply_words(job, i, &data.literals, CodeNumLiteral);
        if i >= n || !is_letter(bytes[i]) {
            continue;
        }
        i = apply_words(job, i, &data.builtins, CodeBuiltIn);
        if i >= n || !is_letter(bytes[i]) {
            continue;
        }
        i = apply_others(job, i, &data.others);

        // nothing matched: skip the rest of this word
        if pos == i {
            while i < n && is_letter(bytes[i]) {
                i += 1;
            }
        }
    }
}

/// Whole-word lookup in one table; returns the cursor after any match.
fn apply_words(job: &mut LineJob, mut i: usize, map: &WordMap, style: HighlighterState) -> usize {
    let bytes = job.text.as_bytes();
    let n = bytes.len();

    if i > 0 && is_letter(bytes[i - 1]) {
        return i;
    }
    let Some(words) = map.get(&bytes[i]) else {
        return i;
    };
    for word in words {
        let w = word.as_bytes();
        if bytes[i..].starts_with(w) {
            let end = i + w.len();
            if end == n || !is_letter(bytes[end]) {
                job.set_style(i, end, style);
                i = end;
            }
        }
    }
    i
}

/// Like `apply_words` for the "others" table; in C and C++ the styled
/// span starts one byte early so `#include` covers the `#`.
fn apply_others(job: &mut LineJob, mut i: usize, map: &WordMap) -> usize {
    let bytes = job.text.as_bytes();
    let n = bytes.len();

    if i > 0 && is_letter(bytes[i - 1]) {
        return i;
    }
    let Some(words) = map.get(&bytes[i]) else {
        return i;
    };
    let preprocessor = matches!(job.state.without_comment(), CodeCpp | CodeC);
    for word in words {
        let w = word.as_bytes();
        if bytes[i..].starts_with(w) {
            let end = i + w.len();
            if end == n || !is_letter(bytes[end]) {
                if preprocessor && i > 0 {
                    job.set_style(i - 1, end, CodeOther);
                } else {
                    job.set_style(i, end, CodeOther);
                }
                i = end;
            }
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::default_text_formats;
    use crate::style::TextFormat;
    use std::collections::HashMap;
    use std::sync::OnceLock;

    fn formats() -> &'static HashMap<HighlighterState, TextFormat> {
        static FORMATS: OnceLock<HashMap<HighlighterState, TextFormat>> = OnceLock::new();
        FORMATS.get_or_init(|| default_text_formats(12.0))
    }

    fn run(text: &str, state: HighlighterState) -> LineJob<'_> {
        let mut job = LineJob::new(text, state, formats());
        highlight(&mut job);
        job
    }

    fn styled<'a>(job: &'a LineJob, style: HighlighterState) -> Vec<&'a str> {
        job.annotations
            .iter()
            .filter(|a| a.style == style)
            .map(|a| &job.text[a.start..a.end])
            .collect()
    }

    #[test]
    fn test_cpp_declaration() {
        let job = run("int x = 0x2A;", CodeCpp);
        assert_eq!(job.state, CodeCpp);
        assert_eq!(styled(&job, CodeType), vec!["int"]);
        assert_eq!(styled(&job, CodeNumLiteral), vec!["0x2A"]);
        // the whole line keeps the code block base
        assert_eq!(job.annotations[0].start, 0);
        assert_eq!(job.annotations[0].end, job.text.len());
        assert_eq!(job.annotations[0].style, CodeBlock);
    }

    #[test]
    fn test_no_partial_keyword_match() {
        let job = run("integer interior", CodeCpp);
        assert!(styled(&job, CodeType).is_empty());
        assert!(styled(&job, CodeKeyWord).is_empty());
    }

    #[test]
    fn test_line_comment() {
        let job = run("x = 1; // done", CodeCpp);
        assert_eq!(styled(&job, CodeComment), vec!["// done"]);
    }

    #[test]
    fn test_hash_comment() {
        let job = run("print(x) # trailing", CodePython);
        assert_eq!(styled(&job, CodeComment), vec!["# trailing"]);
        assert_eq!(styled(&job, CodeBuiltIn), vec!["print"]);
    }

    #[test]
    fn test_block_comment_same_line() {
        let job = run("a /* note */ true", CodeJs);
        assert_eq!(job.state, CodeJs);
        assert_eq!(styled(&job, CodeComment), vec!["/* note */"]);
        assert_eq!(styled(&job, CodeNumLiteral), vec!["true"]);
    }

    #[test]
    fn test_unterminated_block_comment_sets_pair_state() {
        let job = run("x /* open", CodeCpp);
        assert_eq!(job.state, CodeCppComment);
        assert_eq!(styled(&job, CodeComment), vec!["/* open"]);
    }

    #[test]
    fn test_comment_continuation_closes() {
        let job = run("still */ int x = 1;", CodeCppComment);
        assert_eq!(job.state, CodeCpp);
        assert_eq!(styled(&job, CodeComment), vec!["still */"]);
        assert_eq!(styled(&job, CodeType), vec!["int"]);
    }

    #[test]
    fn test_comment_continuation_stays_open() {
        let job = run("no end in sight", CodeCppComment);
        assert_eq!(job.state, CodeCppComment);
        assert_eq!(styled(&job, CodeComment), vec!["no end in sight"]);
    }

    #[test]
    fn test_unterminated_comment_without_pair_state() {
        // SQL has no comment variant: styled to end of line, state stays
        let job = run("SELECT /* hm", CodeSQL);
        assert_eq!(job.state, CodeSQL);
        assert_eq!(styled(&job, CodeComment), vec!["/* hm"]);
    }

    #[test]
    fn test_generic_code_block_literals_only() {
        let job = run("foo \"bar\" 42 baz", CodeBlock);
        assert_eq!(job.state, CodeBlock);
        assert_eq!(styled(&job, CodeString), vec!["\"bar\""]);
        assert_eq!(styled(&job, CodeNumLiteral), vec!["42"]);
        assert!(styled(&job, CodeKeyWord).is_empty());
    }

    #[test]
    fn test_preprocessor_covers_hash() {
        let job = run("#include <stdio.h>", CodeCpp);
        assert!(styled(&job, CodeOther).contains(&"#include"));
    }

    #[test]
    fn test_rust_snippet() {
        let job = run("let x: u32 = 5;", CodeRust);
        assert_eq!(styled(&job, CodeKeyWord), vec!["let"]);
        assert_eq!(styled(&job, CodeType), vec!["u32"]);
        assert_eq!(styled(&job, CodeNumLiteral), vec!["5"]);
    }
}
