//! Shared string- and numeric-literal scanners
//!
//! Both scanners are entered from the generic code scanner with the
//! cursor on the opening quote or the first digit and return the cursor
//! position the caller should continue from.

use crate::highlighter::LineJob;
use crate::state::HighlighterState::{CodeNumLiteral, CodeString};

fn is_octal(b: u8) -> bool {
    (b'0'..=b'7').contains(&b)
}

/// Scans a string literal starting at the opening `quote`.
///
/// The literal is styled as code-string; recognized escape sequences
/// inside it are styled as numeric literals: the single-character escapes
/// `a b e f n r t v ' " \ ?` (two bytes), octal escapes of the form
/// `\NNN` (four bytes) and hex escapes `\xHH` (four bytes). A backslash
/// starting none of these counts as a plain character.
pub(crate) fn scan_string(job: &mut LineJob, mut i: usize, quote: u8) -> usize {
    let bytes = job.text.as_bytes();
    let n = bytes.len();

    job.set_style(i, i + 1, CodeString);
    i += 1;

    while i < n {
        // string end, unless it is an escaped quote
        if bytes[i] == quote && bytes[i - 1] != b'\\' {
            job.set_style(i, i + 1, CodeString);
            i += 1;
            break;
        }
        if bytes[i] == b'\\' && i + 1 < n {
            let len = match bytes[i + 1] {
                b'a' | b'b' | b'e' | b'f' | b'n' | b'r' | b't' | b'v' | b'\'' | b'"'
                | b'\\' | b'?' => 2,
                b'0'..=b'7' => {
                    if i + 4 <= n && is_octal(bytes[i + 2]) && is_octal(bytes[i + 3]) {
                        4
                    } else {
                        0
                    }
                }
                b'x' => {
                    if i + 4 <= n
                        && bytes[i + 2].is_ascii_hexdigit()
                        && bytes[i + 3].is_ascii_hexdigit()
                    {
                        4
                    } else {
                        0
                    }
                }
                _ => 0,
            };

            // not an escape sequence after all; keep the backslash plain
            if len == 0 {
                job.set_style(i, i + 1, CodeString);
                i += 1;
                continue;
            }

            job.set_style(i, i + len, CodeNumLiteral);
            i += len;
            continue;
        }
        job.set_style(i, i + 1, CodeString);
        i += 1;
    }
    i
}

/// Scans a numeric literal starting at a digit.
///
/// The digit only counts as the start of a number when the preceding
/// character is an opening bracket, an operator, a comma, a space or the
/// start of the line. The literal may carry a leading `0x` (hex digits
/// follow) and at most one `.`; a trailing `u l f U L F` suffix is pulled
/// into the styled span. When the character after the literal is not a
/// recognized terminator the highlight is withheld entirely.
pub(crate) fn scan_numeric(job: &mut LineJob, mut i: usize) -> usize {
    let bytes = job.text.as_bytes();
    let n = bytes.len();

    let pre_allowed = i == 0
        || matches!(
            bytes[i - 1],
            b'[' | b'(' | b'{' | b' ' | b',' | b'=' | b'+' | b'-' | b'*' | b'/' | b'%'
                | b'<' | b'>'
        );
    if !pre_allowed {
        return i + 1;
    }

    let start = i;
    if i + 1 >= n {
        job.set_style(i, i + 1, CodeNumLiteral);
        return i + 1;
    }

    i += 1;
    if bytes[i] == b'x' && bytes[i - 1] == b'0' {
        i += 1;
        while i < n && bytes[i].is_ascii_hexdigit() {
            i += 1;
        }
    } else {
        let mut seen_dot = false;
        while i < n {
            if bytes[i].is_ascii_digit() {
                i += 1;
            } else if bytes[i] == b'.' && !seen_dot {
                seen_dot = true;
                i += 1;
            } else {
                break;
            }
        }
    }
    i -= 1;

    let mut post_allowed = false;
    if i + 1 == n {
        post_allowed = true;
    } else {
        match bytes[i + 1] {
            b']' | b')' | b'}' | b' ' | b',' | b'=' | b'+' | b'-' | b'*' | b'/' | b'%'
            | b'>' | b'<' | b';' => post_allowed = true,
            // 100u, 1.0F
            b'u' | b'l' | b'f' | b'U' | b'L' | b'F' => {
                post_allowed = true;
                i += 1;
            }
            _ => {}
        }
    }
    if post_allowed {
        i += 1;
        job.set_style(start, i, CodeNumLiteral);
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HighlighterState;
    use crate::style::default_text_formats;
    use std::collections::HashMap;
    use std::sync::OnceLock;

    fn formats() -> &'static HashMap<HighlighterState, crate::style::TextFormat> {
        static FORMATS: OnceLock<HashMap<HighlighterState, crate::style::TextFormat>> =
            OnceLock::new();
        FORMATS.get_or_init(|| default_text_formats(12.0))
    }

    fn styles_of(job: &LineJob) -> Vec<(usize, usize, HighlighterState)> {
        job.annotations
            .iter()
            .map(|a| (a.start, a.end, a.style))
            .collect()
    }

    #[test]
    fn test_simple_string() {
        let mut job = LineJob::new(r#""abc" rest"#, HighlighterState::CodeC, formats());
        let end = scan_string(&mut job, 0, b'"');
        assert_eq!(end, 5);
        // coalesced into one string span
        assert_eq!(styles_of(&job), vec![(0, 5, HighlighterState::CodeString)]);
    }

    #[test]
    fn test_escape_sequences() {
        let mut job = LineJob::new(r#""a\n""#, HighlighterState::CodeC, formats());
        scan_string(&mut job, 0, b'"');
        assert!(styles_of(&job).contains(&(2, 4, HighlighterState::CodeNumLiteral)));
    }

    #[test]
    fn test_octal_and_hex_escapes() {
        let mut job = LineJob::new(r#""\012\xAF""#, HighlighterState::CodeC, formats());
        scan_string(&mut job, 0, b'"');
        let styles = styles_of(&job);
        assert!(styles.contains(&(1, 5, HighlighterState::CodeNumLiteral)));
        assert!(styles.contains(&(5, 9, HighlighterState::CodeNumLiteral)));
    }

    #[test]
    fn test_invalid_escape_stays_string() {
        let mut job = LineJob::new(r#""\q""#, HighlighterState::CodeC, formats());
        scan_string(&mut job, 0, b'"');
        assert!(!styles_of(&job)
            .iter()
            .any(|s| s.2 == HighlighterState::CodeNumLiteral));
    }

    #[test]
    fn test_numeric_simple() {
        let mut job = LineJob::new("x = 42;", HighlighterState::CodeC, formats());
        let end = scan_numeric(&mut job, 4);
        assert_eq!(end, 6);
        assert_eq!(styles_of(&job), vec![(4, 6, HighlighterState::CodeNumLiteral)]);
    }

    #[test]
    fn test_numeric_hex() {
        let mut job = LineJob::new("x = 0x2A;", HighlighterState::CodeCpp, formats());
        scan_numeric(&mut job, 4);
        assert_eq!(styles_of(&job), vec![(4, 8, HighlighterState::CodeNumLiteral)]);
    }

    #[test]
    fn test_numeric_suffix() {
        let mut job = LineJob::new("y = 1.5F ", HighlighterState::CodeCpp, formats());
        scan_numeric(&mut job, 4);
        assert_eq!(styles_of(&job), vec![(4, 8, HighlighterState::CodeNumLiteral)]);
    }

    #[test]
    fn test_numeric_bad_context_not_styled() {
        // preceded by a letter: not a literal start
        let mut job = LineJob::new("ab42", HighlighterState::CodeC, formats());
        let end = scan_numeric(&mut job, 2);
        assert_eq!(end, 3);
        assert!(styles_of(&job).is_empty());

        // followed by a letter that is no suffix: highlight withheld
        let mut job = LineJob::new("= 42x", HighlighterState::CodeC, formats());
        scan_numeric(&mut job, 2);
        assert!(styles_of(&job).is_empty());
    }
}
