//! Hand-written INI scanner
//!
//! `[section]` spans are type-styled, keys are keyword-styled, `;` opens a
//! line comment. An unclosed section bracket or a key without `=` is
//! marked with a red dotted underline.

use super::{find, is_letter};
use crate::highlighter::LineJob;
use crate::state::HighlighterState::{CodeComment, CodeKeyWord, CodeType};
use crate::style::{Color, UnderlineStyle};

pub(crate) fn highlight(job: &mut LineJob) {
    let bytes = job.text.as_bytes();
    let n = bytes.len();
    if n == 0 {
        return;
    }

    let mut i = 0usize;
    while i < n {
        if bytes[i] == b'[' {
            let mut format = job.format_of(CodeType);
            let end = match find(bytes, b"]", i) {
                Some(close) => close + 1,
                None => {
                    format.underline = Some(UnderlineStyle::Dotted);
                    format.underline_color = Some(Color::RED);
                    n
                }
            };
            job.set_format(i, end, CodeType, format);
            i = end;
            if i >= n {
                break;
            }
        } else if bytes[i] == b';' {
            job.set_style(i, n, CodeComment);
            break;
        } else if is_letter(bytes[i]) {
            let mut format = job.format_of(CodeKeyWord);
            let equals = match find(bytes, b"=", i) {
                Some(pos) => pos,
                None => {
                    format.underline = Some(UnderlineStyle::Dotted);
                    format.underline_color = Some(Color::RED);
                    n
                }
            };
            job.set_format(i, equals, CodeKeyWord, format);
            i = equals.saturating_sub(1);
        } else if bytes[i] == b'=' {
            // the value span stays unstyled; jump ahead to a comment if any
            match find(bytes, b";", i) {
                Some(comment) => i = comment - 1,
                None => break,
            }
        }
        i += 1;
    }
}
