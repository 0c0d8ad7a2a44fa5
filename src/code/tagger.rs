//! Hand-written tagger-script scanner
//!
//! `$name(` opens a function call, `$noop(...)` is a comment,
//! `%variable%` is a type and `\x` a two-character escape. An unclosed
//! `%` gets a red wavy underline.

use super::find;
use crate::highlighter::LineJob;
use crate::state::HighlighterState::{CodeComment, CodeKeyWord, CodeOther, CodeType, NoState};
use crate::style::{Color, UnderlineStyle};

pub(crate) fn highlight(job: &mut LineJob) {
    let bytes = job.text.as_bytes();
    let n = bytes.len();
    if n == 0 {
        return;
    }

    let mut i = 0usize;
    while i < n {
        // function call; $noop is handled below as a comment
        if bytes[i] == b'$' && !job.text[i..].starts_with("$noop") {
            let Some(open) = find(bytes, b"(", i) else {
                break;
            };
            job.set_style(i, open, CodeKeyWord);
            i = open;
        }

        // metadata variables
        if i < n && bytes[i] == b'%' {
            let start = i;
            i += 1;
            match find(bytes, b"%", i) {
                Some(close) => {
                    job.set_style(start, close + 1, CodeType);
                    i = close;
                }
                None => {
                    let mut format = job.format_of(NoState);
                    format.underline = Some(UnderlineStyle::Wavy);
                    format.underline_color = Some(Color::RED);
                    job.set_format(start, start + 1, NoState, format);
                }
            }
        }

        if i < n && job.text[i..].starts_with("$noop") {
            let Some(close) = find(bytes, b")", i) else {
                break;
            };
            job.set_style(i, close + 1, CodeComment);
            i = close;
        }

        // escapes
        if i < n && bytes[i] == b'\\' {
            job.set_style(i, i + 2, CodeOther);
            i += 1;
        }

        i += 1;
    }
}
