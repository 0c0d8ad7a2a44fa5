//! YAML key and link pass
//!
//! Runs after the generic scanner. Words in front of a `:` become
//! keywords unless they sit in a quoted scalar or the colon starts a
//! path (`:\` or `:/`); `http`/`https` spans are underlined.

use super::{find, is_letter};
use crate::highlighter::LineJob;
use crate::state::HighlighterState::{CodeKeyWord, CodeString};
use crate::style::UnderlineStyle;

pub(crate) fn post_highlight(job: &mut LineJob) {
    let bytes = job.text.as_bytes();
    let n = bytes.len();
    if n == 0 || job.text.trim_start().starts_with('#') {
        return;
    }

    let mut i = 0usize;
    while i < n {
        if !is_letter(bytes[i]) {
            i += 1;
            continue;
        }

        // quoted scalar: not a key, skip to the closing quote
        if i > 0 && (bytes[i - 1] == b'"' || bytes[i - 1] == b'\'') {
            match find(bytes, &bytes[i - 1..i], i) {
                Some(close) => {
                    i = close + 1;
                    continue;
                }
                None => break,
            }
        }

        if bytes[i] == b'h' && job.text[i..].starts_with("http") {
            i = underline_link(job, i);
            continue;
        }

        match find(bytes, b":", i) {
            Some(colon) => {
                let path_like =
                    colon + 1 < n && (bytes[colon + 1] == b'\\' || bytes[colon + 1] == b'/');
                if !path_like {
                    job.set_style(i, colon, CodeKeyWord);
                }
                i = colon + 1;
            }
            None => {
                // no colon ahead; only links remain interesting
                while i < n {
                    if bytes[i] == b'h' && job.text[i..].starts_with("http") {
                        i = underline_link(job, i);
                    } else {
                        i += 1;
                    }
                }
                break;
            }
        }
    }
}

fn underline_link(job: &mut LineJob, start: usize) -> usize {
    let bytes = job.text.as_bytes();
    let end = find(bytes, b" ", start).unwrap_or(bytes.len());
    let mut format = job.format_of(CodeString);
    format.underline = Some(UnderlineStyle::Single);
    job.set_format(start, end, CodeString, format);
    end
}
