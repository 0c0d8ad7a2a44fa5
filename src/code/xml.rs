//! Hand-written XML/HTML scanner
//!
//! Tag names after `<` or `</` are keywords, the attribute token in front
//! of a `=` is a builtin, double-quoted spans are strings.

use super::find;
use crate::highlighter::LineJob;
use crate::state::HighlighterState::{CodeBlock, CodeBuiltIn, CodeKeyWord, CodeString};

pub(crate) fn highlight(job: &mut LineJob) {
    let bytes = job.text.as_bytes();
    let n = bytes.len();
    if n == 0 {
        return;
    }

    job.set_style(0, n, CodeBlock);

    let mut i = 0usize;
    while i < n {
        // tag body, but not <!-- or <!DOCTYPE
        if bytes[i] == b'<' && i + 1 < n && bytes[i + 1] != b'!' {
            if let Some(gt) = find(bytes, b">", i) {
                let mut name = i + 1;
                if name < n && bytes[name] == b'/' {
                    name += 1;
                }
                job.set_style(name, gt, CodeKeyWord);
            }
        }

        // the token before '=' is an attribute name
        if bytes[i] == b'=' {
            let mut last_space = job.text[..i].rfind(' ');
            if i >= 1 && last_space == Some(i - 1) {
                last_space = job.text[..i - 1].rfind(' ');
            }
            if let Some(space) = last_space {
                if space > 0 {
                    job.set_style(space, i, CodeBuiltIn);
                }
            }
        }

        if bytes[i] == b'"' {
            match find(bytes, b"\"", i + 1) {
                Some(close) => {
                    job.set_style(i, close + 1, CodeString);
                    i = close;
                }
                None => {
                    job.set_style(i, n, CodeString);
                    i = n;
                }
            }
        }

        i += 1;
    }
}
