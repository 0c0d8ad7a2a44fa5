//! CSS selector and color-preview pass
//!
//! Runs after the generic scanner: `.`/`#` selectors become keywords, and
//! the value of a `color:` property is painted onto its own background
//! with a contrast-picked foreground.

use super::find;
use crate::highlighter::LineJob;
use crate::state::HighlighterState::{CodeBlock, CodeKeyWord};
use crate::style::Color;

pub(crate) fn post_highlight(job: &mut LineJob) {
    let bytes = job.text.as_bytes();
    let n = bytes.len();
    if n == 0 {
        return;
    }

    let mut i = 0usize;
    while i < n {
        if bytes[i] == b'.' || bytes[i] == b'#' {
            if i + 1 >= n {
                return;
            }
            if bytes[i + 1].is_ascii_whitespace() || bytes[i + 1].is_ascii_digit() {
                i += 1;
                continue;
            }
            let end = find(bytes, b" ", i)
                .or_else(|| find(bytes, b"{", i))
                .unwrap_or(n);
            job.set_style(i, end, CodeKeyWord);
            i = end;
        } else if bytes[i] == b'c' && job.text[i..].starts_with("color") {
            i += 5;
            let Some(colon) = find(bytes, b":", i) else {
                i += 1;
                continue;
            };
            i = colon + 1;
            while i < n && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            let semicolon = find(bytes, b";", i).unwrap_or(n);
            let value = &job.text[i..semicolon];
            let color = if value.starts_with("rgb") {
                parse_rgb(job.text, i)
            } else {
                Color::from_hex(value).or_else(|| Color::from_name(value))
            };
            let Some(color) = color else {
                i += 1;
                continue;
            };

            let foreground = contrasting_foreground(color);
            let mut format = job.format_of(CodeBlock);
            format.background = Some(color);
            format.foreground = Some(foreground);
            job.set_format(i, semicolon, CodeBlock, format);
            i = semicolon;
        }
        i += 1;
    }
}

/// A readable foreground for text sitting on `background`, picked by
/// lightness band.
fn contrasting_foreground(background: Color) -> Color {
    let lightness = background.lightness();
    if lightness <= 20 {
        Color::WHITE
    } else if lightness <= 51 {
        Color::rgb(204, 204, 204)
    } else if lightness <= 110 {
        Color::rgb(187, 187, 187)
    } else if lightness > 127 {
        background.darker(lightness + 100)
    } else {
        background.lighter(lightness + 100)
    }
}

/// Parses `rgb(r, g, b)` starting at `from`.
fn parse_rgb(text: &str, from: usize) -> Option<Color> {
    let bytes = text.as_bytes();
    let open = find(bytes, b"(", from)?;
    let r_end = find(bytes, b",", open)?;
    let g_end = find(bytes, b",", r_end + 1)?;
    let b_end = find(bytes, b")", g_end)?;
    let r = text[open + 1..r_end].trim().parse().ok()?;
    let g = text[r_end + 1..g_end].trim().parse().ok()?;
    let b = text[g_end + 1..b_end].trim().parse().ok()?;
    Some(Color::rgb(r, g, b))
}
