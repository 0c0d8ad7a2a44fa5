//! ANSI rendering of annotated lines
//!
//! Resolves the paint order of a line's annotations into runs of equal
//! formatting and emits crossterm escape sequences for them. This is the
//! output path of the companion binary; library hosts render annotations
//! themselves.

use crossterm::style::{
    Attribute, Color as TermColor, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};

use crate::style::{Color, StyleAnnotation, TextFormat};

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn escape_for(format: &TextFormat) -> String {
    let mut escape = String::new();
    if let Some(color) = format.foreground {
        escape.push_str(&SetForegroundColor(term_color(color)).to_string());
    }
    if let Some(color) = format.background {
        escape.push_str(&SetBackgroundColor(term_color(color)).to_string());
    }
    if format.bold {
        escape.push_str(&SetAttribute(Attribute::Bold).to_string());
    }
    if format.italic {
        escape.push_str(&SetAttribute(Attribute::Italic).to_string());
    }
    if format.underline.is_some() {
        escape.push_str(&SetAttribute(Attribute::Underlined).to_string());
    }
    escape
}

fn reset() -> String {
    format!("{}{}", SetAttribute(Attribute::Reset), ResetColor)
}

/// Renders one line with its annotations applied in paint order.
pub fn render_line(text: &str, annotations: &[StyleAnnotation]) -> String {
    let mut formats: Vec<Option<&TextFormat>> = vec![None; text.len()];
    for annotation in annotations {
        for slot in formats
            .iter_mut()
            .take(annotation.end.min(text.len()))
            .skip(annotation.start)
        {
            *slot = Some(&annotation.format);
        }
    }

    let mut out = String::new();
    let mut start = 0;
    while start < text.len() {
        let format = formats[start];
        let mut end = start + 1;
        while end < text.len() && formats[end] == format {
            end += 1;
        }
        match format {
            Some(format) if !format.is_default() => {
                out.push_str(&escape_for(format));
                out.push_str(&text[start..end]);
                out.push_str(&reset());
            }
            _ => out.push_str(&text[start..end]),
        }
        start = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlighter::{LineInput, MarkdownHighlighter};
    use crate::state::HighlighterState;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(render_line("plain", &[]), "plain");
    }

    #[test]
    fn test_styled_run_wrapped_in_escapes() {
        let mut highlighter = MarkdownHighlighter::new();
        let result = highlighter
            .highlight_block(&LineInput::new("# title", HighlighterState::NoState));
        let rendered = render_line("# title", &result.annotations);
        assert!(rendered.contains("title"));
        assert!(rendered.contains('\x1b'));
    }

    #[test]
    fn test_later_annotation_wins() {
        let mut highlighter = MarkdownHighlighter::new();
        let result = highlighter
            .highlight_block(&LineInput::new("[text](http://x)", HighlighterState::NoState));
        // must not panic and must keep the line's characters in order
        let rendered = render_line("[text](http://x)", &result.annotations);
        let stripped: String = rendered.chars().filter(|c| *c != '\x1b').collect();
        assert!(stripped.contains("text"));
    }
}
