//! Visual attributes for highlighted text
//!
//! The highlighter emits semantic style identifiers; this module holds the
//! visual side: RGB colors, underline styles and `TextFormat`, plus the
//! default theme map. Hosts replace any entry through
//! `MarkdownHighlighter::set_text_format`.

use std::collections::HashMap;

use crate::state::HighlighterState;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        match hex.len() {
            3 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                let (r, g, b) = ((v >> 8) & 0xf, (v >> 4) & 0xf, v & 0xf);
                Some(Self::rgb((r * 17) as u8, (g * 17) as u8, (b * 17) as u8))
            }
            6 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::rgb(
                    ((v >> 16) & 0xff) as u8,
                    ((v >> 8) & 0xff) as u8,
                    (v & 0xff) as u8,
                ))
            }
            _ => None,
        }
    }

    /// Looks up a named color (the common SVG set used in stylesheets).
    pub fn from_name(name: &str) -> Option<Self> {
        let c = match name {
            "black" => Color::rgb(0, 0, 0),
            "white" => Color::rgb(255, 255, 255),
            "red" => Color::rgb(255, 0, 0),
            "green" => Color::rgb(0, 128, 0),
            "lime" => Color::rgb(0, 255, 0),
            "blue" => Color::rgb(0, 0, 255),
            "yellow" => Color::rgb(255, 255, 0),
            "cyan" | "aqua" => Color::rgb(0, 255, 255),
            "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
            "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
            "orange" => Color::rgb(255, 165, 0),
            "purple" => Color::rgb(128, 0, 128),
            "brown" => Color::rgb(165, 42, 42),
            "pink" => Color::rgb(255, 192, 203),
            "navy" => Color::rgb(0, 0, 128),
            "teal" => Color::rgb(0, 128, 128),
            "olive" => Color::rgb(128, 128, 0),
            "maroon" => Color::rgb(128, 0, 0),
            "silver" => Color::rgb(192, 192, 192),
            "gold" => Color::rgb(255, 215, 0),
            "indigo" => Color::rgb(75, 0, 130),
            "violet" => Color::rgb(238, 130, 238),
            "coral" => Color::rgb(255, 127, 80),
            "salmon" => Color::rgb(250, 128, 114),
            "khaki" => Color::rgb(240, 230, 140),
            "turquoise" => Color::rgb(64, 224, 208),
            "beige" => Color::rgb(245, 245, 220),
            "ivory" => Color::rgb(255, 255, 240),
            "snow" => Color::rgb(255, 250, 250),
            _ => return None,
        };
        Some(c)
    }

    /// HSL lightness on a 0..=255 scale.
    pub fn lightness(self) -> i32 {
        let max = self.r.max(self.g).max(self.b) as i32;
        let min = self.r.min(self.g).min(self.b) as i32;
        (max + min) / 2
    }

    /// A lighter color: HSV value scaled by `factor` percent.
    pub fn lighter(self, factor: i32) -> Self {
        self.scale_value(|v| v * factor.max(0) / 100)
    }

    /// A darker color: HSV value divided by `factor` percent.
    pub fn darker(self, factor: i32) -> Self {
        if factor <= 0 {
            return self;
        }
        self.scale_value(|v| v * 100 / factor)
    }

    fn scale_value(self, scale: impl Fn(i32) -> i32) -> Self {
        let (h, s, v) = self.to_hsv();
        let v = scale(v).clamp(0, 255);
        Self::from_hsv(h, s, v)
    }

    fn to_hsv(self) -> (i32, i32, i32) {
        let (r, g, b) = (self.r as i32, self.g as i32, self.b as i32);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let v = max;
        let s = if max == 0 { 0 } else { delta * 255 / max };
        let h = if delta == 0 {
            0
        } else if max == r {
            (60 * (g - b) / delta).rem_euclid(360)
        } else if max == g {
            60 * (b - r) / delta + 120
        } else {
            60 * (r - g) / delta + 240
        };
        (h, s, v)
    }

    fn from_hsv(h: i32, s: i32, v: i32) -> Self {
        if s == 0 {
            let v = v as u8;
            return Self::rgb(v, v, v);
        }
        let region = (h / 60).rem_euclid(6);
        let rem = h - region * 60;
        let p = v * (255 - s) / 255;
        let q = v * (255 * 60 - s * rem) / (255 * 60);
        let t = v * (255 * 60 - s * (60 - rem)) / (255 * 60);
        let (r, g, b) = match region {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::rgb(r as u8, g as u8, b as u8)
    }
}

/// Underline decoration of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnderlineStyle {
    Single,
    Dotted,
    Wavy,
}

/// Visual attributes applied to a span of text.
///
/// All fields are optional overlays over the host's base font; `None`
/// means "leave alone". The highlighter resolves formats before emitting
/// annotations, so hosts only have to paint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextFormat {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: Option<UnderlineStyle>,
    pub underline_color: Option<Color>,
    pub font_point_size: Option<f32>,
    pub monospace: bool,
}

impl TextFormat {
    /// Format with just a foreground color.
    pub fn fg(color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn with_underline(mut self, style: UnderlineStyle) -> Self {
        self.underline = Some(style);
        self
    }

    pub fn with_underline_color(mut self, color: Color) -> Self {
        self.underline_color = Some(color);
        self
    }

    pub fn with_point_size(mut self, size: f32) -> Self {
        self.font_point_size = Some(size);
        self
    }

    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }

    /// Check if this is the default (no styling).
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A styled span within one line.
///
/// `start..end` are byte offsets into the line. Annotations are emitted in
/// paint order: where ranges overlap, a later annotation wins over an
/// earlier one. `style` is the semantic identifier, `format` the visual
/// attributes already resolved against the theme map.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleAnnotation {
    pub start: usize,
    pub end: usize,
    pub style: HighlighterState,
    pub format: TextFormat,
}

impl StyleAnnotation {
    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// The built-in theme: one format per style identifier.
///
/// Heading sizes descend from 1.6x to 1.1x of `font_size`; code styles use
/// a Monokai-like monospace palette.
pub fn default_text_formats(font_size: f32) -> HashMap<HighlighterState, TextFormat> {
    use HighlighterState::*;

    let mut formats = HashMap::new();

    let heading = TextFormat::fg(Color::rgb(2, 69, 150)).with_bold();
    for (state, scale) in [
        (H1, 1.6),
        (H2, 1.5),
        (H3, 1.4),
        (H4, 1.3),
        (H5, 1.2),
        (H6, 1.1),
    ] {
        formats.insert(state, heading.clone().with_point_size(font_size * scale));
    }

    formats.insert(
        HorizontalRuler,
        TextFormat::fg(Color::rgb(128, 128, 128)).with_bg(Color::rgb(192, 192, 192)),
    );
    formats.insert(List, TextFormat::fg(Color::rgb(163, 0, 123)));
    formats.insert(
        Link,
        TextFormat::fg(Color::rgb(0, 128, 255)).with_underline(UnderlineStyle::Single),
    );
    formats.insert(
        Image,
        TextFormat::fg(Color::rgb(0, 191, 0)).with_bg(Color::rgb(228, 255, 228)),
    );
    formats.insert(CodeBlock, TextFormat::default().monospace());
    formats.insert(InlineCodeBlock, TextFormat::default().monospace());
    formats.insert(Italic, TextFormat::default().with_italic());
    formats.insert(Bold, TextFormat::default().with_bold());
    formats.insert(Comment, TextFormat::fg(Color::rgb(160, 160, 164)));
    formats.insert(MaskedSyntax, TextFormat::fg(Color::rgb(204, 204, 204)));
    formats.insert(
        Table,
        TextFormat::fg(Color::rgb(100, 148, 73)).monospace(),
    );
    formats.insert(BlockQuote, TextFormat::fg(Color::rgb(128, 0, 0)));
    formats.insert(FrontmatterBlock, TextFormat::fg(Color::rgb(204, 204, 204)));
    formats.insert(
        TrailingSpace,
        TextFormat::default().with_bg(Color::rgb(252, 175, 175)),
    );
    formats.insert(CheckBoxChecked, TextFormat::fg(Color::rgb(0, 128, 0)));
    formats.insert(CheckBoxUnChecked, TextFormat::fg(Color::rgb(204, 0, 0)));
    formats.insert(HeadlineEnd, TextFormat::default());
    formats.insert(NoState, TextFormat::default());

    let code = |color: Color| TextFormat::fg(color).monospace();
    formats.insert(CodeKeyWord, code(Color::rgb(0xf9, 0x26, 0x72)));
    formats.insert(CodeString, code(Color::rgb(0xa3, 0x9b, 0x4e)));
    formats.insert(CodeComment, code(Color::rgb(0x75, 0x71, 0x5e)));
    formats.insert(CodeType, code(Color::rgb(0x54, 0xae, 0xbf)));
    formats.insert(CodeOther, code(Color::rgb(0xdb, 0x87, 0x44)));
    formats.insert(CodeNumLiteral, code(Color::rgb(0xae, 0x81, 0xff)));
    formats.insert(CodeBuiltIn, code(Color::rgb(0x01, 0x8a, 0x0f)));

    formats
}
