//! Line-oriented Markdown syntax highlighter
//!
//! The highlighter works one line at a time: the host hands in a line and
//! the terminal state of the line above, and gets back style annotations
//! (byte ranges tagged with a semantic style and a resolved format) plus
//! the line's own terminal state. Multi-line constructs - fenced code
//! blocks with per-language tokenizing, `---` frontmatter, HTML comments,
//! setext headings - ride on that state. `Document` wraps the per-line
//! calls for hosts that just want a whole text highlighted.

mod code;

pub mod config;
pub mod document;
pub mod error;
pub mod lang;
pub mod render;
pub mod rules;
pub mod state;
pub mod style;

pub mod highlighter;

pub use document::Document;
pub use error::HighlightError;
pub use highlighter::{HighlightResult, LineInput, MarkdownHighlighter};
pub use lang::language_for_tag;
pub use rules::HighlightingOptions;
pub use state::HighlighterState;
pub use style::{default_text_formats, Color, StyleAnnotation, TextFormat, UnderlineStyle};
