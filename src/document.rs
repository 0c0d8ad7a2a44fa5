//! Document-level driving of the per-line highlighter
//!
//! Hosts that own their line storage call `highlight_block` themselves;
//! `Document` is the batteries-included driver used by the binary and the
//! tests. It keeps the persistent terminal-state vector, threads each
//! line's state into the next line and drains the dirty queue after a
//! pass.

use crate::highlighter::{LineInput, MarkdownHighlighter};
use crate::state::HighlighterState;
use crate::style::StyleAnnotation;

/// Per-document line state.
#[derive(Debug, Default)]
pub struct Document {
    states: Vec<HighlighterState>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminal state of a line after the last pass.
    pub fn state(&self, line: usize) -> HighlighterState {
        self.states
            .get(line)
            .copied()
            .unwrap_or(HighlighterState::NoState)
    }

    pub fn line_count(&self) -> usize {
        self.states.len()
    }

    /// Highlights all lines in order, then drains the dirty queue. Each
    /// requeued line cascades forward while terminal states keep
    /// changing, so setext promotions settle within the pass.
    pub fn highlight(
        &mut self,
        highlighter: &mut MarkdownHighlighter,
        lines: &[&str],
    ) -> Vec<Vec<StyleAnnotation>> {
        self.states = vec![HighlighterState::NoState; lines.len()];
        let mut annotations = vec![Vec::new(); lines.len()];

        for index in 0..lines.len() {
            self.highlight_line(highlighter, lines, index, &mut annotations);
        }

        while let Some(mut index) = highlighter.pop_dirty_block() {
            loop {
                let before = self.state(index);
                self.highlight_line(highlighter, lines, index, &mut annotations);
                if self.state(index) == before || index + 1 >= lines.len() {
                    break;
                }
                index += 1;
            }
        }

        annotations
    }

    /// Convenience wrapper splitting a whole text into lines.
    pub fn highlight_text(
        &mut self,
        highlighter: &mut MarkdownHighlighter,
        text: &str,
    ) -> Vec<Vec<StyleAnnotation>> {
        let lines: Vec<&str> = text.lines().collect();
        self.highlight(highlighter, &lines)
    }

    fn highlight_line(
        &mut self,
        highlighter: &mut MarkdownHighlighter,
        lines: &[&str],
        index: usize,
        annotations: &mut [Vec<StyleAnnotation>],
    ) {
        let input = LineInput {
            text: lines[index],
            index,
            prev_state: if index == 0 {
                HighlighterState::NoState
            } else {
                self.states[index - 1]
            },
            prev_text: index.checked_sub(1).map(|prev| lines[prev]),
            next_text: lines.get(index + 1).copied(),
            has_frontmatter: lines.first() == Some(&"---"),
        };

        let result = highlighter.highlight_block(&input);
        self.states[index] = result.state;
        if let Some(promoted) = result.restyle_previous {
            if index > 0 {
                self.states[index - 1] = promoted;
            }
        }
        annotations[index] = result.annotations;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HighlighterState::*;

    fn run(lines: &[&str]) -> (Document, Vec<Vec<StyleAnnotation>>) {
        let mut highlighter = MarkdownHighlighter::new();
        let mut document = Document::new();
        let annotations = document.highlight(&mut highlighter, lines);
        (document, annotations)
    }

    #[test]
    fn test_fenced_block_sequence() {
        let (document, annotations) = run(&["```cpp", "int x = 0x2A;", "```", "after"]);
        assert_eq!(document.state(0), CodeCpp);
        assert_eq!(document.state(1), CodeCpp);
        assert_eq!(document.state(2), CodeBlockEnd);
        assert_eq!(document.state(3), NoState);

        // fences are masked over the whole line
        assert_eq!(annotations[0][0].style, MaskedSyntax);
        assert_eq!(annotations[2][0].style, MaskedSyntax);
        // the interior gets code styles, no inline markdown
        assert!(annotations[1].iter().any(|a| a.style == CodeType));
        assert!(annotations[1].iter().all(|a| a.style != Bold));
    }

    #[test]
    fn test_setext_requeues_previous_line() {
        let (document, annotations) = run(&["Title", "====="]);
        assert_eq!(document.state(0), H1);
        assert_eq!(document.state(1), HeadlineEnd);
        // after the dirty pass the first line carries the heading style
        assert_eq!(annotations[0][0].style, H1);
        assert_eq!((annotations[0][0].start, annotations[0][0].end), (0, 5));
        assert_eq!(annotations[1][0].style, MaskedSyntax);
    }

    #[test]
    fn test_setext_h2() {
        let (document, _) = run(&["Subtitle", "---"]);
        assert_eq!(document.state(0), H2);
        assert_eq!(document.state(1), HeadlineEnd);
    }

    #[test]
    fn test_frontmatter_sequence() {
        let (document, annotations) = run(&["---", "title: t", "---", "body"]);
        assert_eq!(document.state(0), FrontmatterBlock);
        assert_eq!(document.state(1), FrontmatterBlock);
        assert_eq!(document.state(2), FrontmatterBlockEnd);
        assert_eq!(document.state(3), NoState);
        for (line, text) in ["---", "title: t", "---"].iter().enumerate() {
            assert_eq!(annotations[line][0].style, MaskedSyntax);
            assert_eq!(annotations[line][0].start, 0);
            assert_eq!(annotations[line][0].end, text.len());
        }
    }

    #[test]
    fn test_no_frontmatter_mid_document() {
        // a --- later in a document that does not open with one stays a
        // ruler/underline construct
        let (document, _) = run(&["intro", "", "---"]);
        assert_eq!(document.state(2), NoState);
    }

    #[test]
    fn test_unterminated_constructs_propagate() {
        let (document, _) = run(&["```rust", "let x;", "still code"]);
        assert_eq!(document.state(1), CodeRust);
        assert_eq!(document.state(2), CodeRust);

        let (document, _) = run(&["<!-- open", "inside", "inside too"]);
        assert_eq!(document.state(2), Comment);
    }

    #[test]
    fn test_comment_block_closes() {
        let (document, _) = run(&["<!-- open", "middle", "done -->", "text"]);
        assert_eq!(document.state(0), Comment);
        assert_eq!(document.state(1), Comment);
        assert_eq!(document.state(2), NoState);
        assert_eq!(document.state(3), NoState);
    }

    #[test]
    fn test_multiline_code_comment_pair() {
        let (document, _) = run(&["```cpp", "a /* start", "middle", "end */ b", "```"]);
        assert_eq!(document.state(1), CodeCppComment);
        assert_eq!(document.state(2), CodeCppComment);
        assert_eq!(document.state(3), CodeCpp);
        assert_eq!(document.state(4), CodeBlockEnd);
    }

    #[test]
    fn test_split_document_resumes_from_state() {
        // highlighting the tail from the saved boundary state matches the
        // single-pass result
        let lines = ["```js", "let a = 1;", "if (a) {}", "```", "tail"];
        let (document, full) = run(&lines);

        let mut highlighter = MarkdownHighlighter::new();
        let boundary = document.state(1);
        let result = highlighter.highlight_block(&LineInput::new(lines[2], boundary));
        assert_eq!(result.annotations, full[2]);
        assert_eq!(result.state, document.state(2));
    }

    #[test]
    fn test_idempotent_rehighlight() {
        let lines = ["# h", "* item **b**", "```py", "x = 1 # c", "```"];
        let (_, first) = run(&lines);
        let (_, second) = run(&lines);
        assert_eq!(first, second);
    }
}
