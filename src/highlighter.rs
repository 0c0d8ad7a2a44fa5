//! The Markdown highlighter
//!
//! One `highlight_block` call per line: the block state machine decides
//! whether the line belongs to a multi-line construct (frontmatter, fenced
//! code, HTML comment); only otherwise does the inline engine run its rule
//! tables around heading detection. The caller threads each line's
//! terminal state into the next call and owns re-requests through the
//! dirty queue (see `Document` for a ready-made driver).

use std::collections::HashMap;

use regex::Captures;

use crate::code;
use crate::lang;
use crate::rules::{self, HighlightingOptions, HighlightingRule};
use crate::state::HighlighterState;
use crate::style::{default_text_formats, Color, StyleAnnotation, TextFormat};

/// One line of input plus the context the engine needs around it.
#[derive(Debug, Clone, Copy)]
pub struct LineInput<'a> {
    /// The line text, without its trailing newline.
    pub text: &'a str,
    /// Position of the line in the document.
    pub index: usize,
    /// Terminal state produced by the previous line (`NoState` on line 0).
    pub prev_state: HighlighterState,
    /// Text of the previous line, used by setext underlines.
    pub prev_text: Option<&'a str>,
    /// Text of the next line, used for setext lookahead.
    pub next_text: Option<&'a str>,
    /// Whether the document's very first line is exactly `---`.
    pub has_frontmatter: bool,
}

impl<'a> LineInput<'a> {
    /// Input for a line without document context.
    pub fn new(text: &'a str, prev_state: HighlighterState) -> Self {
        Self {
            text,
            index: 0,
            prev_state,
            prev_text: None,
            next_text: None,
            has_frontmatter: false,
        }
    }
}

/// Output of highlighting one line.
#[derive(Debug)]
pub struct HighlightResult {
    /// Styled spans in paint order.
    pub annotations: Vec<StyleAnnotation>,
    /// Terminal state to feed into the next line.
    pub state: HighlighterState,
    /// Set when a setext underline promoted the previous line to a
    /// heading; the stored state of that line must be replaced and the
    /// line re-highlighted (it is queued in the dirty queue).
    pub restyle_previous: Option<HighlighterState>,
}

/// Annotation collector for one line while the engine runs.
pub(crate) struct LineJob<'a> {
    pub text: &'a str,
    pub state: HighlighterState,
    pub annotations: Vec<StyleAnnotation>,
    formats: &'a HashMap<HighlighterState, TextFormat>,
}

impl<'a> LineJob<'a> {
    pub(crate) fn new(
        text: &'a str,
        state: HighlighterState,
        formats: &'a HashMap<HighlighterState, TextFormat>,
    ) -> Self {
        Self {
            text,
            state,
            annotations: Vec::new(),
            formats,
        }
    }

    /// The theme format for a style, or the empty format.
    pub(crate) fn format_of(&self, state: HighlighterState) -> TextFormat {
        self.formats.get(&state).cloned().unwrap_or_default()
    }

    /// Annotates `start..end` with a style and its theme format.
    pub(crate) fn set_style(&mut self, start: usize, end: usize, style: HighlighterState) {
        let format = self.format_of(style);
        self.set_format(start, end, style, format);
    }

    /// Annotates `start..end` with an explicit format. Out-of-range ends
    /// are clamped; adjacent equal spans coalesce.
    pub(crate) fn set_format(
        &mut self,
        start: usize,
        end: usize,
        style: HighlighterState,
        format: TextFormat,
    ) {
        let end = end.min(self.text.len());
        if start >= end {
            return;
        }
        if let Some(last) = self.annotations.last_mut() {
            if last.end == start && last.style == style && last.format == format {
                last.end = end;
                return;
            }
        }
        self.annotations.push(StyleAnnotation {
            start,
            end,
            style,
            format,
        });
    }
}

/// The highlighter: rule tables, theme map, option flags and the
/// per-document dirty queue. Construction compiles the rule tables; they
/// are immutable afterwards (`set_highlighting_options` rebuilds them).
pub struct MarkdownHighlighter {
    formats: HashMap<HighlighterState, TextFormat>,
    options: HighlightingOptions,
    rules_pre: Vec<HighlightingRule>,
    rules_post: Vec<HighlightingRule>,
    dirty: Vec<usize>,
}

impl Default for MarkdownHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownHighlighter {
    pub fn new() -> Self {
        Self::with_options(HighlightingOptions::default())
    }

    pub fn with_options(options: HighlightingOptions) -> Self {
        Self {
            formats: default_text_formats(12.0),
            options,
            rules_pre: rules::pre_rules(options),
            rules_post: rules::post_rules(),
            dirty: Vec::new(),
        }
    }

    pub fn options(&self) -> HighlightingOptions {
        self.options
    }

    /// Replaces the option flags and rebuilds the rule tables.
    pub fn set_highlighting_options(&mut self, options: HighlightingOptions) {
        self.options = options;
        self.rules_pre = rules::pre_rules(options);
        self.rules_post = rules::post_rules();
    }

    /// Replaces the whole theme map.
    pub fn set_text_formats(&mut self, formats: HashMap<HighlighterState, TextFormat>) {
        self.formats = formats;
    }

    /// Replaces the format of one style.
    pub fn set_text_format(&mut self, state: HighlighterState, format: TextFormat) {
        self.formats.insert(state, format);
    }

    pub fn text_format(&self, state: HighlighterState) -> Option<&TextFormat> {
        self.formats.get(&state)
    }

    /// Background of the code-block style, if the theme sets one.
    pub fn code_block_background(&self) -> Option<Color> {
        self.formats
            .get(&HighlighterState::CodeBlock)
            .and_then(|format| format.background)
    }

    /// Queues a line for re-highlighting; a line is queued at most once.
    pub fn add_dirty_block(&mut self, line: usize) {
        if !self.dirty.contains(&line) {
            self.dirty.push(line);
        }
    }

    /// Takes the oldest queued line, FIFO.
    pub fn pop_dirty_block(&mut self) -> Option<usize> {
        if self.dirty.is_empty() {
            None
        } else {
            Some(self.dirty.remove(0))
        }
    }

    pub fn has_dirty_blocks(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn clear_dirty_blocks(&mut self) {
        self.dirty.clear();
    }

    /// Highlights one line. Annotation order is paint order; the returned
    /// state is the line's terminal state.
    pub fn highlight_block(&mut self, input: &LineInput) -> HighlightResult {
        let mut job = LineJob::new(input.text, HighlighterState::NoState, &self.formats);
        let mut restyle_previous = None;

        let consumed = highlight_frontmatter_block(&mut job, input)
            || highlight_fenced_code(&mut job, input)
            || highlight_comment_block(&mut job, input);

        if !consumed && !input.text.is_empty() {
            apply_rules(&mut job, &self.rules_pre);
            restyle_previous = highlight_headline(&mut job, input);
            apply_rules(&mut job, &self.rules_post);
        }

        let annotations = job.annotations;
        let state = job.state;

        // setext promotion must not recurse into the previous line here;
        // it goes through the dirty queue instead
        if let Some(promoted) = restyle_previous {
            if input.prev_state != promoted && input.index > 0 {
                self.add_dirty_block(input.index - 1);
            }
        }

        HighlightResult {
            annotations,
            state,
            restyle_previous,
        }
    }
}

/// Frontmatter machine. Only a document whose first line is exactly `---`
/// has frontmatter; inside it every line is fully masked.
fn highlight_frontmatter_block(job: &mut LineJob, input: &LineInput) -> bool {
    use HighlighterState::*;

    if !input.has_frontmatter {
        return false;
    }

    if job.text == "---" {
        let found_end = input.prev_state == FrontmatterBlock;
        // only one frontmatter block per document
        if !found_end && input.index != 0 {
            return false;
        }
        job.state = if found_end {
            FrontmatterBlockEnd
        } else {
            FrontmatterBlock
        };
        job.set_style(0, job.text.len(), MaskedSyntax);
        true
    } else if input.prev_state == FrontmatterBlock {
        job.state = FrontmatterBlock;
        job.set_style(0, job.text.len(), MaskedSyntax);
        true
    } else {
        false
    }
}

/// Code-fence machine: fence lines toggle the block and are masked, lines
/// inside carry the language state and go to the code scanner.
fn highlight_fenced_code(job: &mut LineJob, input: &LineInput) -> bool {
    use HighlighterState::*;

    let trimmed = job.text.trim_start();
    if trimmed.starts_with("```") {
        if !input.prev_state.is_code_block_state() {
            let tag = trimmed[3..].to_lowercase();
            job.state = lang::language_for_tag(&tag).unwrap_or(CodeBlock);
        } else {
            job.state = CodeBlockEnd;
        }

        // the fence keeps the code block's font size under the mask
        let mut masked = job.format_of(MaskedSyntax);
        if let Some(size) = job.format_of(CodeBlock).font_point_size {
            masked.font_point_size = Some(size);
        }
        job.set_format(0, job.text.len(), MaskedSyntax, masked);
        true
    } else if input.prev_state.is_code_block_state() {
        job.state = input.prev_state;
        code::highlight(job);
        true
    } else {
        false
    }
}

/// HTML comment machine. A line that both opens and closes a comment is
/// left to the inline comment rule.
fn highlight_comment_block(job: &mut LineJob, input: &LineInput) -> bool {
    use HighlighterState::*;

    let trimmed = job.text.trim();
    if trimmed.starts_with("<!--") && trimmed.contains("-->") {
        return false;
    }

    let highlight = if trimmed.starts_with("<!--")
        || (!trimmed.ends_with("-->") && input.prev_state == Comment)
    {
        job.state = Comment;
        true
    } else {
        // the closing line is styled but does not propagate the state
        trimmed.ends_with("-->") && input.prev_state == Comment
    };

    if highlight {
        job.set_style(0, job.text.len(), Comment);
    }
    highlight
}

/// ATX and setext heading detection, with one line of lookahead for
/// underlines still to come.
fn highlight_headline(job: &mut LineJob, input: &LineInput) -> Option<HighlighterState> {
    use HighlighterState::*;

    let bytes = job.text.as_bytes();

    if bytes[0] == b'#' {
        if bytes.len() == 1 {
            return None;
        }
        let mut level = 1;
        while level < bytes.len() && bytes[level] == b'#' && level < 6 {
            level += 1;
        }
        if level < bytes.len() && bytes[level] == b' ' {
            let Some(state) = HighlighterState::heading(level as u8) else {
                return None;
            };
            job.set_style(0, job.text.len(), state);
            // dim the markers, keeping the heading's font size
            let mut masked = job.format_of(MaskedSyntax);
            if let Some(size) = job.format_of(state).font_point_size {
                masked.font_point_size = Some(size);
            }
            job.set_format(0, level, MaskedSyntax, masked);
            job.state = state;
            return None;
        }
    }

    // setext underlines of the line above
    if has_only_char(job.text, b'=') {
        return highlight_subheadline(job, input, H1);
    }
    if has_only_char(job.text, b'-') {
        return highlight_subheadline(job, input, H2);
    }

    // lookahead: an underline on the next line promotes this one
    let next = input.next_text.unwrap_or("");
    if has_only_char(next, b'=') {
        job.set_style(0, job.text.len(), H1);
        job.state = H1;
    } else if has_only_char(next, b'-') {
        job.set_style(0, job.text.len(), H2);
        job.state = H2;
    }
    None
}

fn has_only_char(text: &str, c: u8) -> bool {
    !text.is_empty() && text.bytes().all(|b| b == c)
}

/// Styles a setext underline and reports the heading state its previous
/// line must take.
fn highlight_subheadline(
    job: &mut LineJob,
    input: &LineInput,
    state: HighlighterState,
) -> Option<HighlighterState> {
    use HighlighterState::*;

    let prev_is_text = input.prev_text.map_or(false, |text| !text.is_empty());
    if (input.prev_state == state || input.prev_state == NoState) && prev_is_text {
        // the underline is masked at the heading's font size
        let mut masked = job.format_of(MaskedSyntax);
        if let Some(size) = job.format_of(state).font_point_size {
            masked.font_point_size = Some(size);
        }
        job.set_format(0, job.text.len(), MaskedSyntax, masked);
        job.state = HeadlineEnd;
        Some(state)
    } else {
        None
    }
}

/// Runs one rule table in order over the line.
fn apply_rules(job: &mut LineJob, rules: &[HighlightingRule]) {
    use HighlighterState::*;

    for rule in rules {
        if rule.disable_if_current_state_is_set && job.state != NoState {
            continue;
        }
        if !rule.should_try(job.text) {
            continue;
        }

        let matches: Vec<Captures> = rule.pattern.captures_iter(job.text).collect();
        if matches.is_empty() {
            continue;
        }
        if rule.use_state_as_current_block_state {
            job.state = rule.state;
        }

        for caps in &matches {
            // inside headings the inline styles are folded into the
            // heading format; inline code is passed through unmodified
            let in_heading = job.state.is_heading() && rule.state != InlineCodeBlock;

            // dim the masked group before painting the real style
            if rule.capturing_group > 0 && !in_heading {
                if let Some(masked) = caps.get(rule.masked_group) {
                    let mut format = job.format_of(MaskedSyntax);
                    if let Some(size) = job.format_of(rule.state).font_point_size {
                        format.font_point_size = Some(size);
                    }
                    job.set_format(masked.start(), masked.end(), MaskedSyntax, format);
                }
            }

            if in_heading {
                apply_heading_style(job, rule, caps);
            } else if let Some(real) = caps.get(rule.capturing_group) {
                job.set_style(real.start(), real.end(), rule.state);
            }
        }
    }
}

/// Inline styles inside H1..H6 lines: italic tilts the heading format,
/// bold keeps it (headings are already bold), links take the heading's
/// font size. Everything else is dropped.
fn apply_heading_style(job: &mut LineJob, rule: &HighlightingRule, caps: &Captures) {
    use HighlighterState::*;

    let heading = job.state;
    let base = job.format_of(heading);

    match rule.state {
        Italic => {
            if let Some(real) = caps.get(rule.capturing_group) {
                let mut format = base;
                format.italic = true;
                job.set_format(real.start(), real.end(), Italic, format);
            }
        }
        Bold => {
            if let Some(real) = caps.get(rule.capturing_group) {
                job.set_format(real.start(), real.end(), Bold, base);
            }
        }
        Link => {
            if rule.capturing_group == 1 {
                if let Some(real) = caps.get(1) {
                    let mut format = job.format_of(Link);
                    format.font_point_size = base.font_point_size;
                    job.set_format(real.start(), real.end(), Link, format);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HighlighterState::*;

    fn highlight(text: &str, prev_state: HighlighterState) -> HighlightResult {
        let mut highlighter = MarkdownHighlighter::new();
        highlighter.highlight_block(&LineInput::new(text, prev_state))
    }

    fn spans(result: &HighlightResult, style: HighlighterState) -> Vec<(usize, usize)> {
        result
            .annotations
            .iter()
            .filter(|a| a.style == style)
            .map(|a| (a.start, a.end))
            .collect()
    }

    #[test]
    fn test_atx_heading() {
        let result = highlight("# Heading one", NoState);
        assert_eq!(result.state, H1);
        assert_eq!(spans(&result, H1), vec![(0, 13)]);
        // the marker is dimmed on top of the heading style
        assert_eq!(spans(&result, MaskedSyntax), vec![(0, 1)]);

        let result = highlight("### deep", NoState);
        assert_eq!(result.state, H3);
        assert_eq!(spans(&result, H3), vec![(0, 8)]);
        assert_eq!(spans(&result, MaskedSyntax), vec![(0, 3)]);
    }

    #[test]
    fn test_seven_hashes_is_no_heading() {
        let result = highlight("####### too deep", NoState);
        assert_eq!(result.state, NoState);
    }

    #[test]
    fn test_hash_without_space_is_no_heading() {
        let result = highlight("#hashtag", NoState);
        assert_eq!(result.state, NoState);
    }

    #[test]
    fn test_setext_underline() {
        let mut highlighter = MarkdownHighlighter::new();
        let mut input = LineInput::new("=====", NoState);
        input.index = 1;
        input.prev_text = Some("Title");
        let result = highlighter.highlight_block(&input);
        assert_eq!(result.state, HeadlineEnd);
        assert_eq!(result.restyle_previous, Some(H1));
        assert_eq!(highlighter.pop_dirty_block(), Some(0));
        assert_eq!(spans(&result, MaskedSyntax), vec![(0, 5)]);
        // masked underline carries the heading point size
        let masked = &result.annotations[0];
        assert_eq!(masked.format.font_point_size, Some(12.0 * 1.6));
    }

    #[test]
    fn test_setext_lookahead_promotes_current_line() {
        let mut highlighter = MarkdownHighlighter::new();
        let mut input = LineInput::new("Title", NoState);
        input.next_text = Some("---");
        let result = highlighter.highlight_block(&input);
        assert_eq!(result.state, H2);
        assert_eq!(spans(&result, H2), vec![(0, 5)]);
    }

    #[test]
    fn test_setext_not_after_blank_line() {
        let mut highlighter = MarkdownHighlighter::new();
        let mut input = LineInput::new("---", NoState);
        input.index = 3;
        input.prev_text = Some("");
        let result = highlighter.highlight_block(&input);
        // stays a horizontal ruler
        assert_eq!(result.state, NoState);
        assert!(!spans(&result, HorizontalRuler).is_empty());
        assert!(result.restyle_previous.is_none());
    }

    #[test]
    fn test_list_item_with_emphasis() {
        let result = highlight("* **strong** and *em*", NoState);
        assert_eq!(result.state, List);
        // inner ranges carry the real styles
        assert_eq!(spans(&result, Bold), vec![(4, 10)]);
        assert_eq!(spans(&result, Italic), vec![(18, 20)]);
        // the surrounding markers are masked
        assert!(spans(&result, MaskedSyntax)
            .iter()
            .any(|&(start, end)| start <= 2 && end >= 12));
    }

    #[test]
    fn test_bold_not_italic() {
        let result = highlight("a **bold** word", NoState);
        assert_eq!(spans(&result, Bold), vec![(4, 8)]);
    }

    #[test]
    fn test_link_with_title() {
        let result = highlight("[text](http://x)", NoState);
        // the bare-url rule fires first inside the parentheses, then the
        // titled-link rule masks the whole construct and paints the text
        assert_eq!(spans(&result, MaskedSyntax), vec![(0, 16)]);
        let links = spans(&result, Link);
        assert_eq!(links.last(), Some(&(1, 5)));
        let masked_at = result
            .annotations
            .iter()
            .position(|a| a.style == MaskedSyntax)
            .unwrap();
        let text_link_at = result
            .annotations
            .iter()
            .position(|a| a.style == Link && a.start == 1)
            .unwrap();
        assert!(text_link_at > masked_at);
    }

    #[test]
    fn test_bare_url() {
        let result = highlight("see https://example.org now", NoState);
        assert_eq!(spans(&result, Link), vec![(4, 23)]);
    }

    #[test]
    fn test_inline_code() {
        let result = highlight("use `let` here", NoState);
        assert_eq!(spans(&result, InlineCodeBlock), vec![(5, 8)]);
    }

    #[test]
    fn test_checkbox_rules() {
        let result = highlight("- [x] done", NoState);
        assert_eq!(spans(&result, CheckBoxChecked), vec![(2, 5)]);
        let result = highlight("- [ ] open", NoState);
        assert_eq!(spans(&result, CheckBoxUnChecked), vec![(2, 5)]);
    }

    #[test]
    fn test_block_quote_options() {
        let mut highlighter = MarkdownHighlighter::new();
        let result = highlighter.highlight_block(&LineInput::new("> quoted text", NoState));
        assert_eq!(spans(&result, BlockQuote), vec![(0, 2)]);

        highlighter.set_highlighting_options(HighlightingOptions {
            fully_highlighted_block_quote: true,
        });
        let result = highlighter.highlight_block(&LineInput::new("> quoted text", NoState));
        assert_eq!(spans(&result, BlockQuote), vec![(0, 13)]);
    }

    #[test]
    fn test_table_line() {
        let result = highlight("| a | b |", NoState);
        assert_eq!(spans(&result, Table), vec![(0, 9)]);
    }

    #[test]
    fn test_trailing_space() {
        let result = highlight("text  ", NoState);
        assert_eq!(spans(&result, TrailingSpace), vec![(4, 6)]);
    }

    #[test]
    fn test_fence_opens_language_block() {
        let result = highlight("```cpp", NoState);
        assert_eq!(result.state, CodeCpp);
        assert_eq!(spans(&result, MaskedSyntax), vec![(0, 6)]);
    }

    #[test]
    fn test_fence_unknown_language_falls_back() {
        let result = highlight("```whatever", NoState);
        assert_eq!(result.state, CodeBlock);
    }

    #[test]
    fn test_fence_closes_block() {
        let result = highlight("```", CodeCpp);
        assert_eq!(result.state, CodeBlockEnd);
        assert_eq!(spans(&result, MaskedSyntax), vec![(0, 3)]);
    }

    #[test]
    fn test_code_interior_has_no_inline_markdown() {
        let result = highlight("* **strong** [link](x)", CodeCpp);
        assert_eq!(result.state, CodeCpp);
        for style in [Bold, Italic, Link, List] {
            assert!(spans(&result, style).is_empty());
        }
        assert_eq!(result.annotations[0].style, CodeBlock);
    }

    #[test]
    fn test_cpp_interior_scenario() {
        let result = highlight("int x = 0x2A;", CodeCpp);
        assert_eq!(result.state, CodeCpp);
        assert_eq!(spans(&result, CodeType), vec![(0, 3)]);
        assert_eq!(spans(&result, CodeNumLiteral), vec![(8, 12)]);
    }

    #[test]
    fn test_comment_block_machine() {
        let open = highlight("<!-- begin", NoState);
        assert_eq!(open.state, Comment);
        assert_eq!(spans(&open, Comment), vec![(0, 10)]);

        let interior = highlight("middle", Comment);
        assert_eq!(interior.state, Comment);

        let close = highlight("end -->", Comment);
        assert_eq!(close.state, NoState);
        assert_eq!(spans(&close, Comment), vec![(0, 7)]);
    }

    #[test]
    fn test_inline_comment_stays_inline() {
        let result = highlight("<!-- note --> text", NoState);
        assert_eq!(result.state, NoState);
        assert_eq!(spans(&result, Comment), vec![(4, 10)]);
    }

    #[test]
    fn test_heading_inline_styles_fold_into_heading() {
        let result = highlight("# a *slanted* word", NoState);
        assert_eq!(result.state, H1);
        let italic = result
            .annotations
            .iter()
            .find(|a| a.style == Italic)
            .expect("italic inside heading");
        assert!(italic.format.italic);
        // the heading format carries through
        assert!(italic.format.bold);
        assert_eq!(italic.format.font_point_size, Some(12.0 * 1.6));
        // no masked dimming of inline markers inside headings; only the
        // heading marker itself is dimmed
        assert_eq!(spans(&result, MaskedSyntax), vec![(0, 1)]);
    }

    #[test]
    fn test_determinism() {
        let mut highlighter = MarkdownHighlighter::new();
        let input = LineInput::new("* a *b* `c` [d](e) 0x2A", NoState);
        let first = highlighter.highlight_block(&input);
        let second = highlighter.highlight_block(&input);
        assert_eq!(first.annotations, second.annotations);
        assert_eq!(first.state, second.state);
    }

    #[test]
    fn test_annotations_stay_in_line_bounds() {
        let lines = [
            "# head",
            "* list **bold** _em_",
            "```rust",
            "let x = \"s\";",
            "```",
            "| t |",
            "> q",
            "text  ",
        ];
        let mut highlighter = MarkdownHighlighter::new();
        let mut prev = NoState;
        for line in lines {
            let result = highlighter.highlight_block(&LineInput::new(line, prev));
            for annotation in &result.annotations {
                assert!(annotation.start < annotation.end);
                assert!(annotation.end <= line.len());
            }
            prev = result.state;
        }
    }

    #[test]
    fn test_indented_code_disabled_when_state_set() {
        // a list item that happens to be indented keeps its list state
        let result = highlight("    * item", NoState);
        assert_eq!(result.state, List);
        assert!(spans(&result, CodeBlock).is_empty());

        let result = highlight("    plain indented code", NoState);
        assert!(!spans(&result, CodeBlock).is_empty());
    }

    #[test]
    fn test_empty_line_carries_code_state() {
        let result = highlight("", CodePython);
        assert_eq!(result.state, CodePython);
        assert!(result.annotations.is_empty());
    }

    #[test]
    fn test_dirty_queue_dedup_fifo() {
        let mut highlighter = MarkdownHighlighter::new();
        highlighter.add_dirty_block(3);
        highlighter.add_dirty_block(1);
        highlighter.add_dirty_block(3);
        assert_eq!(highlighter.pop_dirty_block(), Some(3));
        assert_eq!(highlighter.pop_dirty_block(), Some(1));
        assert_eq!(highlighter.pop_dirty_block(), None);

        highlighter.add_dirty_block(2);
        highlighter.clear_dirty_blocks();
        assert!(!highlighter.has_dirty_blocks());
    }
}
