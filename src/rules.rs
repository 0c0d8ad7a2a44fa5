//! Pattern rules for the Markdown inline engine
//!
//! Each rule pairs a compiled regex with a target style plus the flags
//! driving masked/real formatting. The two tables are built once per
//! highlighter; their insertion order is the evaluation order and is part
//! of the design (italic before bold so bold can overwrite, masked dimming
//! before the real style).

use regex::Regex;

use crate::state::HighlighterState;

/// Option flags accepted by `set_highlighting_options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightingOptions {
    /// Style the whole block-quote line instead of only the `>` markers.
    pub fully_highlighted_block_quote: bool,
}

/// A single inline highlighting rule.
pub struct HighlightingRule {
    /// Compiled pattern; numbered groups only, anchored per line.
    pub pattern: Regex,
    /// Style applied to the captured group.
    pub state: HighlighterState,
    /// Fast-reject substrings; the line must contain at least one
    /// non-empty entry for the pattern to be tried at all.
    pub should_contain: [&'static str; 3],
    /// Group receiving the target style; 0 means the whole match.
    pub capturing_group: usize,
    /// Group dimmed as masked syntax when `capturing_group > 0`.
    pub masked_group: usize,
    /// Set the line's terminal state to `state` when a match is found.
    pub use_state_as_current_block_state: bool,
    /// Skip this rule when a terminal state is already set on the line.
    pub disable_if_current_state_is_set: bool,
}

impl HighlightingRule {
    /// A rule with default flags. The patterns are compile-time constants;
    /// a malformed one is a programmer error caught the first time a
    /// highlighter is constructed.
    fn new(state: HighlighterState, pattern: &str, contains: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("built-in highlighting pattern must compile"),
            state,
            should_contain: [contains, "", ""],
            capturing_group: 0,
            masked_group: 0,
            use_state_as_current_block_state: false,
            disable_if_current_state_is_set: false,
        }
    }

    /// True when the line passes the fast-reject substring check.
    pub fn should_try(&self, text: &str) -> bool {
        self.should_contain
            .iter()
            .any(|needle| !needle.is_empty() && text.contains(needle))
    }
}

/// Rules applied before heading detection.
pub fn pre_rules(options: HighlightingOptions) -> Vec<HighlightingRule> {
    use HighlighterState::*;

    let mut rules = Vec::new();

    // reference definitions of reference links
    rules.push(HighlightingRule::new(
        MaskedSyntax,
        r"^\[.+?\]: \w+://.+$",
        "://",
    ));

    // unordered lists
    let mut rule = HighlightingRule::new(List, r"^\s*[-*+]\s", "- ");
    rule.should_contain = ["- ", "* ", "+ "];
    rule.use_state_as_current_block_state = true;
    rules.push(rule);

    // ordered lists
    let mut rule = HighlightingRule::new(List, r"^\s*\d+\.\s", ". ");
    rule.use_state_as_current_block_state = true;
    rules.push(rule);

    // checked checkboxes
    let mut rule =
        HighlightingRule::new(CheckBoxChecked, r"^\s*[+|\-|\*] (\[x\])(\s+)", "- [x]");
    rule.should_contain = ["- [x]", "* [x]", "+ [x]"];
    rule.capturing_group = 1;
    rules.push(rule);

    // unchecked checkboxes
    let mut rule =
        HighlightingRule::new(CheckBoxUnChecked, r"^\s*[+|\-|\*] (\[( |)\])(\s+)", "- [");
    rule.should_contain = ["- [", "* [", "+ ["];
    rule.capturing_group = 1;
    rules.push(rule);

    // block quotes
    rules.push(HighlightingRule::new(
        BlockQuote,
        if options.fully_highlighted_block_quote {
            r"^\s*(>\s*.+)"
        } else {
            r"^\s*(>\s*)+"
        },
        "> ",
    ));

    // horizontal rulers
    let mut rule = HighlightingRule::new(HorizontalRuler, r"^([*\-_]\s?){3,}$", "---");
    rule.should_contain = ["---", "***", "___"];
    rules.push(rule);

    rules
}

/// Rules applied after heading detection.
pub fn post_rules() -> Vec<HighlightingRule> {
    use HighlighterState::*;

    let mut rules = Vec::new();

    // italic before bold so that bold can overwrite it; no space is
    // allowed after the opening * to keep unordered lists out
    let mut rule = HighlightingRule::new(
        Italic,
        r"(?:^|[^*\x08])(?:\*([^* ][^*]*?)\*)(?:[^*\x08]|$)",
        "*",
    );
    rule.capturing_group = 1;
    rules.push(rule);

    let mut rule = HighlightingRule::new(Italic, r"\b_([^_]+)_\b", "_");
    rule.capturing_group = 1;
    rules.push(rule);

    // bold
    let mut rule = HighlightingRule::new(Bold, r"\B\*{2}(.+?)\*{2}\B", "**");
    rule.capturing_group = 1;
    rules.push(rule);

    let mut rule = HighlightingRule::new(Bold, r"\b__(.+?)__\b", "__");
    rule.capturing_group = 1;
    rules.push(rule);

    // strike through is dimmed rather than drawn through
    let mut rule = HighlightingRule::new(MaskedSyntax, r"~{2}(.+?)~{2}", "~");
    rule.capturing_group = 1;
    rules.push(rule);

    // urls without any other markup
    rules.push(HighlightingRule::new(Link, r"\b\w+?://[^\s>]+", "://"));

    // urls inside <>
    let mut rule = HighlightingRule::new(Link, r"<(\w+?://[^\s]+)>", "://");
    rule.capturing_group = 1;
    rules.push(rule);

    // links with <> that have a . in them
    let mut rule = HighlightingRule::new(Link, r"<([^\s`][^`]*?\.[^`]*?[^\s`])>", "<");
    rule.capturing_group = 1;
    rules.push(rule);

    // urls with title
    let mut rule = HighlightingRule::new(Link, r"\[([^\[\]]+)\]\((\S+|.+?)\)\B", "](");
    rule.capturing_group = 1;
    rules.push(rule);

    // urls with empty title
    let mut rule = HighlightingRule::new(Link, r"\[\]\((.+?)\)", "[](");
    rule.capturing_group = 1;
    rules.push(rule);

    // email links
    let mut rule = HighlightingRule::new(Link, r"<(.+?@.+?)>", "@");
    rule.capturing_group = 1;
    rules.push(rule);

    // reference links
    let mut rule = HighlightingRule::new(Link, r"\[(.+?)\]\[.+?\]", "[");
    rule.capturing_group = 1;
    rules.push(rule);

    // images with text
    let mut rule = HighlightingRule::new(Image, r"!\[(.+?)\]\(.+?\)", "![");
    rule.capturing_group = 1;
    rules.push(rule);

    // images without text
    let mut rule = HighlightingRule::new(Image, r"!\[\]\((.+?)\)", "![]");
    rule.capturing_group = 1;
    rules.push(rule);

    // image links
    let mut rule = HighlightingRule::new(Link, r"\[!\[(.+?)\]\(.+?\)\]\(.+?\)", "[![");
    rule.capturing_group = 1;
    rules.push(rule);

    // image links without text
    let mut rule = HighlightingRule::new(Link, r"\[!\[\]\(.+?\)\]\((.+?)\)", "[![](");
    rule.capturing_group = 1;
    rules.push(rule);

    // trailing spaces
    let mut rule = HighlightingRule::new(TrailingSpace, r"( +)$", " ");
    rule.capturing_group = 1;
    rules.push(rule);

    // inline code
    let mut rule = HighlightingRule::new(InlineCodeBlock, r"`(.+?)`", "`");
    rule.capturing_group = 1;
    rules.push(rule);

    // code blocks indented with a tab or four spaces, unless the line is
    // already claimed by a block construct
    let mut rule = HighlightingRule::new(CodeBlock, r"^((\t)|( {4,})).+$", "\t");
    rule.should_contain = ["\t", "    ", ""];
    rule.disable_if_current_state_is_set = true;
    rules.push(rule);

    // inline comments
    let mut rule = HighlightingRule::new(Comment, r"<!--(.+?)-->", "<!--");
    rule.capturing_group = 1;
    rules.push(rule);

    // Rmarkdown reference comments for academic papers
    rules.push(HighlightingRule::new(
        Comment,
        r"^\[.+?\]: # \(.+?\)$",
        "]: # (",
    ));

    // tables with a starting |
    rules.push(HighlightingRule::new(Table, r"^\|.+?\|$", "|"));

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HighlighterState::*;

    #[test]
    fn test_tables_build() {
        // constructing the tables exercises every pattern compile
        let pre = pre_rules(HighlightingOptions::default());
        let post = post_rules();
        assert!(!pre.is_empty());
        assert!(!post.is_empty());
    }

    #[test]
    fn test_italic_ordered_before_bold() {
        let post = post_rules();
        let italic = post.iter().position(|r| r.state == Italic).unwrap();
        let bold = post.iter().position(|r| r.state == Bold).unwrap();
        assert!(italic < bold);
    }

    #[test]
    fn test_fast_reject() {
        let pre = pre_rules(HighlightingOptions::default());
        let list = pre.iter().find(|r| r.state == List).unwrap();
        assert!(list.should_try("* item"));
        assert!(!list.should_try("plain text"));
    }

    #[test]
    fn test_block_quote_option_switches_pattern() {
        let underline = pre_rules(HighlightingOptions::default());
        let full = pre_rules(HighlightingOptions {
            fully_highlighted_block_quote: true,
        });
        let find = |rules: &[HighlightingRule]| {
            rules
                .iter()
                .find(|r| r.state == BlockQuote)
                .unwrap()
                .pattern
                .as_str()
                .to_string()
        };
        assert_ne!(find(&underline), find(&full));
        assert!(find(&full).contains(".+"));
    }

    #[test]
    fn test_checkbox_patterns() {
        let pre = pre_rules(HighlightingOptions::default());
        let checked = pre.iter().find(|r| r.state == CheckBoxChecked).unwrap();
        let caps = checked.pattern.captures("- [x] done").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "[x]");

        let unchecked = pre.iter().find(|r| r.state == CheckBoxUnChecked).unwrap();
        let caps = unchecked.pattern.captures("* [ ] open").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "[ ]");
    }
}
