//! Highlighter states
//!
//! Every line of a document ends in exactly one `HighlighterState`; the
//! next line's highlighting starts from it. The same enum doubles as the
//! style identifier attached to annotations, so hosts need a single theme
//! map keyed by this type.

/// Per-line highlighter state and style identifier.
///
/// The discriminants fall into three bands plus internal sentinels:
/// Markdown inline/block styles (small values), code-scanner styles
/// (1000+), and language states (200..=241). Language states come in
/// pairs: for every language with `/* */` comments, the "inside a block
/// comment" state is the odd value directly above the language's base
/// value. The numeric values are stable so hosts may persist them between
/// sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum HighlighterState {
    NoState = -1,
    Link = 0,
    Image = 3,
    CodeBlock = 4,
    CodeBlockComment = 5,
    Italic = 7,
    Bold = 8,
    List = 9,
    Comment = 11,
    H1 = 12,
    H2 = 13,
    H3 = 14,
    H4 = 15,
    H5 = 16,
    H6 = 17,
    BlockQuote = 18,
    HorizontalRuler = 21,
    Table = 22,
    InlineCodeBlock = 23,
    MaskedSyntax = 24,
    FrontmatterBlock = 27,
    TrailingSpace = 28,
    CheckBoxUnChecked = 29,
    CheckBoxChecked = 30,

    // internal sentinels
    CodeBlockEnd = 100,
    HeadlineEnd = 101,
    FrontmatterBlockEnd = 102,

    // code-scanner styles
    CodeKeyWord = 1000,
    CodeString = 1001,
    CodeComment = 1002,
    CodeType = 1003,
    CodeOther = 1004,
    CodeNumLiteral = 1005,
    CodeBuiltIn = 1006,

    // language states; comment variants are base + 1
    CodeCpp = 200,
    CodeCppComment = 201,
    CodeJs = 202,
    CodeJsComment = 203,
    CodeC = 204,
    CodeCComment = 205,
    CodeBash = 206,
    CodePHP = 208,
    CodePHPComment = 209,
    CodeQML = 210,
    CodeQMLComment = 211,
    CodePython = 212,
    CodeRust = 214,
    CodeRustComment = 215,
    CodeJava = 216,
    CodeJavaComment = 217,
    CodeCSharp = 218,
    CodeCSharpComment = 219,
    CodeGo = 220,
    CodeGoComment = 221,
    CodeV = 222,
    CodeVComment = 223,
    CodeSQL = 224,
    CodeJSON = 226,
    CodeXML = 228,
    CodeCSS = 230,
    CodeCSSComment = 231,
    CodeTypeScript = 232,
    CodeTypeScriptComment = 233,
    CodeYAML = 234,
    CodeINI = 236,
    CodeTaggerScript = 238,
    CodeVex = 240,
    CodeVexComment = 241,
}

impl HighlighterState {
    /// Numeric value of this state, as stored by hosts.
    pub fn value(self) -> i32 {
        self as i32
    }

    /// True for H1 through H6.
    pub fn is_heading(self) -> bool {
        self.heading_level().is_some()
    }

    /// Heading level (1..=6) if this is a heading state.
    pub fn heading_level(self) -> Option<u8> {
        use HighlighterState::*;
        match self {
            H1 => Some(1),
            H2 => Some(2),
            H3 => Some(3),
            H4 => Some(4),
            H5 => Some(5),
            H6 => Some(6),
            _ => None,
        }
    }

    /// Heading state for a level in 1..=6.
    pub fn heading(level: u8) -> Option<Self> {
        use HighlighterState::*;
        match level {
            1 => Some(H1),
            2 => Some(H2),
            3 => Some(H3),
            4 => Some(H4),
            5 => Some(H5),
            6 => Some(H6),
            _ => None,
        }
    }

    /// True for any state in the language band (200..=241).
    pub fn is_language(self) -> bool {
        (200..=241).contains(&self.value())
    }

    /// True if a line carrying this state is inside a fenced code block:
    /// the generic `CodeBlock`/`CodeBlockComment` pair or any language
    /// state.
    pub fn is_code_block_state(self) -> bool {
        matches!(
            self,
            HighlighterState::CodeBlock | HighlighterState::CodeBlockComment
        ) || self.is_language()
    }

    /// True while inside a `/* */` comment: the odd member of a language
    /// pair, or `CodeBlockComment`.
    pub fn in_comment(self) -> bool {
        self == HighlighterState::CodeBlockComment
            || (self.is_language() && self.value() % 2 != 0)
    }

    /// The in-comment partner of this state, for languages that have one.
    pub fn comment_variant(self) -> Option<Self> {
        use HighlighterState::*;
        match self {
            CodeBlock => Some(CodeBlockComment),
            CodeCpp => Some(CodeCppComment),
            CodeJs => Some(CodeJsComment),
            CodeC => Some(CodeCComment),
            CodePHP => Some(CodePHPComment),
            CodeQML => Some(CodeQMLComment),
            CodeRust => Some(CodeRustComment),
            CodeJava => Some(CodeJavaComment),
            CodeCSharp => Some(CodeCSharpComment),
            CodeGo => Some(CodeGoComment),
            CodeV => Some(CodeVComment),
            CodeCSS => Some(CodeCSSComment),
            CodeTypeScript => Some(CodeTypeScriptComment),
            CodeVex => Some(CodeVexComment),
            _ => None,
        }
    }

    /// Collapses an in-comment state back to its language base.
    pub fn without_comment(self) -> Self {
        use HighlighterState::*;
        match self {
            CodeBlockComment => CodeBlock,
            CodeCppComment => CodeCpp,
            CodeJsComment => CodeJs,
            CodeCComment => CodeC,
            CodePHPComment => CodePHP,
            CodeQMLComment => CodeQML,
            CodeRustComment => CodeRust,
            CodeJavaComment => CodeJava,
            CodeCSharpComment => CodeCSharp,
            CodeGoComment => CodeGo,
            CodeVComment => CodeV,
            CodeCSSComment => CodeCSS,
            CodeTypeScriptComment => CodeTypeScript,
            CodeVexComment => CodeVex,
            other => other,
        }
    }
}
