//! Token kinds produced by the external scanner and the per-call request set.

use std::fmt;

use bitflags::bitflags;

/// Token kind reported back to the host parser.
///
/// Discriminants follow the order of the grammar's `externals` list, which
/// is also the order of the host's `valid_symbols` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// Body of a `{{ ... }}` expression, through the closing `}}`.
    ExpressionContent = 0,
    /// Body of a `{% ... %}` statement, through the closing `%}`.
    StatementContent = 1,
    /// Tail of an HTML comment after `<!`, through the closing `-->`.
    HtmlComment = 2,
    /// One macro call argument through its `,` or `)` terminator.
    MacroArgumentEnd = 3,
    /// Raw HTML text up to the next unescaped `<`, `{` or `%`.
    HtmlContent = 4,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 5] = [
        TokenKind::ExpressionContent,
        TokenKind::StatementContent,
        TokenKind::HtmlComment,
        TokenKind::MacroArgumentEnd,
        TokenKind::HtmlContent,
    ];

    /// Index into the host's `valid_symbols` array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index()`](Self::index).
    pub const fn from_index(index: u8) -> Option<TokenKind> {
        match index {
            0 => Some(TokenKind::ExpressionContent),
            1 => Some(TokenKind::StatementContent),
            2 => Some(TokenKind::HtmlComment),
            3 => Some(TokenKind::MacroArgumentEnd),
            4 => Some(TokenKind::HtmlContent),
            _ => None,
        }
    }

    /// Name of the external symbol in the grammar.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::ExpressionContent => "_expression_content",
            TokenKind::StatementContent => "_statement_content",
            TokenKind::HtmlComment => "_html_comment",
            TokenKind::MacroArgumentEnd => "_macro_argument_end",
            TokenKind::HtmlContent => "_html_content",
        }
    }

    /// The request bit for this kind.
    #[inline]
    pub const fn flag(self) -> RequestedKinds {
        match self {
            TokenKind::ExpressionContent => RequestedKinds::EXPRESSION_CONTENT,
            TokenKind::StatementContent => RequestedKinds::STATEMENT_CONTENT,
            TokenKind::HtmlComment => RequestedKinds::HTML_COMMENT,
            TokenKind::MacroArgumentEnd => RequestedKinds::MACRO_ARGUMENT_END,
            TokenKind::HtmlContent => RequestedKinds::HTML_CONTENT,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Kinds the grammar can accept at the current parse state.
    ///
    /// Supplied fresh by the host on every call and never retained.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct RequestedKinds: u8 {
        const EXPRESSION_CONTENT = 1 << 0;
        const STATEMENT_CONTENT = 1 << 1;
        const HTML_COMMENT = 1 << 2;
        const MACRO_ARGUMENT_END = 1 << 3;
        const HTML_CONTENT = 1 << 4;
    }
}

impl RequestedKinds {
    /// Build the set from the host's boolean array.
    ///
    /// Entry `i` corresponds to the kind with discriminant `i`. A shorter
    /// array (the three-symbol grammar) leaves the remaining kinds unset;
    /// entries past the last kind are ignored.
    pub fn from_valid_symbols(valid_symbols: &[bool]) -> Self {
        TokenKind::ALL
            .iter()
            .zip(valid_symbols)
            .filter(|(_, valid)| **valid)
            .fold(RequestedKinds::empty(), |acc, (kind, _)| acc | kind.flag())
    }

    /// Build the set from a list of kinds.
    pub fn from_kinds(kinds: impl IntoIterator<Item = TokenKind>) -> Self {
        kinds
            .into_iter()
            .fold(RequestedKinds::empty(), |acc, kind| acc | kind.flag())
    }

    #[inline]
    pub fn contains_kind(self, kind: TokenKind) -> bool {
        self.contains(kind.flag())
    }

    /// Requested kinds in discriminant order.
    pub fn kinds(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL
            .into_iter()
            .filter(move |kind| self.contains_kind(*kind))
    }
}

impl From<TokenKind> for RequestedKinds {
    fn from(kind: TokenKind) -> Self {
        kind.flag()
    }
}
