//! Recognizers for the tokens the grammar cannot describe, and their dispatch.
//!
//! # Design
//!
//! [`scan`] walks [`PRIORITY`] and tries the recognizer of every requested
//! kind until one succeeds. Comment and raw-content recognition come first:
//! their terminators (`-->`, or any of `<`, `{`, `%`) can appear inside what
//! a delimiter scan would otherwise swallow.
//!
//! Two failure policies coexist:
//! - [`scan_comment`] soft-fails: no `--` prefix, or no `-->` before end of
//!   input. It may have read up to end of input by then, so [`scan`]
//!   rewinds the cursor before the next requested kind is tried.
//! - every other recognizer always succeeds; a missing terminator makes the
//!   token run to end of input and the grammar rejects it higher up.
//!
//! Recognizers only talk to the [`CharacterCursor`], so they hold no state
//! and are safe to run from any number of parses at once.

use tracing::trace;

use crate::cursor::CharacterCursor;
use crate::kind::{RequestedKinds, TokenKind};

/// Order in which requested kinds are tried (highest priority first).
pub const PRIORITY: [TokenKind; 5] = [
    TokenKind::HtmlComment,
    TokenKind::HtmlContent,
    TokenKind::MacroArgumentEnd,
    TokenKind::StatementContent,
    TokenKind::ExpressionContent,
];

/// Produce at most one external token.
///
/// Returns the kind of the recognized token, or `None` when no requested
/// recognizer matched and the host should tokenize with the grammar.
/// The token end is whatever the winning recognizer committed on `cursor`.
/// Each recognizer starts at the same character: a rejecting one is
/// rewound before the next is tried.
pub fn scan<C: CharacterCursor + ?Sized>(
    cursor: &mut C,
    requested: RequestedKinds,
) -> Option<TokenKind> {
    for kind in PRIORITY {
        if !requested.contains_kind(kind) {
            continue;
        }
        trace!(%kind, "attempt");
        if recognize(kind, cursor) {
            trace!(%kind, "accept");
            return Some(kind);
        }
        trace!(%kind, "reject");
        cursor.rewind();
    }
    None
}

/// Run the recognizer for a single kind.
pub fn recognize<C: CharacterCursor + ?Sized>(kind: TokenKind, cursor: &mut C) -> bool {
    match kind {
        TokenKind::HtmlComment => scan_comment(cursor),
        TokenKind::HtmlContent => scan_html_content(cursor),
        TokenKind::MacroArgumentEnd => scan_macro_argument_end(cursor),
        TokenKind::StatementContent => scan_until_sequence(cursor, STATEMENT_CLOSE),
        TokenKind::ExpressionContent => scan_until_sequence(cursor, EXPRESSION_CLOSE),
    }
}

// ─── Delimiter-terminated content ─────────────────────────────────────

/// Two-character closing delimiter.
///
/// [`scan_until_sequence`] restarts its match from scratch on a mismatch
/// instead of falling back to the longest overlap. That is only exact for
/// two-character sequences, which is why this type cannot hold more.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClosingSequence([char; 2]);

impl ClosingSequence {
    pub const fn new(first: char, second: char) -> Self {
        ClosingSequence([first, second])
    }

    pub const fn chars(self) -> [char; 2] {
        self.0
    }
}

/// Closes a `{% ... %}` statement.
pub const STATEMENT_CLOSE: ClosingSequence = ClosingSequence::new('%', '}');
/// Closes a `{{ ... }}` expression.
pub const EXPRESSION_CLOSE: ClosingSequence = ClosingSequence::new('}', '}');

/// Consume through the first occurrence of `closing`, or to end of input.
///
/// The committed end trails the read position while a partial match is in
/// progress, so a false start (`%` not followed by `}`) is only added to
/// the token once it is known not to be the delimiter. The delimiter itself
/// is part of the token. Always succeeds.
pub fn scan_until_sequence<C: CharacterCursor + ?Sized>(
    cursor: &mut C,
    closing: ClosingSequence,
) -> bool {
    let sequence = closing.chars();
    let mut matched = 0;
    cursor.mark_end();
    while !cursor.is_eof() {
        if cursor.current() == sequence[matched] {
            cursor.advance(false);
            matched += 1;
            if matched == sequence.len() {
                cursor.mark_end();
                return true;
            }
        } else if matched > 0 {
            // False start: it is content. Re-examine this character as a
            // possible first delimiter character (`%%}`).
            matched = 0;
            cursor.mark_end();
        } else {
            cursor.advance(false);
            cursor.mark_end();
        }
    }
    // A trailing partial match at end of input is content too.
    cursor.mark_end();
    true
}

// ─── HTML comments ────────────────────────────────────────────────────

/// Consume an HTML comment tail: `--`, the comment body, then `-->`.
///
/// Fails without reading anything when the lookahead is not `-`. A run
/// of two or more dashes followed by `>` closes the comment; any other
/// character breaks the run. End of input before `-->` is a failure, with
/// the whole remaining input read; callers rewind.
pub fn scan_comment<C: CharacterCursor + ?Sized>(cursor: &mut C) -> bool {
    if cursor.current() != '-' {
        return false;
    }
    cursor.advance(false);
    if cursor.current() != '-' {
        return false;
    }
    cursor.advance(false);

    let mut dashes = 0u32;
    while !cursor.is_eof() {
        match cursor.current() {
            '-' => dashes += 1,
            '>' if dashes >= 2 => {
                cursor.advance(false);
                cursor.mark_end();
                return true;
            }
            _ => dashes = 0,
        }
        cursor.advance(false);
    }
    false
}

// ─── Raw HTML content ─────────────────────────────────────────────────

/// Characters that may open a tag or template syntax.
#[inline]
fn is_content_stop(c: char) -> bool {
    matches!(c, '<' | '{' | '%')
}

/// Consume raw text up to the next unescaped `<`, `{` or `%`.
///
/// Each backslash toggles the escape flag once. A stop character met while
/// the flag is set is ordinary content and clears the flag. The end is
/// committed after every consumed character, so the token covers exactly
/// the text before the stop character. Always succeeds, possibly with an
/// empty token when the lookahead is already a stop character.
pub fn scan_html_content<C: CharacterCursor + ?Sized>(cursor: &mut C) -> bool {
    let mut escaped = false;
    cursor.mark_end();
    while !cursor.is_eof() {
        let c = cursor.current();
        if c == '\\' {
            escaped = !escaped;
        } else if is_content_stop(c) {
            if !escaped {
                break;
            }
            escaped = false;
        }
        cursor.advance(false);
        cursor.mark_end();
    }
    true
}

// ─── Macro call arguments ─────────────────────────────────────────────

/// Bracket nesting inside a single macro argument.
///
/// A `,` or `)` only ends the argument at the top level, so
/// `f(a, b), c` ends at the second comma.
#[derive(Clone, Copy, Debug, Default)]
struct ArgumentDepth {
    paren: u32,
    bracket: u32,
}

impl ArgumentDepth {
    fn is_top_level(self) -> bool {
        self.paren == 0 && self.bracket == 0
    }
}

/// Consume one macro argument through its `,` or `)` terminator.
///
/// Spaces and newlines after the terminator end up in this token, so the
/// next argument starts at its first character. Always succeeds; without a terminator the token runs to end
/// of input.
pub fn scan_macro_argument_end<C: CharacterCursor + ?Sized>(cursor: &mut C) -> bool {
    let mut depth = ArgumentDepth::default();
    cursor.mark_end();
    while !cursor.is_eof() {
        match cursor.current() {
            ',' | ')' if depth.is_top_level() => {
                cursor.advance(false);
                skip_whitespace(cursor);
                cursor.mark_end();
                return true;
            }
            '(' => depth.paren += 1,
            ')' => depth.paren = depth.paren.saturating_sub(1),
            '[' => depth.bracket += 1,
            ']' => depth.bracket = depth.bracket.saturating_sub(1),
            _ => {}
        }
        cursor.advance(false);
        cursor.mark_end();
    }
    true
}

/// Consume a run of spaces and newlines.
///
/// The run is part of the terminator token, so it is advanced as
/// significant: a host may drop skipped characters from the token.
fn skip_whitespace<C: CharacterCursor + ?Sized>(cursor: &mut C) {
    while matches!(cursor.current(), ' ' | '\n') {
        cursor.advance(false);
    }
}
