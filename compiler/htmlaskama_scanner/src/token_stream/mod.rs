//! Repeated scanning over an in-memory source.
//!
//! A real host interleaves external scans with its own grammar-driven
//! lexing. [`TokenStream`] is the degenerate host that only ever asks for a
//! fixed set of kinds, which is enough to drive the scanner over a whole
//! file for tests and inspection.

use std::iter::FusedIterator;

use crate::cursor::{CharacterCursor, SourceCursor, Span};
use crate::kind::{RequestedKinds, TokenKind};
use crate::scanner;
use crate::SourceBuffer;

/// A token produced by one accepted scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Run one scan and apply the host contract to `cursor`.
///
/// On acceptance the cursor resumes after the token; on rejection it is
/// left where it was.
pub fn next_token(cursor: &mut SourceCursor<'_>, requested: RequestedKinds) -> Option<Token> {
    let kind = scanner::scan(cursor, requested);
    let span = cursor.finish_scan(kind.is_some());
    kind.zip(span).map(|(kind, span)| Token { kind, span })
}

/// Iterator of tokens scanned with a fixed [`RequestedKinds`].
///
/// Ends at end of input, when no requested kind matches, or when a scan
/// accepts an empty token (which would repeat forever).
#[derive(Clone, Debug)]
pub struct TokenStream<'a> {
    cursor: SourceCursor<'a>,
    requested: RequestedKinds,
    done: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a SourceBuffer, requested: RequestedKinds) -> Self {
        TokenStream {
            cursor: source.cursor(),
            requested,
            done: false,
        }
    }

    /// Source text covered by `token`.
    pub fn text(&self, token: Token) -> &'a str {
        self.cursor.text(token.span)
    }

    /// Source not yet covered by a token.
    pub fn remaining(&self) -> &'a str {
        self.cursor.rest()
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done || self.cursor.is_eof() {
            return None;
        }
        match next_token(&mut self.cursor, self.requested) {
            Some(token) if !token.span.is_empty() => Some(token),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for TokenStream<'_> {}

#[cfg(test)]
mod tests;
