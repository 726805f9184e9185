//! Character cursor capability and the in-memory host cursor.
//!
//! A host hands the scanner a [`CharacterCursor`]: one character of
//! lookahead, a one-character advance, and a "commit the token end here"
//! operation. The read position and the committed end are independent, so
//! a recognizer may read ahead past the point it commits.
//!
//! [`SourceCursor`] is the host side of that contract for an in-memory
//! [`SourceBuffer`](crate::SourceBuffer). After each scan the caller
//! finishes it with [`SourceCursor::finish_scan`], which rewinds the read
//! position to the committed end (accepted) or to where the scan started
//! (rejected). Characters read past the committed end are never consumed.
//! Within a scan, [`CharacterCursor::rewind`] hands back everything a failed
//! recognizer read so the next one starts from the same character.

use std::fmt;

/// Capability the scanner uses to read input.
///
/// # Contract
///
/// - `current()` returns `'\0'` at end of input. Interior `'\0'` characters
///   are content; [`is_eof()`](Self::is_eof) is the only end test.
/// - `advance()` moves forward exactly one character and is never fallible.
///   At end of input it does nothing.
/// - `mark_end()` may be called any number of times; the last call before
///   the scan returns fixes the token end.
/// - `rewind()` returns to where the scan started and drops the committed
///   end, as if nothing had been read.
pub trait CharacterCursor {
    /// The lookahead character, or `'\0'` at end of input.
    fn current(&self) -> char;

    fn is_eof(&self) -> bool;

    /// Consume the lookahead character.
    ///
    /// `skip` marks the character as insignificant whitespace: skipped
    /// characters before the first significant one are left out of the
    /// token.
    fn advance(&mut self, skip: bool);

    /// Commit the current read position as the token end.
    fn mark_end(&mut self);

    /// Undo every advance and commit made since the scan started.
    fn rewind(&mut self);
}

impl<C: CharacterCursor + ?Sized> CharacterCursor for &mut C {
    #[inline]
    fn current(&self) -> char {
        (**self).current()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        (**self).is_eof()
    }

    #[inline]
    fn advance(&mut self, skip: bool) {
        (**self).advance(skip);
    }

    #[inline]
    fn mark_end(&mut self) {
        (**self).mark_end();
    }

    #[inline]
    fn rewind(&mut self) {
        (**self).rewind();
    }
}

/// Half-open byte range `start..end` in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Host cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot is a plain copy.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and `scan_start <= token_start <= pos <= source_len`.
#[derive(Clone, Copy, Debug)]
pub struct SourceCursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel).
    buf: &'a [u8],
    /// Length of actual source content (excludes the sentinel).
    source_len: u32,
    /// Where the current scan started; rejected scans rewind here.
    scan_start: u32,
    /// Start of the token being built (moves past leading skipped characters).
    token_start: u32,
    /// Current read position.
    pos: u32,
    /// Last committed token end, if any.
    marked_end: Option<u32>,
    /// Whether a significant character was consumed in this scan.
    significant: bool,
}

impl<'a> SourceCursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            source_len,
            scan_start: 0,
            token_start: 0,
            pos: 0,
            marked_end: None,
            significant: false,
        }
    }

    /// Current read position (byte offset).
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Start of the token being built.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// The committed token end, if `mark_end` was called during this scan.
    #[inline]
    pub fn marked_end(&self) -> Option<u32> {
        self.marked_end
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Close the current scan and return the token span if it was accepted.
    ///
    /// Accepted: the token runs from the token start to the committed end
    /// (or to the read position when nothing was committed), and reading
    /// resumes at that end. Rejected: reading resumes where the scan
    /// started, as if nothing had been consumed.
    pub fn finish_scan(&mut self, accepted: bool) -> Option<Span> {
        let span = if accepted {
            let end = self.marked_end.unwrap_or(self.pos).max(self.token_start);
            Some(Span::new(self.token_start, end))
        } else {
            None
        };
        if let Some(span) = span {
            self.scan_start = span.end;
        }
        self.rewind();
        span
    }

    /// Source text covered by `span`.
    ///
    /// Spans produced by [`finish_scan`](Self::finish_scan) always fall on
    /// character boundaries; any other span that does not yields `""`.
    pub fn text(&self, span: Span) -> &'a str {
        debug_assert!(span.end <= self.source_len, "span {span} exceeds source");
        let bytes = &self.buf[span.start as usize..span.end as usize];
        std::str::from_utf8(bytes).unwrap_or_default()
    }

    /// Remaining source from the read position.
    pub fn rest(&self) -> &'a str {
        self.text(Span::new(self.pos, self.source_len))
    }
}

impl CharacterCursor for SourceCursor<'_> {
    fn current(&self) -> char {
        let start = self.pos as usize;
        let width = Self::utf8_char_width(self.buf[start]) as usize;
        // Never read past the sentinel, whatever the lead byte claims.
        let end = (start + width).min(self.buf.len());
        std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    fn advance(&mut self, skip: bool) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.buf[self.pos as usize]);
        self.pos = (self.pos + width).min(self.source_len);
        if !skip {
            self.significant = true;
        } else if !self.significant {
            self.token_start = self.pos;
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked_end = Some(self.pos);
    }

    fn rewind(&mut self) {
        self.token_start = self.scan_start;
        self.pos = self.scan_start;
        self.marked_end = None;
        self.significant = false;
    }
}
