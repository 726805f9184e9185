//! Owned template source for [`SourceCursor`].
//!
//! The copy ends with a single `0x00` sentinel, so the cursor's lookahead
//! at end of input is `'\0'` without a bounds check. Construction also
//! records where each line starts, for `line:column` positions in reports,
//! and the two encoding problems a template can carry into rendered output:
//! a leading UTF-8 BOM, and NUL characters that a host comparing the
//! lookahead against `'\0'` would take for end of input.
//!
//! Issues are values for the caller to report. The scanner itself treats
//! every byte before the sentinel as content.

use crate::SourceCursor;

/// Template source followed by a `0x00` sentinel.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00]`.
    buf: Vec<u8>,
    source_len: u32,
    /// Byte offset of each line start; `line_starts[0] == 0`.
    line_starts: Vec<u32>,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue found while building a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position of the issue.
    pub pos: u32,
    /// Byte length of the offending sequence.
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// U+FEFF at the very start; it would be emitted as leading content.
    Utf8Bom,
    /// U+0000 inside the template.
    InteriorNull,
}

impl EncodingIssueKind {
    pub fn description(self) -> &'static str {
        match self {
            EncodingIssueKind::Utf8Bom => "UTF-8 byte order mark",
            EncodingIssueKind::InteriorNull => "null byte in template content",
        }
    }
}

impl SourceBuffer {
    /// Copy `source`, append the sentinel and index lines and issues.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `source_len`; content
    /// past that point is never scanned.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(bytes);
        buf.push(0);

        let mut encoding_issues = Vec::new();
        if source.starts_with('\u{FEFF}') {
            encoding_issues.push(EncodingIssue {
                kind: EncodingIssueKind::Utf8Bom,
                pos: 0,
                len: 3,
            });
        }
        encoding_issues.extend(offsets_of(0, bytes).map(|pos| EncodingIssue {
            kind: EncodingIssueKind::InteriorNull,
            pos,
            len: 1,
        }));

        let line_starts = std::iter::once(0)
            .chain(offsets_of(b'\n', bytes).map(|pos| pos + 1))
            .collect();

        Self {
            buf,
            source_len: u32::try_from(bytes.len()).unwrap_or(u32::MAX),
            line_starts,
            encoding_issues,
        }
    }

    /// Source bytes, without the sentinel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`SourceCursor`] positioned at byte 0.
    pub fn cursor(&self) -> SourceCursor<'_> {
        SourceCursor::new(&self.buf, self.source_len)
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }

    /// 1-based `(line, column)` of byte offset `pos`.
    ///
    /// The column counts characters, not bytes. Offsets past the end clamp
    /// to the end of the source.
    pub fn line_col(&self, pos: u32) -> (u32, u32) {
        let pos = pos.min(self.source_len);
        let line_idx = self.line_starts.partition_point(|&start| start <= pos) - 1;
        let line_start = self.line_starts[line_idx] as usize;
        let before = &self.as_bytes()[line_start..pos as usize];
        let col = std::str::from_utf8(before).map_or(before.len(), |s| s.chars().count());
        let line = u32::try_from(line_idx + 1).unwrap_or(u32::MAX);
        (line, u32::try_from(col + 1).unwrap_or(u32::MAX))
    }
}

/// Offsets of every `needle` byte in `haystack`, stopping at `u32::MAX`.
fn offsets_of(needle: u8, haystack: &[u8]) -> impl Iterator<Item = u32> + '_ {
    memchr::memchr_iter(needle, haystack).map_while(|at| u32::try_from(at).ok())
}

#[cfg(test)]
mod tests;
