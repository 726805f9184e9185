use super::*;
use crate::CharacterCursor;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert!(buf.encoding_issues().is_empty());
    assert_eq!(buf.cursor().current(), '\0');
}

#[test]
fn template_source() {
    let source = "<p>{{ user.name }}</p>";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn sentinel_follows_source() {
    let buf = SourceBuffer::new("{%");
    let mut cursor = buf.cursor();
    cursor.advance(false);
    cursor.advance(false);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), '\0');
}

#[test]
fn utf8_multibyte_source() {
    let source = "caf\u{e9} \u{1F600} {% if x %}";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert!(buf.encoding_issues().is_empty());
}

// === Line / Column ===

#[test]
fn line_col_on_first_line() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.line_col(0), (1, 1));
    assert_eq!(buf.line_col(2), (1, 3));
}

#[test]
fn line_col_after_newlines() {
    let buf = SourceBuffer::new("<p>\n  {{ x }}\n</p>");
    assert_eq!(buf.line_col(3), (1, 4));
    assert_eq!(buf.line_col(4), (2, 1));
    assert_eq!(buf.line_col(6), (2, 3));
    assert_eq!(buf.line_col(14), (3, 1));
}

#[test]
fn line_col_counts_characters() {
    // `é` is two bytes, one column.
    let buf = SourceBuffer::new("\u{e9}x");
    assert_eq!(buf.line_col(2), (1, 2));
}

#[test]
fn line_col_clamps_past_end() {
    let buf = SourceBuffer::new("a\nb\n");
    assert_eq!(buf.line_col(4), (3, 1));
    assert_eq!(buf.line_col(100), (3, 1));
}

// === Encoding Issues ===

#[test]
fn utf8_bom_detected() {
    let buf = SourceBuffer::new("\u{FEFF}<html>");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn bom_not_at_start_is_content() {
    let buf = SourceBuffer::new("a\u{FEFF}");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn interior_nulls_detected_with_positions() {
    let buf = SourceBuffer::new("a\0b\0");
    let positions: Vec<u32> = buf.encoding_issues().iter().map(|i| i.pos).collect();
    assert_eq!(positions, vec![1, 3]);
    assert!(buf
        .encoding_issues()
        .iter()
        .all(|i| i.kind == EncodingIssueKind::InteriorNull && i.len == 1));
}

#[test]
fn bom_and_null_both_reported() {
    let buf = SourceBuffer::new("\u{FEFF}x\0");
    let kinds: Vec<_> = buf.encoding_issues().iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![EncodingIssueKind::Utf8Bom, EncodingIssueKind::InteriorNull]
    );
}

#[test]
fn issue_descriptions_are_distinct() {
    assert_ne!(
        EncodingIssueKind::Utf8Bom.description(),
        EncodingIssueKind::InteriorNull.description()
    );
}
