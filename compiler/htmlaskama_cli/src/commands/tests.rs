use super::scan::{encoding_warnings, render};
use super::*;
use htmlaskama_scanner::SourceBuffer;
use pretty_assertions::assert_eq;

// === Kind lists ===

#[test]
fn parse_single_kind() {
    assert_eq!(parse_kinds("comment"), Ok(RequestedKinds::HTML_COMMENT));
}

#[test]
fn parse_kind_list_with_spaces() {
    assert_eq!(
        parse_kinds("statement, expression"),
        Ok(RequestedKinds::STATEMENT_CONTENT | RequestedKinds::EXPRESSION_CONTENT)
    );
}

#[test]
fn parse_unknown_kind() {
    assert_eq!(
        parse_kinds("content,tag"),
        Err(KindParseError::Unknown("tag".to_owned()))
    );
}

#[test]
fn parse_empty_list() {
    assert_eq!(parse_kinds(""), Err(KindParseError::Empty));
    assert_eq!(parse_kinds(" , "), Err(KindParseError::Empty));
}

#[test]
fn labels_round_trip() {
    for kind in TokenKind::ALL {
        assert_eq!(parse_kinds(kind_label(kind)), Ok(kind.flag()));
    }
}

// === Rendering ===

#[test]
fn render_stream_with_trailer() {
    let buf = SourceBuffer::new("Hi <b>");
    let options = ScanOptions {
        requested: RequestedKinds::HTML_CONTENT,
        once: false,
    };
    assert_eq!(
        render(&buf, &options),
        vec![
            "content @ 0..3 \"Hi \"".to_owned(),
            "(stopped with 3 unscanned bytes: \"<b>\")".to_owned(),
        ]
    );
}

#[test]
fn render_single_scan() {
    let buf = SourceBuffer::new("x %} y %}");
    let options = ScanOptions {
        requested: RequestedKinds::STATEMENT_CONTENT,
        once: true,
    };
    assert_eq!(render(&buf, &options), vec!["statement @ 0..4 \"x %}\"".to_owned()]);
}

#[test]
fn render_single_scan_without_token() {
    let buf = SourceBuffer::new("plain");
    let options = ScanOptions {
        requested: RequestedKinds::HTML_COMMENT,
        once: true,
    };
    assert_eq!(render(&buf, &options), vec!["(no token)".to_owned()]);
}

#[test]
fn default_options_request_everything() {
    let options = ScanOptions::default();
    assert_eq!(options.requested, RequestedKinds::all());
    assert!(!options.once);
}

#[test]
fn encoding_warnings_use_line_and_column() {
    let buf = SourceBuffer::new("\u{FEFF}<p>\n  a\0b</p>");
    assert_eq!(
        encoding_warnings("page.html", &buf),
        vec![
            "warning: page.html:1:1: UTF-8 byte order mark".to_owned(),
            "warning: page.html:2:4: null byte in template content".to_owned(),
        ]
    );
}

#[test]
fn clean_source_has_no_warnings() {
    let buf = SourceBuffer::new("<p>ok</p>");
    assert!(encoding_warnings("page.html", &buf).is_empty());
}
