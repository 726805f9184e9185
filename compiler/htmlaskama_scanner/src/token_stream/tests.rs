use super::*;
use pretty_assertions::assert_eq;

/// Helper: collect `(kind, text)` pairs and the unscanned remainder.
fn collect(source: &str, requested: RequestedKinds) -> (Vec<(TokenKind, String)>, String) {
    let buf = SourceBuffer::new(source);
    let mut stream = TokenStream::new(&buf, requested);
    let tokens: Vec<Token> = stream.by_ref().collect();
    let texts = tokens
        .iter()
        .map(|&token| (token.kind, stream.text(token).to_owned()))
        .collect();
    (texts, stream.remaining().to_owned())
}

#[test]
fn macro_arguments_stream() {
    let (tokens, rest) = collect("a, f(b, c),\n  d) %}", RequestedKinds::MACRO_ARGUMENT_END);
    assert_eq!(
        tokens,
        vec![
            (TokenKind::MacroArgumentEnd, "a, ".to_owned()),
            (TokenKind::MacroArgumentEnd, "f(b, c),\n  ".to_owned()),
            (TokenKind::MacroArgumentEnd, "d) ".to_owned()),
            (TokenKind::MacroArgumentEnd, "%}".to_owned()),
        ]
    );
    assert_eq!(rest, "");
}

#[test]
fn spans_tile_the_source() {
    let source = "x %} y %} z";
    let buf = SourceBuffer::new(source);
    let stream = TokenStream::new(&buf, RequestedKinds::STATEMENT_CONTENT);
    let spans: Vec<Span> = stream.map(|token| token.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(0, 4), Span::new(4, 9), Span::new(9, 11)]
    );
}

#[test]
fn stream_stops_on_empty_content_token() {
    let (tokens, rest) = collect("Hello <b>", RequestedKinds::HTML_CONTENT);
    assert_eq!(tokens, vec![(TokenKind::HtmlContent, "Hello ".to_owned())]);
    assert_eq!(rest, "<b>");
}

#[test]
fn stream_stops_on_rejection() {
    let (tokens, rest) = collect("-- a -->-- unterminated", RequestedKinds::HTML_COMMENT);
    assert_eq!(tokens, vec![(TokenKind::HtmlComment, "-- a -->".to_owned())]);
    assert_eq!(rest, "-- unterminated");
}

#[test]
fn empty_source_yields_nothing() {
    let (tokens, rest) = collect("", RequestedKinds::all());
    assert!(tokens.is_empty());
    assert_eq!(rest, "");
}

#[test]
fn stream_is_fused() {
    let buf = SourceBuffer::new("<p>");
    let mut stream = TokenStream::new(&buf, RequestedKinds::HTML_CONTENT);
    assert_eq!(stream.next(), None);
    assert_eq!(stream.next(), None);
}

#[test]
fn next_token_leaves_cursor_on_rejection() {
    let buf = SourceBuffer::new("- not a comment");
    let mut cursor = buf.cursor();
    assert_eq!(next_token(&mut cursor, RequestedKinds::HTML_COMMENT), None);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn next_token_reports_kind_and_span() {
    let buf = SourceBuffer::new("name }}<br>");
    let mut cursor = buf.cursor();
    let token = next_token(&mut cursor, RequestedKinds::all() - RequestedKinds::HTML_CONTENT);
    // MacroArgumentEnd outranks ExpressionContent and runs to end of input here.
    assert_eq!(
        token.map(|t| t.kind),
        Some(TokenKind::MacroArgumentEnd)
    );

    let mut cursor = buf.cursor();
    let token = next_token(&mut cursor, RequestedKinds::EXPRESSION_CONTENT);
    assert_eq!(
        token,
        Some(Token {
            kind: TokenKind::ExpressionContent,
            span: Span::new(0, 7),
        })
    );
    assert_eq!(cursor.rest(), "<br>");
}
