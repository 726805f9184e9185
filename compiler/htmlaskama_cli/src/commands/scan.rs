//! `scan` command: run the external scanner over a file.

use htmlaskama_scanner::{next_token, RequestedKinds, SourceBuffer, Token, TokenStream};
use tracing::debug;

use super::{kind_label, read_file};

#[derive(Clone, Copy, Debug)]
pub struct ScanOptions {
    pub requested: RequestedKinds,
    /// Run a single scan instead of scanning until the stream ends.
    pub once: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            requested: RequestedKinds::all(),
            once: false,
        }
    }
}

/// Scan a file and print each token.
pub fn scan_file(path: &str, options: &ScanOptions) {
    let content = read_file(path);
    let buf = SourceBuffer::new(&content);
    debug!(path, len = buf.len(), requested = ?options.requested, "scanning");

    for warning in encoding_warnings(path, &buf) {
        eprintln!("{warning}");
    }

    println!("Tokens for '{path}':");
    for line in render(&buf, options) {
        println!("  {line}");
    }
}

/// One `path:line:col` warning per encoding issue in `buf`.
pub(super) fn encoding_warnings(path: &str, buf: &SourceBuffer) -> Vec<String> {
    buf.encoding_issues()
        .iter()
        .map(|issue| {
            let (line, col) = buf.line_col(issue.pos);
            format!("warning: {path}:{line}:{col}: {}", issue.kind.description())
        })
        .collect()
}

/// Scan `buf` and render one line per token, plus a trailer describing
/// where scanning stopped.
pub(super) fn render(buf: &SourceBuffer, options: &ScanOptions) -> Vec<String> {
    let mut lines = Vec::new();

    if options.once {
        let mut cursor = buf.cursor();
        match next_token(&mut cursor, options.requested) {
            Some(token) => lines.push(format_token(token, cursor.text(token.span))),
            None => lines.push("(no token)".to_owned()),
        }
        return lines;
    }

    let mut stream = TokenStream::new(buf, options.requested);
    let tokens: Vec<Token> = stream.by_ref().collect();
    for token in tokens {
        lines.push(format_token(token, stream.text(token)));
    }
    let remaining = stream.remaining();
    if !remaining.is_empty() {
        lines.push(format!(
            "(stopped with {} unscanned bytes: {remaining:?})",
            remaining.len()
        ));
    }
    lines
}

fn format_token(token: Token, text: &str) -> String {
    format!("{} @ {} {text:?}", kind_label(token.kind), token.span)
}
