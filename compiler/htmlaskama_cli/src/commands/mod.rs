//! CLI command implementations.

mod scan;

use std::sync::Once;

use htmlaskama_scanner::scanner::PRIORITY;
use htmlaskama_scanner::{RequestedKinds, TokenKind};
use thiserror::Error;

pub use scan::{scan_file, ScanOptions};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Read a file, exiting with a message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KindParseError {
    #[error("unknown token kind '{0}' (expected one of: comment, content, macro-arg, statement, expression)")]
    Unknown(String),
    #[error("empty token kind list")]
    Empty,
}

/// Short command-line name of a kind.
pub fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::HtmlComment => "comment",
        TokenKind::HtmlContent => "content",
        TokenKind::MacroArgumentEnd => "macro-arg",
        TokenKind::StatementContent => "statement",
        TokenKind::ExpressionContent => "expression",
    }
}

/// Parse a comma-separated list of kind labels.
pub fn parse_kinds(list: &str) -> Result<RequestedKinds, KindParseError> {
    let mut requested = RequestedKinds::empty();
    for label in list.split(',').map(str::trim).filter(|l| !l.is_empty()) {
        let kind = TokenKind::ALL
            .into_iter()
            .find(|&kind| kind_label(kind) == label)
            .ok_or_else(|| KindParseError::Unknown(label.to_owned()))?;
        requested |= kind.flag();
    }
    if requested.is_empty() {
        return Err(KindParseError::Empty);
    }
    Ok(requested)
}

/// Print kinds in the order the scanner tries them.
pub fn list_kinds() {
    for (rank, kind) in PRIORITY.iter().enumerate() {
        println!("{:>2}. {:<11}{kind}", rank + 1, kind_label(*kind));
    }
}

#[cfg(test)]
mod tests;
