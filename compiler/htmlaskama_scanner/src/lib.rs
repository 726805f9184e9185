//! External content scanner for the `htmlaskama` template grammar.
//!
//! The grammar handles tags, attributes and the `{{`/`{%` openers itself.
//! It calls into this crate where a context-free rule cannot describe the
//! token: "everything up to `%}`", "everything up to the next `<`, `{` or
//! `%` unless escaped", the tail of an HTML comment, and the end of a macro
//! call argument.
//!
//! # Layers
//!
//! - [`SourceBuffer`] / [`SourceCursor`]: in-memory host cursor
//! - [`CharacterCursor`]: the capability a host hands to the scanner
//! - [`scan`]: priority dispatch over the five recognizers
//! - [`ExternalScanner`]: stateless plugin lifecycle
//! - [`TokenStream`]: repeated scanning with a fixed [`RequestedKinds`]
//!
//! The scanner keeps no state between calls, so every entry point is a
//! function of the cursor and the requested kinds.

mod cursor;
mod external;
mod kind;
pub mod scanner;
mod source_buffer;
mod token_stream;

pub use cursor::{CharacterCursor, SourceCursor, Span};
pub use external::{ExternalScanner, ScannerError, SERIALIZED_STATE_LEN};
pub use kind::{RequestedKinds, TokenKind};
pub use scanner::scan;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use token_stream::{next_token, Token, TokenStream};
