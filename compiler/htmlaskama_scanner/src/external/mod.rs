//! Plugin lifecycle expected by the host parser.
//!
//! The host creates one scanner per parse, asks it to serialize its state
//! at every token boundary, and restores that state when it re-parses from
//! an earlier point. This scanner has no state: creation allocates nothing
//! and the serialized form is always empty.

use thiserror::Error;
use tracing::debug;

use crate::cursor::CharacterCursor;
use crate::kind::{RequestedKinds, TokenKind};
use crate::scanner;

/// Length of the serialized scanner state.
pub const SERIALIZED_STATE_LEN: usize = 0;

/// Errors surfaced by the scanner lifecycle.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScannerError {
    /// The host tried to restore a payload that `serialize` never writes.
    #[error("unexpected {len}-byte scanner state; the scanner is stateless")]
    UnexpectedState { len: usize },
}

/// The external scanner as seen by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExternalScanner;

/// The scanner carries no data.
const _: () = assert!(std::mem::size_of::<ExternalScanner>() == 0);

#[allow(
    clippy::unused_self,
    reason = "methods mirror the host plugin signatures"
)]
impl ExternalScanner {
    pub fn create() -> Self {
        ExternalScanner
    }

    /// Release the scanner. Nothing is allocated, so nothing is freed.
    pub fn destroy(self) {}

    /// Scan with the host's `valid_symbols` array.
    ///
    /// See [`scanner::scan`] for the recognition rules.
    pub fn scan<C: CharacterCursor + ?Sized>(
        &self,
        cursor: &mut C,
        valid_symbols: &[bool],
    ) -> Option<TokenKind> {
        scanner::scan(cursor, RequestedKinds::from_valid_symbols(valid_symbols))
    }

    /// Write the scanner state into `buffer`, returning the bytes written.
    pub fn serialize(&self, _buffer: &mut [u8]) -> usize {
        SERIALIZED_STATE_LEN
    }

    /// Restore state written by [`serialize`](Self::serialize).
    ///
    /// Only the empty payload can have come from `serialize`.
    pub fn deserialize(&mut self, payload: &[u8]) -> Result<(), ScannerError> {
        if payload.len() == SERIALIZED_STATE_LEN {
            return Ok(());
        }
        debug!(len = payload.len(), "rejecting scanner state payload");
        Err(ScannerError::UnexpectedState { len: payload.len() })
    }
}
