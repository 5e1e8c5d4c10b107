//! Error types for the drawing session.

use crate::draw::DrawKind;
use thiserror::Error;

/// Errors reported by session-level operations.
///
/// Pointer-gesture handlers never return these; they signal "not handled"
/// with a `bool` instead so the host can let events propagate. Errors are
/// reserved for synchronous API misuse such as selecting an unknown kind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A draw-type name did not match any known shape kind.
    #[error("unknown draw type '{0}'")]
    UnknownDrawType(String),

    /// The kind is known but has no constructor registered on this session.
    #[error("draw type '{0}' is not enabled on this session")]
    DisabledDrawType(DrawKind),
}
