//! Error types for parsing suits and faces.

use thiserror::Error;

/// Errors that can occur when parsing a [`Suit`](crate::Suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseSuitError {
    /// Input is empty.
    #[error("suit is empty")]
    Empty,
    /// Input does not name a suit.
    #[error("unknown suit")]
    Unknown,
}

/// Errors that can occur when parsing a [`Face`](crate::Face).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFaceError {
    /// Input is empty.
    #[error("face is empty")]
    Empty,
    /// Input is a number outside 2 through 10.
    #[error("face number out of range")]
    OutOfRange,
    /// Input is neither a named face nor a number.
    #[error("unknown face")]
    Unknown,
}
