//! Error types that may occur while lexing an SVG value
use thiserror::Error;

/// Lexing errors that can be encountered by parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The end of an input was reached before parsing finished
    #[error("Unexpected end of input while parsing")]
    EndOfInput,
    /// An invalid number was parsed.
    #[error("Invalid number")]
    InvalidNumber,
    /// Parsing is done but there is trailing input.
    #[error("Unexpected trailing content after parsing")]
    ExpectedDone,
}
