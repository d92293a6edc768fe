//! Error types for the Manchester generator.
//!
//! All operations return structured errors rather than panicking.
//! Every failure is an inspectable value, never an absent result.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Sequence: non-binary values offered to a bit sequence
/// - Encoding: malformed input reaching the Manchester transform
/// - I/O: writing the output record
#[derive(Debug, Error)]
pub enum Error {
    /// Bit sequence construction failed (non-binary element)
    #[error("sequence error: {0}")]
    Sequence(#[from] SequenceError),

    /// Manchester encoding failed (non-binary element in input)
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Record I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Bit sequence errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// An element outside {0, 1} was offered to checked construction
    #[error("invalid bit {value} at index {index}: bits must be 0 or 1")]
    InvalidBit { index: usize, value: u8 },
}

/// Manchester encoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// An input element outside {0, 1} was encountered.
    ///
    /// The whole encode call fails; no partial output is produced.
    #[error("invalid symbol {value} at index {index}: expected 0 or 1")]
    InvalidSymbol { index: usize, value: u8 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
