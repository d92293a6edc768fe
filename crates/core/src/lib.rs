//! manchester-gen-core: Random bit sequences and their Manchester line-code form
//!
//! This library provides the core components for a small signal-generation
//! pipeline that:
//! - Draws a random binary sequence from an injected random source
//! - Encodes it with the Manchester line code (one symbol pair per bit)
//! - Persists the encoded sequence as a single comma-delimited text record
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `sequence`: the source bit timeline
//! - `source`: random sequence generation
//! - `manchester`: the encoding transform (the core of the system)
//! - `record`: delimited record output
//! - `metrics`: observable run behavior
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Deterministic**: Seeded randomness makes runs reproducible
//! - **Pure stages**: Each stage consumes a value and produces a new one;
//!   the only side effect is the final record write

pub mod error;
pub mod manchester;
pub mod metrics;
pub mod record;
pub mod sequence;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
