//! Source bit sequences.
//!
//! A `BitSequence` is the signal timeline: an ordered run of binary values
//! in the order they will be transmitted. It is produced once (by the
//! generator, or directly from a vector in tests) and never mutated.
//!
//! # Invariants
//! - Checked construction (`new`) guarantees every element is 0 or 1
//! - `from_raw` skips validation; the encoder re-validates element by
//!   element, so malformed values surface there with their position

use crate::error::{Result, SequenceError};

/// An immutable, ordered sequence of source bits.
///
/// Insertion order is significant: index `i` is the `i`-th bit period of
/// the signal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitSequence {
    bits: Vec<u8>,
}

impl BitSequence {
    /// Create a sequence, validating that every element is 0 or 1.
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidBit` identifying the first offending
    /// element.
    pub fn new(bits: Vec<u8>) -> Result<Self> {
        for (index, &value) in bits.iter().enumerate() {
            if value > 1 {
                return Err(SequenceError::InvalidBit { index, value }.into());
            }
        }
        Ok(Self { bits })
    }

    /// Create a sequence without validating the elements.
    ///
    /// Non-binary values are caught later by the encoder, which reports
    /// their position. Checked construction (`new`) is preferred wherever
    /// the data is meant to be well-formed.
    pub fn from_raw(bits: Vec<u8>) -> Self {
        Self { bits }
    }

    /// Number of bits in the sequence.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits as a slice, in timeline order.
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Iterate over the bits in timeline order.
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.bits.iter()
    }
}

impl std::fmt::Display for BitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, bit) in self.bits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", bit)?;
        }
        write!(f, "]")
    }
}
