//! Manchester line-code transform.
//!
//! Manchester coding maps each source bit to a fixed pair of line-level
//! symbols, one per half bit period. Because the two symbols of a pair are
//! always complementary, every bit period contains a signal transition,
//! which is what lets a receiver recover the clock from the line itself.
//!
//! # Mapping
//!
//! ```text
//! +-----+----------------+------------------------+
//! | bit | symbol pair    | line behavior          |
//! +-----+----------------+------------------------+
//! |  0  | (Low, High)    | low-to-high transition |
//! |  1  | (High, Low)    | high-to-low transition |
//! +-----+----------------+------------------------+
//! ```
//!
//! This is the original (G. E. Thomas) polarity convention. IEEE 802.3
//! uses the opposite assignment; the two are not interchangeable, and this
//! crate implements only the convention above.
//!
//! # Failure behavior
//!
//! Encoding is all-or-nothing: the first input element outside {0, 1} fails
//! the whole call with the offending index and value, and no partial output
//! is returned.

use crate::error::{EncodingError, Result};
use crate::sequence::BitSequence;

/// Symbols per encoded bit.
pub const SYMBOLS_PER_BIT: usize = 2;

/// A line-level signal value for one half bit period.
///
/// Distinct from a source bit: a `Symbol` is what appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Low line level, rendered as digit 0
    Low,
    /// High line level, rendered as digit 1
    High,
}

impl Symbol {
    /// The decimal digit used to serialize this symbol.
    pub fn as_digit(self) -> u8 {
        match self {
            Symbol::Low => 0,
            Symbol::High => 1,
        }
    }
}

/// The ordered pair of symbols encoding one source bit.
///
/// # Invariants
/// - The two symbols are always complementary (never equal); both
///   constructors below produce complementary pairs, and there is no other
///   way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolPair {
    first: Symbol,
    second: Symbol,
}

impl SymbolPair {
    /// The pair for a source bit, or `None` if the value is not 0 or 1.
    pub fn for_bit(bit: u8) -> Option<SymbolPair> {
        match bit {
            0 => Some(SymbolPair {
                first: Symbol::Low,
                second: Symbol::High,
            }),
            1 => Some(SymbolPair {
                first: Symbol::High,
                second: Symbol::Low,
            }),
            _ => None,
        }
    }

    /// Symbol for the first half bit period.
    pub fn first(self) -> Symbol {
        self.first
    }

    /// Symbol for the second half bit period.
    pub fn second(self) -> Symbol {
        self.second
    }
}

/// An immutable, ordered sequence of line symbols.
///
/// Built by concatenating the symbol pair for each source bit in order, so
/// the pair for source index `i` occupies positions `2i` and `2i + 1` and
/// the total length is twice the source length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManchesterSequence {
    symbols: Vec<Symbol>,
}

impl ManchesterSequence {
    /// Number of symbols (twice the number of encoded bits).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols as a slice, in wire order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Iterate over the decimal digit rendering of each symbol.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.symbols.iter().map(|s| s.as_digit())
    }
}

impl std::fmt::Display for ManchesterSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol.as_digit())?;
        }
        write!(f, "]")
    }
}

/// Encode a bit sequence into its Manchester representation.
///
/// Stateless and order-preserving: identical input always yields identical
/// output, and the pair for `seq[i]` lands at output positions `2i` and
/// `2i + 1`. An empty input encodes to an empty output.
///
/// # Errors
/// Returns `EncodingError::InvalidSymbol` with the position and value of
/// the first element outside {0, 1}. Nothing is substituted or truncated;
/// the call fails as a whole.
pub fn encode(seq: &BitSequence) -> Result<ManchesterSequence> {
    let mut symbols = Vec::with_capacity(seq.len() * SYMBOLS_PER_BIT);

    for (index, &value) in seq.iter().enumerate() {
        let pair = SymbolPair::for_bit(value)
            .ok_or(EncodingError::InvalidSymbol { index, value })?;
        symbols.push(pair.first());
        symbols.push(pair.second());
    }

    Ok(ManchesterSequence { symbols })
}
