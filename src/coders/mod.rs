//! Per-context entropy coders.
//!
//! The wired set is a closed, tagged-variant sum: [`Coder::Constant`] for
//! single-successor contexts, [`Coder::HuffmanBased`] for everything
//! else. [`growing_index`] holds an additional variant of the same
//! family that the coder factory never reaches — see its module docs.

mod constant;
mod huffman_based;
pub mod growing_index;

use crate::bitstream::BitStream;
use crate::table::NextList;
use crate::Error;

pub use constant::Constant;
pub use huffman_based::HuffmanBased;

/// Wire tag identifying a record's coder kind.
pub const RECORD_TYPE_CONSTANT: u8 = 0;
pub const RECORD_TYPE_HUFFMAN: u8 = 1;

/// A per-context coder: constructed once per predecessor when the
/// transition table is finalised, read-only thereafter.
#[derive(Clone, Debug)]
pub enum Coder {
    Constant(Constant),
    HuffmanBased(HuffmanBased),
}

impl Coder {
    /// Builds the coder appropriate for a context's observed successors:
    /// `Constant` for a single distinct successor, `HuffmanBased`
    /// otherwise. Panics if `next_list` is empty (a model-build
    /// invariant violation).
    pub fn from_next_list(next_list: &NextList) -> Self {
        assert!(!next_list.list.is_empty(), "coder factory requires a non-empty next list");
        if next_list.list.len() == 1 {
            Coder::Constant(Constant::from_next_list(next_list))
        } else {
            Coder::HuffmanBased(HuffmanBased::from_next_list(next_list))
        }
    }

    /// The wire tag for this coder's record type.
    pub fn record_type(&self) -> u8 {
        match self {
            Coder::Constant(_) => RECORD_TYPE_CONSTANT,
            Coder::HuffmanBased(_) => RECORD_TYPE_HUFFMAN,
        }
    }

    /// The coder's serialisable parameters.
    pub fn record_data(&self) -> BitStream {
        match self {
            Coder::Constant(c) => c.record_data(),
            Coder::HuffmanBased(h) => h.record_data(),
        }
    }

    /// Appends the code for `successor` to `out`.
    pub fn encode(&self, successor: u8, out: &mut BitStream) -> Result<(), Error> {
        match self {
            Coder::Constant(c) => c.encode(successor, out),
            Coder::HuffmanBased(h) => h.encode(successor, out),
        }
    }

    /// Decodes the next successor from `bits`.
    pub fn decode(&self, bits: &mut BitStream) -> Result<u8, Error> {
        match self {
            Coder::Constant(c) => c.decode(bits),
            Coder::HuffmanBased(h) => h.decode(bits),
        }
    }
}
