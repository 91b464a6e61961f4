//! Experimental variable-width index coder.
//!
//! Ported from the source's `encoders.IndexBased` / `encoders.GrowingIndex`,
//! which assign each distinct successor a fixed- (or shrinking-) width
//! index instead of a Huffman code. Neither type is reachable from
//! [`super::Coder`]'s factory or the container's record-type tag table:
//! the source never wires them in, and this port preserves that. Decoding
//! was never implemented upstream either, so it stays a stub here.
#![allow(dead_code)]

use crate::bitstream::BitStream;
use crate::table::NextList;
use crate::Error;

/// Minimum number of bits required to index `n` distinct values.
fn min_bits_count(n: usize) -> u8 {
    (usize::BITS - (n.max(1) - 1).leading_zeros()).max(1) as u8
}

/// Assigns each distinct successor a fixed-width index in first-observed
/// order.
#[derive(Clone, Debug)]
pub struct IndexBased {
    next: Vec<u8>,
    idx_size: u8,
}

impl IndexBased {
    pub fn new(nl: &NextList) -> Self {
        let idx_size = min_bits_count(nl.list.len());
        assert!(idx_size <= 8, "{} elements requires {} bits", nl.list.len(), idx_size);
        IndexBased { next: nl.list.iter().map(|sf| sf.symbol).collect(), idx_size }
    }

    pub fn encode(&self, to: u8, bs: &mut BitStream) -> Result<(), Error> {
        let (idx, idx_size) = self.index_of(to)?;
        bs.append(&BitStream::from_byte(idx, idx_size));
        Ok(())
    }

    pub fn decode(&self, _bs: &mut BitStream) -> Result<u8, Error> {
        Err(Error::NotImplemented)
    }

    fn index_of(&self, to: u8) -> Result<(u8, u8), Error> {
        self.next.iter().position(|&s| s == to).map(|i| (i as u8, self.idx_size)).ok_or(Error::UnknownSymbol)
    }
}

/// Layers a shrinking bit-width schedule on top of [`IndexBased`], driven
/// by the thresholds recorded in `NextList::grows`.
#[derive(Clone, Debug)]
pub struct GrowingIndex {
    inner: IndexBased,
    grows: Vec<u64>,
}

impl GrowingIndex {
    pub fn new(nl: &NextList) -> Self {
        GrowingIndex { inner: IndexBased::new(nl), grows: nl.grows.clone() }
    }

    pub fn encode(&self, to: u8, bs: &mut BitStream, pos: u64) -> Result<(), Error> {
        let (idx, idx_size) = self.inner.index_of(to)?;
        let dbc = self.dynamic_bit_count(pos);
        bs.append(&BitStream::from_byte(idx, idx_size.min(dbc)));
        Ok(())
    }

    pub fn decode(&self, _bs: &mut BitStream, _pos: u64) -> Result<u8, Error> {
        Err(Error::NotImplemented)
    }

    fn dynamic_bit_count(&self, pos: u64) -> u8 {
        let mut last = 0u8;
        for (i, &p) in self.grows.iter().enumerate() {
            if pos < p {
                break;
            }
            last = i as u8 + 1;
        }
        last + 1
    }
}
