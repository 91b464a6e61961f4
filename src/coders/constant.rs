//! Degenerate coder for a context with exactly one observed successor.

use crate::bitstream::BitStream;
use crate::table::NextList;
use crate::Error;

#[derive(Clone, Copy, Debug)]
pub struct Constant {
    successor: u8,
}

impl Constant {
    pub fn new(successor: u8) -> Self {
        Self { successor }
    }

    pub fn from_next_list(nl: &NextList) -> Self {
        Self::new(nl.list[0].symbol)
    }

    pub fn record_data(&self) -> BitStream {
        BitStream::from_byte(self.successor, 8)
    }

    /// Writes no bits: the context alone determines the outcome. The
    /// model guarantees `successor` always equals the context's single
    /// observed successor, so there is nothing left to check or encode.
    pub fn encode(&self, _successor: u8, _out: &mut BitStream) -> Result<(), Error> {
        Ok(())
    }

    /// Returns the single successor without consuming any bits.
    pub fn decode(&self, _bits: &mut BitStream) -> Result<u8, Error> {
        Ok(self.successor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_writes_no_bits() {
        let c = Constant::new(0x42);
        let mut out = BitStream::new();
        c.encode(0x42, &mut out).unwrap();
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn decode_returns_symbol_without_consuming_bits() {
        let c = Constant::new(0x42);
        let mut bits = BitStream::from_bits(&[true, false, true]);
        assert_eq!(c.decode(&mut bits).unwrap(), 0x42);
        assert_eq!(bits.len(), 3);
    }

    #[test]
    fn record_data_is_the_symbol_byte() {
        let c = Constant::new(0x41);
        assert_eq!(c.record_data().byte(), 0x41);
    }
}
