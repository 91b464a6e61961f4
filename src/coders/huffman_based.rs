//! Huffman coder for contexts with more than one observed successor.

use crate::bitstream::BitStream;
use crate::huffman::{Dictionary, HuffmanTree};
use crate::table::NextList;
use crate::Error;

#[derive(Clone, Debug)]
pub struct HuffmanBased {
    tree: HuffmanTree,
    dictionary: Dictionary,
}

impl HuffmanBased {
    pub fn new(tree: HuffmanTree) -> Self {
        let dictionary = tree.dictionary();
        Self { tree, dictionary }
    }

    pub fn from_next_list(nl: &NextList) -> Self {
        let tree = HuffmanTree::build(&nl.list);
        Self::new(tree)
    }

    pub fn record_data(&self) -> BitStream {
        self.tree.to_bits()
    }

    pub fn encode(&self, successor: u8, out: &mut BitStream) -> Result<(), Error> {
        let code = self.dictionary.get(&successor).ok_or(Error::UnknownSymbol)?;
        out.append(code);
        Ok(())
    }

    pub fn decode(&self, bits: &mut BitStream) -> Result<u8, Error> {
        self.tree.interpret(bits)
    }
}
