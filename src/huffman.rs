//! Huffman tree construction, dictionary derivation, and bit
//! serialisation, built from per-context symbol frequencies.

use std::collections::HashMap;

use crate::bitstream::BitStream;
use crate::table::SymbolFrequency;

const INTERNAL_MARKER: bool = false;
const LEAF_MARKER: bool = true;

/// Descending left emits bit 0, descending right emits bit 1.
#[derive(Clone, Debug)]
enum Node {
    Internal { left: Box<Node>, right: Box<Node>, weight: u64 },
    Leaf(SymbolFrequency),
}

impl Node {
    fn weight(&self) -> u64 {
        match self {
            Node::Internal { weight, .. } => *weight,
            Node::Leaf(sf) => sf.count,
        }
    }
}

/// A rooted binary tree used as a per-context Huffman coder.
#[derive(Clone, Debug)]
pub struct HuffmanTree {
    root: Node,
}

/// Symbol to its code, in dictionary order.
pub type Dictionary = HashMap<u8, BitStream>;

impl HuffmanTree {
    /// Builds a tree from symbol frequencies. Ties are broken by a
    /// stable ascending sort on count, followed by stable first-fit
    /// insertion of each combined node into the working list (insert at
    /// the first position whose weight is >= the new node's weight).
    pub fn build(frequencies: &[SymbolFrequency]) -> Self {
        assert!(!frequencies.is_empty(), "huffman tree requires at least one symbol");

        let mut work: Vec<Node> = frequencies.iter().copied().map(Node::Leaf).collect();
        work.sort_by_key(|n| n.weight());

        while work.len() >= 2 {
            let left = work.remove(0);
            let right = work.remove(0);
            let weight = left.weight() + right.weight();
            let new_node = Node::Internal { left: Box::new(left), right: Box::new(right), weight };
            let pos = work.iter().position(|n| n.weight() >= weight).unwrap_or(work.len());
            work.insert(pos, new_node);
        }

        HuffmanTree { root: work.remove(0) }
    }

    /// Builds the symbol -> code lookup table via a depth-first walk.
    pub fn dictionary(&self) -> Dictionary {
        let mut result = Dictionary::new();
        Self::build_dictionary(&self.root, &BitStream::new(), &mut result);
        result
    }

    fn build_dictionary(node: &Node, prefix: &BitStream, out: &mut Dictionary) {
        match node {
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.append(&BitStream::from_bits(&[false]));
                Self::build_dictionary(left, &left_prefix, out);

                let mut right_prefix = prefix.clone();
                right_prefix.append(&BitStream::from_bits(&[true]));
                Self::build_dictionary(right, &right_prefix, out);
            }
            Node::Leaf(sf) => {
                out.insert(sf.symbol, prefix.clone());
            }
        }
    }

    /// Walks from the root using bits read from `bits`, yielding the
    /// symbol at the reached leaf. Fails if bits run out mid-walk.
    pub fn interpret(&self, bits: &mut BitStream) -> Result<u8, crate::Error> {
        Self::walk(&self.root, bits)
    }

    fn walk(node: &Node, bits: &mut BitStream) -> Result<u8, crate::Error> {
        match node {
            Node::Internal { left, right, .. } => {
                if bits.read()? {
                    Self::walk(right, bits)
                } else {
                    Self::walk(left, bits)
                }
            }
            Node::Leaf(sf) => Ok(sf.symbol),
        }
    }

    /// Pre-order serialisation: a 0 bit then left then right for an
    /// internal node; a 1 bit then the 8-bit symbol for a leaf.
    pub fn to_bits(&self) -> BitStream {
        let mut out = BitStream::new();
        Self::serialise(&self.root, &mut out);
        out
    }

    fn serialise(node: &Node, out: &mut BitStream) {
        match node {
            Node::Internal { left, right, .. } => {
                out.append(&BitStream::from_bits(&[INTERNAL_MARKER]));
                Self::serialise(left, out);
                Self::serialise(right, out);
            }
            Node::Leaf(sf) => {
                out.append(&BitStream::from_bits(&[LEAF_MARKER]));
                out.append(&BitStream::from_full_byte(sf.symbol));
            }
        }
    }

    /// Reads a tree shape back from its pre-order bit serialisation.
    /// Leaves carry no frequency information (count is always 0).
    pub fn from_bits(bits: &mut BitStream) -> Result<Self, crate::Error> {
        Ok(HuffmanTree { root: Self::deserialise(bits)? })
    }

    fn deserialise(bits: &mut BitStream) -> Result<Node, crate::Error> {
        if bits.read()? == LEAF_MARKER {
            let symbol = bits.read_byte()?;
            Ok(Node::Leaf(SymbolFrequency { symbol, count: 0 }))
        } else {
            let left = Self::deserialise(bits)?;
            let right = Self::deserialise(bits)?;
            Ok(Node::Internal { left: Box::new(left), right: Box::new(right), weight: 0 })
        }
    }
}
