//! Decompressor driver: header validation, coder reconstruction, and
//! count-driven payload decoding.

use std::collections::HashMap;
use std::io::{Read, Write};

use crate::bitstream::BitStream;
use crate::coders::{Coder, HuffmanBased, RECORD_TYPE_CONSTANT, RECORD_TYPE_HUFFMAN};
use crate::header::Header;
use crate::huffman::HuffmanTree;
use crate::Error;

/// Decompresses `reader` into `writer`. On success, `writer` contains
/// exactly `inputSize` bytes matching the original input.
pub fn decompress<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), Error> {
    let header = Header::read(reader)?;
    decompress_body(reader, writer, header)
}

/// As [`decompress`], but additionally verifies the header checksum
/// before proceeding (see the container's design notes on checksum
/// policy).
pub fn decompress_checked<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), Error> {
    let mut header_bytes = [0u8; crate::header::HEADER_SIZE];
    reader.read_exact(&mut header_bytes).map_err(Error::Io)?;
    Header::verify_checksum(&header_bytes)?;
    let header = Header::read(&mut &header_bytes[..])?;
    decompress_body(reader, writer, header)
}

fn decompress_body<R: Read, W: Write>(reader: &mut R, writer: &mut W, header: Header) -> Result<(), Error> {
    let mut rest = Vec::new();
    reader.read_to_end(&mut rest).map_err(Error::Io)?;
    let mut bits = BitStream::from_bits(&bytes_to_bits(&rest));

    let mut decoders: HashMap<u8, Coder> = HashMap::with_capacity(header.context_count as usize);
    for _ in 0..header.context_count {
        let record_type = bits.read_byte()?;
        let predecessor = bits.read_byte()?;
        let coder = match record_type {
            RECORD_TYPE_CONSTANT => {
                let successor = bits.read_byte()?;
                Coder::Constant(crate::coders::Constant::new(successor))
            }
            RECORD_TYPE_HUFFMAN => {
                let tree = HuffmanTree::from_bits(&mut bits)?;
                Coder::HuffmanBased(HuffmanBased::new(tree))
            }
            _ => return Err(Error::MalformedRecord),
        };
        decoders.insert(predecessor, coder);
    }
    log::debug!("reconstructed {} contexts", decoders.len());

    writer.write_all(&[header.root_symbol]).map_err(Error::Io)?;
    let mut current = header.root_symbol;
    let mut produced: u64 = 1;
    while produced < header.input_size {
        let decoder = decoders.get(&current).ok_or(Error::MissingContext)?;
        let next = decoder.decode(&mut bits)?;
        writer.write_all(&[next]).map_err(Error::Io)?;
        current = next;
        produced += 1;
    }
    log::info!("expanded {produced} bytes");

    Ok(())
}

fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &b in bytes {
        for i in (0..8).rev() {
            bits.push((b >> i) & 1 == 1);
        }
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compressor::compress;
    use std::io::Cursor;

    fn round_trip(data: &[u8]) -> Vec<u8> {
        let mut input = Cursor::new(data.to_vec());
        let mut compressed = Vec::new();
        compress(&mut input, &mut compressed).unwrap();

        let mut out = Vec::new();
        decompress(&mut Cursor::new(compressed), &mut out).unwrap();
        out
    }

    #[test]
    fn single_byte_round_trips() {
        assert_eq!(round_trip(&[0x41]), vec![0x41]);
    }

    #[test]
    fn repeated_bytes_round_trip() {
        assert_eq!(round_trip(&[0x41, 0x41]), vec![0x41, 0x41]);
    }

    #[test]
    fn abcabc_round_trips() {
        assert_eq!(round_trip(b"ABCABC"), b"ABCABC".to_vec());
    }

    #[test]
    fn prose_round_trips() {
        let text = b"I am Sam. Sam I am. I do not like this Sam I am.\n";
        assert_eq!(round_trip(text), text.to_vec());
    }

    #[test]
    fn every_byte_value_round_trips() {
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn missing_context_is_an_error() {
        // Build a header claiming one more byte than any context can produce.
        let mut input = Cursor::new(vec![0x41, 0x42]);
        let mut compressed = Vec::new();
        compress(&mut input, &mut compressed).unwrap();
        // Raise inputSize by one without adding a transition record; 0x42 has no outgoing context.
        let header = Header::read(&mut &compressed[..]).unwrap();
        let tampered = Header { root_symbol: header.root_symbol, input_size: header.input_size + 1, context_count: header.context_count };
        let mut out_buf = Vec::new();
        tampered.write(&mut out_buf).unwrap();
        let mut full = out_buf;
        full.extend_from_slice(&compressed[crate::header::HEADER_SIZE..]);

        let mut out = Vec::new();
        let result = decompress(&mut Cursor::new(full), &mut out);
        assert!(matches!(result, Err(Error::MissingContext)));
    }

    #[test]
    fn decompress_checked_rejects_corrupted_checksum() {
        let mut input = Cursor::new(vec![0x41, 0x41]);
        let mut compressed = Vec::new();
        compress(&mut input, &mut compressed).unwrap();
        compressed[22] ^= 0xFF;

        let mut out = Vec::new();
        let result = decompress_checked(&mut Cursor::new(compressed), &mut out);
        assert!(matches!(result, Err(Error::BadChecksum)));
    }
}
