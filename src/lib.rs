//! # nextcomp
//!
//! Lossless byte-stream compression built on a first-order Markov model:
//! for each byte value, the set of bytes observed to immediately follow
//! it is learned, and each subsequent byte is encoded using a
//! per-predecessor code optimised for that context (a degenerate
//! constant code when only one successor was ever observed, a Huffman
//! code otherwise). The emitted container is self-describing: header,
//! model, payload.
//!
//! ## Buffer example
//!
//! ```
//! use nextcomp::*;
//! let text = b"the quick brown fox jumps over the lazy dog";
//! let compressed = compress_slice(text).expect("compression failed");
//! let expanded = expand_slice(&compressed).expect("expansion failed");
//! assert_eq!(expanded, text);
//! ```
//!
//! ## File example
//!
//! ```rs
//! use nextcomp::*;
//! let mut in_file = std::fs::File::open("some_input_path").expect("open failed");
//! let mut out_file = std::fs::File::create("some_output_path").expect("create failed");
//! compress(&mut in_file, &mut out_file).expect("compression failed");
//! ```

pub mod bitstream;
pub mod coders;
pub mod compressor;
pub mod decompressor;
pub mod header;
pub mod huffman;
pub mod table;

use std::io::Cursor;

pub use compressor::compress;
pub use decompressor::{decompress, decompress_checked};

/// Crate errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("compressor given an empty input")]
    EmptyInput,
    #[error("i/o error: {0}")]
    Io(#[source] std::io::Error),
    #[error("read past the end of the bitstream")]
    OutOfRange,
    #[error("header magic mismatch")]
    BadMagic,
    #[error("checksum failed")]
    BadChecksum,
    #[error("unknown record type")]
    MalformedRecord,
    #[error("no decoder installed for the current symbol")]
    MissingContext,
    #[error("coder has no code for the given symbol")]
    UnknownSymbol,
    #[error("not yet implemented")]
    NotImplemented,
}

/// Convenience wrapper: compresses a byte slice into a freshly
/// allocated `Vec<u8>`.
pub fn compress_slice(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut src = Cursor::new(data.to_vec());
    let mut out = Cursor::new(Vec::new());
    compress(&mut src, &mut out)?;
    Ok(out.into_inner())
}

/// Convenience wrapper: expands a byte slice into a freshly allocated
/// `Vec<u8>`.
pub fn expand_slice(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut src = Cursor::new(data.to_vec());
    let mut out = Cursor::new(Vec::new());
    decompress(&mut src, &mut out)?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_every_nonempty_buffer_shape() {
        let samples: Vec<Vec<u8>> = vec![
            vec![0],
            vec![255],
            b"AA".to_vec(),
            b"ABCABC".to_vec(),
            b"the quick brown fox jumps over the lazy dog".to_vec(),
            (0..=255u8).collect(),
        ];
        for data in samples {
            let compressed = compress_slice(&data).unwrap();
            let expanded = expand_slice(&compressed).unwrap();
            assert_eq!(expanded, data);
        }
    }

    #[test]
    fn compress_slice_rejects_empty_input() {
        assert!(matches!(compress_slice(&[]), Err(Error::EmptyInput)));
    }
}
