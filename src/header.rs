//! Bit-exact read/write of the fixed-layout container header.
//!
//! ```text
//! Offset  Size  Field          Value
//! 0       9     magic          {0x89,'N','E','X','T',0x0D,0x0A,0x1A,0x0A}
//! 9       1     version        0
//! 10      2     dataOffset     23 (little-endian)
//! 12      1     rootSymbol     first byte of the original input
//! 13      8     inputSize      total byte length of the original input
//! 21      1     contextCount   number of distinct predecessors
//! 22      1     checksum       sum (mod 256) of bytes 0..21
//! ```

use std::io::{Read, Write};

use crate::Error;

/// Chosen per the PNG-style convention, to detect 8-bit-clean transport
/// damage.
pub const MAGIC: [u8; 9] = [0x89, b'N', b'E', b'X', b'T', 0x0D, 0x0A, 0x1A, 0x0A];
pub const VERSION: u8 = 0;
pub const HEADER_SIZE: usize = 23;
const DATA_OFFSET: u16 = HEADER_SIZE as u16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub root_symbol: u8,
    pub input_size: u64,
    pub context_count: u8,
}

impl Header {
    /// Assembles and writes the 23-byte header, including its checksum.
    pub fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        let mut buf = Vec::with_capacity(HEADER_SIZE);
        buf.extend_from_slice(&MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&DATA_OFFSET.to_le_bytes());
        buf.push(self.root_symbol);
        buf.extend_from_slice(&self.input_size.to_le_bytes());
        buf.push(self.context_count);
        debug_assert_eq!(buf.len(), HEADER_SIZE - 1);
        buf.push(checksum(&buf));
        w.write_all(&buf)
    }

    /// Reads the 23-byte header, verifying the magic but not the
    /// checksum (see the container's design notes).
    pub fn read<R: Read>(r: &mut R) -> Result<Self, Error> {
        let mut buf = [0u8; HEADER_SIZE];
        r.read_exact(&mut buf).map_err(Error::Io)?;

        if buf[0..9] != MAGIC {
            return Err(Error::BadMagic);
        }
        // buf[9] is the version number, currently unchecked beyond presence.
        // buf[10..12] is dataOffset, constant and unchecked.
        let root_symbol = buf[12];
        let input_size = u64::from_le_bytes(buf[13..21].try_into().unwrap());
        let context_count = buf[21];
        // buf[22] is the checksum: computed on write, intentionally not
        // verified on read. See `verify_checksum` for an opt-in check.

        Ok(Header { root_symbol, input_size, context_count })
    }

    /// Explicit opt-in checksum verification, for callers that want the
    /// stricter behavior the source's `decompress` does not apply by
    /// default.
    pub fn verify_checksum(bytes: &[u8; HEADER_SIZE]) -> Result<(), Error> {
        if bytes[0..9] != MAGIC {
            return Err(Error::BadMagic);
        }
        if checksum(&bytes[0..HEADER_SIZE - 1]) != bytes[HEADER_SIZE - 1] {
            return Err(Error::BadChecksum);
        }
        Ok(())
    }
}

fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}
