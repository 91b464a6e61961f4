//! Compressor driver: model construction, coder selection, header and
//! record emission, and payload emission.

use std::collections::BTreeMap;
use std::io::{Read, Seek, Write};

use crate::bitstream::BitStream;
use crate::coders::Coder;
use crate::header::Header;
use crate::table::TransitionTable;
use crate::Error;

/// Compresses `input` into `writer`.
///
/// `input` must be seekable: the transition table is built with one
/// full pass, then the reader is rewound for a second pass that drives
/// encoding. Fails with [`Error::EmptyInput`] if the input is empty.
pub fn compress<R: Read + Seek, W: Write>(input: &mut R, writer: &mut W) -> Result<(), Error> {
    let table = TransitionTable::new(input).map_err(Error::Io)?;
    if table.input_size == 0 {
        return Err(Error::EmptyInput);
    }

    let coders: BTreeMap<u8, Coder> =
        table.transitions.iter().map(|(&predecessor, next_list)| (predecessor, Coder::from_next_list(next_list))).collect();
    log::debug!("built transition table: {} contexts, {} input bytes", coders.len(), table.input_size);

    let header = Header { root_symbol: table.root, input_size: table.input_size, context_count: coders.len() as u8 };
    header.write(writer).map_err(Error::Io)?;

    let mut payload = BitStream::new();
    let mut byte = [0u8; 1];
    input.read_exact(&mut byte).map_err(Error::Io)?;
    let mut current = byte[0];
    loop {
        let n = input.read(&mut byte).map_err(Error::Io)?;
        if n == 0 {
            break;
        }
        let next = byte[0];
        let coder = coders.get(&current).ok_or(Error::MissingContext)?;
        coder.encode(next, &mut payload)?;
        current = next;
    }
    log::trace!("encoded payload: {} bits", payload.len());

    let mut records = BitStream::new();
    for (&predecessor, coder) in coders.iter() {
        records.append(&BitStream::from_full_byte(coder.record_type()));
        records.append(&BitStream::from_full_byte(predecessor));
        records.append(&coder.record_data());
        log::trace!("record for predecessor {predecessor}: type {}", coder.record_type());
    }
    records.append(&payload);

    let packed = records.bytes();
    writer.write_all(&packed).map_err(Error::Io)?;
    let total = crate::header::HEADER_SIZE + packed.len();
    log::info!("compressed {} bytes into {total} bytes across {} contexts", table.input_size, coders.len());

    Ok(())
}
