use crate::error::{LinkError, Result};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Size of the big-endian uncompressed-length header.
pub const HEADER_LEN: usize = 4;

/// Safety ceiling for the uncompressed payload size.
///
/// The declared length must be strictly below this bound before any
/// decompression work starts, and the decompressed output is capped at it
/// regardless of what the header declares. Rejects decompression-bomb and
/// memory-exhaustion inputs.
pub const MAX_UNCOMPRESSED_LEN: u32 = 100 * 1024 * 1024;

fn size_in_bounds(declared: u32) -> bool {
    declared > 0 && declared < MAX_UNCOMPRESSED_LEN
}

/// Wrap raw bytes in a Qt `qCompress`-compatible envelope: a 4-byte
/// big-endian uncompressed-length header followed by a zlib stream.
pub fn pack(raw: &[u8]) -> Result<Vec<u8>> {
    let declared = u32::try_from(raw.len()).unwrap_or(u32::MAX);
    if !size_in_bounds(declared) {
        return Err(LinkError::UnreasonableSize(declared));
    }

    let mut envelope = Vec::with_capacity(HEADER_LEN + raw.len() / 2);
    envelope.extend_from_slice(&declared.to_be_bytes());

    let mut encoder = ZlibEncoder::new(envelope, Compression::default());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// Unwrap an envelope back into raw bytes.
///
/// The declared length is advisory: it gates the size check but is never
/// trusted for the actual output length or for buffer pre-sizing. The output
/// buffer grows incrementally and reads stop at [`MAX_UNCOMPRESSED_LEN`].
pub fn unpack(envelope: &[u8]) -> Result<Vec<u8>> {
    if envelope.len() < HEADER_LEN {
        return Err(LinkError::TruncatedHeader(envelope.len()));
    }

    let mut header = [0u8; HEADER_LEN];
    header.copy_from_slice(&envelope[..HEADER_LEN]);
    let declared = u32::from_be_bytes(header);
    if !size_in_bounds(declared) {
        return Err(LinkError::UnreasonableSize(declared));
    }

    let decoder = ZlibDecoder::new(&envelope[HEADER_LEN..]);
    let mut raw = Vec::new();
    decoder
        .take(u64::from(MAX_UNCOMPRESSED_LEN))
        .read_to_end(&mut raw)
        .map_err(LinkError::Decompression)?;

    // The stream may legally produce more or less than declared, but never
    // the full ceiling: the declared length itself must stay below it.
    if raw.len() as u64 >= u64::from(MAX_UNCOMPRESSED_LEN) {
        return Err(LinkError::Decompression(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "decompressed payload exceeds the safety ceiling",
        )));
    }

    Ok(raw)
}
