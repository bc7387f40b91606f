use crate::constants::GZIP_MAGIC_BYTES;
use crate::models::Error;
use flate2::read::GzDecoder;
use std::io::Read;

/// Inflates `bytes` when they start with the gzip magic number, otherwise
/// returns them untouched.
pub fn decompress_if_gzipped(bytes: Vec<u8>) -> Result<Vec<u8>, Error> {
    if !bytes.starts_with(&GZIP_MAGIC_BYTES) {
        return Ok(bytes);
    }

    let mut decoder = GzDecoder::new(bytes.as_slice());
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| Error::ParserError(format!("Failed to decompress catalog: {}", e)))?;

    Ok(decompressed)
}
