//! Array payload codecs.
//!
//! The data model hands a codec the row-major bytes of an array together
//! with its data type and dimensions; the codec only owns the byte layout.
//! [`ZlibCodec`] stores payloads zlib-compressed behind an 8-byte
//! uncompressed-size header.

use std::io::{Read, Write};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use tracing::trace;

use crate::util::{DataType, Dimensions, Error, Result};

/// Largest uncompressed size a zlib payload may declare (1 GB).
pub const MAX_DECODED_SIZE: usize = 1024 * 1024 * 1024;

/// Serialize/deserialize contract for opaque array payloads.
pub trait ArrayCodec {
    /// Encode raw row-major bytes into a payload.
    fn encode(&self, raw: &[u8]) -> Result<Vec<u8>>;

    /// Decode a payload back into raw row-major bytes.
    fn decode(&self, payload: &[u8]) -> Result<Vec<u8>>;
}

/// An encoded array: payload plus the descriptor needed to check it on decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedArray {
    /// Element data type the payload was written with.
    pub data_type: DataType,
    /// Actual dimensions of the encoded data.
    pub dims: Dimensions,
    /// Codec output.
    pub payload: Vec<u8>,
}

/// Codec that stores raw bytes unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainCodec;

impl ArrayCodec for PlainCodec {
    fn encode(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(raw.to_vec())
    }

    fn decode(&self, payload: &[u8]) -> Result<Vec<u8>> {
        Ok(payload.to_vec())
    }
}

/// Zlib codec.
///
/// Format: `[uncompressed_size: u64 LE][zlib stream]`.
#[derive(Clone, Copy, Debug)]
pub struct ZlibCodec {
    level: u32,
}

impl ZlibCodec {
    /// Create a codec with a compression level (0-9, clamped).
    pub fn new(level: u32) -> Self {
        Self { level: level.min(9) }
    }

    /// Compression level in use.
    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Default for ZlibCodec {
    fn default() -> Self {
        Self::new(6)
    }
}

impl ArrayCodec for ZlibCodec {
    fn encode(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.level));
        encoder.write_all(raw)?;
        let compressed = encoder.finish()?;

        let mut result = Vec::with_capacity(8 + compressed.len());
        result.extend_from_slice(&(raw.len() as u64).to_le_bytes());
        result.extend_from_slice(&compressed);
        trace!("zlib encode: {} -> {} bytes", raw.len(), result.len());
        Ok(result)
    }

    fn decode(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let Some((header, body)) = payload.split_first_chunk::<8>() else {
            return Err(Error::other(format!(
                "zlib payload too short: {} bytes",
                payload.len()
            )));
        };
        let declared = u64::from_le_bytes(*header);
        let expected = match usize::try_from(declared) {
            Ok(n) if n <= MAX_DECODED_SIZE => n,
            _ => {
                return Err(Error::other(format!(
                    "zlib payload declares {} bytes, limit is {}",
                    declared, MAX_DECODED_SIZE
                )))
            }
        };

        let mut decoder = ZlibDecoder::new(body);
        let mut raw = Vec::with_capacity(expected);
        decoder.read_to_end(&mut raw)?;

        if raw.len() != expected {
            return Err(Error::other(format!(
                "zlib payload declares {} bytes, decoded {}",
                expected,
                raw.len()
            )));
        }
        trace!("zlib decode: {} -> {} bytes", payload.len(), raw.len());
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zlib_round_trip() {
        let original = b"granite granite granite shale shale ".repeat(50);
        let codec = ZlibCodec::default();

        let encoded = codec.encode(&original).unwrap();
        assert!(encoded.len() < original.len());
        assert_eq!(codec.decode(&encoded).unwrap(), original);
    }

    #[test]
    fn test_zlib_empty() {
        let codec = ZlibCodec::new(9);
        let encoded = codec.encode(&[]).unwrap();
        assert_eq!(&encoded[..8], &[0u8; 8]);
        assert!(codec.decode(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_zlib_rejects_truncated() {
        let codec = ZlibCodec::new(1);
        assert!(codec.decode(&[1, 2, 3]).is_err());

        let mut encoded = codec.encode(b"some payload bytes").unwrap();
        encoded[0] = 99;
        assert!(codec.decode(&encoded).is_err());
    }

    #[test]
    fn test_zlib_rejects_oversized_header() {
        let codec = ZlibCodec::default();
        let body = codec.encode(b"abc").unwrap();

        let mut payload = u64::MAX.to_le_bytes().to_vec();
        payload.extend_from_slice(&body[8..]);
        assert!(matches!(codec.decode(&payload), Err(Error::Other(_))));

        let mut payload = ((MAX_DECODED_SIZE + 1) as u64).to_le_bytes().to_vec();
        payload.extend_from_slice(&body[8..]);
        assert!(codec.decode(&payload).is_err());
    }

    #[test]
    fn test_level_clamped() {
        assert_eq!(ZlibCodec::new(42).level(), 9);
    }
}
