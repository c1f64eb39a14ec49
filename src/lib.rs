//! VPN Link Codec
//!
//! This library provides encoding and decoding functionality for shareable
//! VPN configuration links (`vpn://` scheme). A link carries an arbitrary
//! JSON configuration document inside a compact envelope: a 4-byte big-endian
//! uncompressed-length header (Qt `qCompress` compatible), a zlib-compressed
//! payload, and a URL-safe Base64 wrapper without padding.
//!
//! The codec is schema-agnostic: it guarantees bit-faithful recovery of the
//! embedded JSON document but imposes no constraints on its contents.

pub mod decode;
pub mod encode;
pub mod envelope;
pub mod error;

pub use error::{LinkError, Result};

/// Scheme prefix carried by every encoded link.
pub const SCHEME: &str = "vpn://";

/// The structured configuration record embedded in a link.
///
/// Object key order is preserved (insertion order), so re-encoding a decoded
/// record is deterministic and keeps the original key ordering.
pub type Record = serde_json::Value;

/// Encode a configuration record into a link token (`vpn://...`).
///
/// # Errors
///
/// Returns `LinkError` if encoding fails.
pub fn encode(record: &Record) -> Result<String> {
    encode::encode(record)
}

/// Decode a link token into a configuration record.
///
/// # Errors
///
/// Returns `LinkError` if decoding fails.
pub fn decode(token: &str) -> Result<Record> {
    decode::decode(token)
}
