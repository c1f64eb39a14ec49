use std::io;

/// Result type alias for link codec operations.
pub type Result<T> = std::result::Result<T, LinkError>;

/// Errors that can occur during link encoding or decoding.
///
/// Every failure is terminal for the call; nothing is retried or coerced to
/// a default record.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Invalid base64url encoding: {0}")]
    InvalidBase64(String),

    #[error("Envelope too short for the 4-byte length header: got {0} bytes")]
    TruncatedHeader(usize),

    #[error("Declared uncompressed size is unreasonable: {0}")]
    UnreasonableSize(u32),

    #[error("Error decompressing data: {0}")]
    Decompression(#[source] io::Error),

    #[error("Error parsing payload: {0}")]
    MalformedPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
