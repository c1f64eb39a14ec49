use crate::envelope;
use crate::error::{LinkError, Result};
use crate::{Record, SCHEME};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Serialize a record to its canonical compact text form.
///
/// Deterministic: object keys keep their insertion order, so the same record
/// always yields byte-identical text.
fn serialize_record(record: &Record) -> Result<String> {
    serde_json::to_string(record).map_err(|e| LinkError::MalformedPayload(e.to_string()))
}

/// Encode a configuration record into a link token (`vpn://...`).
///
/// The output never contains `=` padding.
///
/// # Errors
///
/// Returns `LinkError` if the serialized record exceeds the envelope size
/// ceiling.
pub fn encode(record: &Record) -> Result<String> {
    let text = serialize_record(record)?;
    let envelope = envelope::pack(text.as_bytes())?;
    Ok(format!("{}{}", SCHEME, URL_SAFE_NO_PAD.encode(envelope)))
}
