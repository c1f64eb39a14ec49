use crate::envelope;
use crate::error::{LinkError, Result};
use crate::{Record, SCHEME};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Parse decompressed payload bytes as a UTF-8 JSON document.
fn parse_record(raw: &[u8]) -> Result<Record> {
    let text =
        std::str::from_utf8(raw).map_err(|e| LinkError::MalformedPayload(e.to_string()))?;
    serde_json::from_str(text).map_err(|e| LinkError::MalformedPayload(e.to_string()))
}

/// Decode a link token into a configuration record.
///
/// The `vpn://` scheme is optional on input; a bare base64url token is
/// accepted. Trailing `=` padding is tolerated even though the encoder never
/// emits it.
///
/// # Errors
///
/// Returns `LinkError` if decoding fails (malformed base64, truncated or
/// out-of-bounds envelope header, corrupt compressed stream, or a payload
/// that is not valid UTF-8 JSON).
pub fn decode(token: &str) -> Result<Record> {
    let encoded = token.strip_prefix(SCHEME).unwrap_or(token);
    let encoded = encoded.trim_end_matches('=');

    let envelope = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| LinkError::InvalidBase64(e.to_string()))?;

    let raw = envelope::unpack(&envelope)?;
    parse_record(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_record() {
        let record = parse_record(b"{\"port\": 443}").unwrap();
        assert_eq!(record, json!({"port": 443}));
    }

    #[test]
    fn test_parse_record_invalid_utf8() {
        let result = parse_record(&[0xFF, 0xFE]);
        assert!(matches!(result, Err(LinkError::MalformedPayload(_))));
    }

    #[test]
    fn test_parse_record_invalid_json() {
        let result = parse_record(b"not json");
        assert!(matches!(result, Err(LinkError::MalformedPayload(_))));
    }

    #[test]
    fn test_decode_invalid_base64() {
        let result = decode("vpn://!!!not-base64!!!");
        assert!(matches!(result, Err(LinkError::InvalidBase64(_))));
    }

    #[test]
    fn test_decode_impossible_base64_length() {
        // 5 characters: no padding normalization can make this valid.
        let result = decode("vpn://AAAAA");
        assert!(matches!(result, Err(LinkError::InvalidBase64(_))));
    }

    #[test]
    fn test_decode_scheme_optional() {
        let token = crate::encode::encode(&json!({"k": "v"})).unwrap();
        let bare = token.strip_prefix(SCHEME).unwrap();

        assert_eq!(decode(&token).unwrap(), decode(bare).unwrap());
    }

    #[test]
    fn test_decode_empty_token() {
        // "vpn://" alone decodes to zero envelope bytes.
        let result = decode("vpn://");
        assert!(matches!(result, Err(LinkError::TruncatedHeader(0))));
    }
}
