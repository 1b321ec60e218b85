use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use crate::error::SupportError;

use super::ids::md5_hex;

#[must_use]
pub fn encode_base64(data: impl AsRef<[u8]>) -> String {
    STANDARD.encode(data)
}

/// Decodes standard base64 into UTF-8 text.
///
/// # Errors
///
/// Returns an error when the input is not valid base64 or the decoded bytes
/// are not UTF-8.
pub fn decode_base64(data: &str) -> Result<String, SupportError> {
    let bytes = STANDARD
        .decode(data.trim())
        .map_err(|err| SupportError::InvalidBase64 { source: err })?;
    String::from_utf8(bytes).map_err(|err| SupportError::DecodedNotUtf8 { source: err })
}

/// JWT-shaped token for test fixtures: base64 header and payload, signed with
/// an MD5 over `header.payload.secret`. Not verifiable as a real HS256 token.
///
/// # Errors
///
/// Returns an error if a segment cannot be serialized.
pub fn simple_jwt(payload: &Value, secret: &str) -> Result<String, SupportError> {
    let header = json!({"alg": "HS256", "typ": "JWT"});
    let encoded_header = encode_segment(&header)?;
    let encoded_payload = encode_segment(payload)?;
    let signature = md5_hex(format!("{}.{}.{}", encoded_header, encoded_payload, secret));
    Ok(format!("{}.{}.{}", encoded_header, encoded_payload, signature))
}

fn encode_segment(value: &Value) -> Result<String, SupportError> {
    let text =
        serde_json::to_string(value).map_err(|err| SupportError::JwtSegment { source: err })?;
    Ok(encode_base64(text))
}
