use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupportError {
    #[error("Invalid base64 input: {source}")]
    InvalidBase64 {
        #[source]
        source: base64::DecodeError,
    },
    #[error("Decoded base64 is not valid UTF-8: {source}")]
    DecodedNotUtf8 {
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("Failed to encode JWT segment: {source}")]
    JwtSegment {
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
