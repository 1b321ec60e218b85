//! Small helpers test scripts reach for around requests: identifiers,
//! encodings, URL and header builders, and body validation.
mod data;
mod encoding;
mod http;
mod ids;


pub use data::{DateFormat, format_date, parse_json_response, validate_email, validate_phone};
pub use encoding::{decode_base64, encode_base64, simple_jwt};
pub use http::{
    ApiError, DEFAULT_AUTH_SCHEME, DEFAULT_EXPECTED_STATUS, api_error, auth_headers, build_url,
    measure_response_time, parse_url, validate_status,
};
pub use ids::{fingerprint, generate_uuid, md5_hex};
