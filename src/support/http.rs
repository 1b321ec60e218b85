use serde::Serialize;
use tokio::time::Instant;
use url::Url;
use url::form_urlencoded;

use crate::error::SupportError;
use crate::response::ResponseBody;

pub const DEFAULT_AUTH_SCHEME: &str = "Bearer";
pub const DEFAULT_EXPECTED_STATUS: [u16; 1] = [200];
/// Lowest status treated as an API error.
const ERROR_STATUS_MIN: u16 = 400;

/// Joins `base` and `endpoint`, collapsing duplicate slashes while keeping
/// the `scheme://` separator, and appends `params` as a form-encoded query
/// in the order given.
#[must_use]
pub fn build_url<K, V>(base: &str, endpoint: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let joined = format!("{}/{}", base, endpoint);
    let mut url = String::with_capacity(joined.len());
    for ch in joined.chars() {
        if ch == '/' && url.ends_with('/') {
            continue;
        }
        url.push(ch);
    }
    let url = url.replacen(":/", "://", 1);

    if params.is_empty() {
        return url;
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(key, value)| (key.as_ref(), value.as_ref())))
        .finish();
    format!("{}?{}", url, query)
}

/// [`build_url`] followed by a parse, for callers that need a valid URL.
///
/// # Errors
///
/// Returns an error when the joined URL does not parse.
pub fn parse_url<K, V>(base: &str, endpoint: &str, params: &[(K, V)]) -> Result<Url, SupportError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let url = build_url(base, endpoint, params);
    Url::parse(&url).map_err(|err| SupportError::InvalidBaseUrl {
        url,
        source: err,
    })
}

/// `Authorization` and JSON `Content-Type` headers for `token`.
#[must_use]
pub fn auth_headers(token: &str, scheme: Option<&str>) -> Vec<(String, String)> {
    let scheme = scheme.unwrap_or(DEFAULT_AUTH_SCHEME);
    vec![
        ("Authorization".to_owned(), format!("{} {}", scheme, token)),
        ("Content-Type".to_owned(), "application/json".to_owned()),
    ]
}

#[must_use]
pub fn validate_status(actual: u16, expected: &[u16]) -> bool {
    expected.contains(&actual)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub status: u16,
    pub status_text: String,
    pub body: ResponseBody,
}

/// Describes a failed response (status >= 400) and logs it; successful
/// responses yield `None`.
#[must_use]
pub fn api_error(status: u16, status_text: &str, body: &ResponseBody) -> Option<ApiError> {
    if status < ERROR_STATUS_MIN {
        return None;
    }
    tracing::error!(status, status_text, "API error response");
    Some(ApiError {
        status,
        status_text: status_text.to_owned(),
        body: body.clone(),
    })
}

/// Milliseconds elapsed since `started`.
#[must_use]
pub fn measure_response_time(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
