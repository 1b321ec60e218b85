use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());
static PHONE_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]+$").ok());

#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// Digits with optional leading `+`, spaces, dashes, and parentheses.
#[must_use]
pub fn validate_phone(phone: &str) -> bool {
    PHONE_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(phone))
}

/// Parses a response body as JSON. Malformed bodies have no value.
#[must_use]
pub fn parse_json_response(body: &str) -> Option<Value> {
    match serde_json::from_str(body) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = %err, "Response body is not JSON");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    #[default]
    Iso,
    Fr,
    Us,
    Long,
}

impl FromStr for DateFormat {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to the long form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "ISO" => DateFormat::Iso,
            "FR" => DateFormat::Fr,
            "US" => DateFormat::Us,
            _ => DateFormat::Long,
        })
    }
}

#[must_use]
pub fn format_date(date: DateTime<Utc>, format: DateFormat) -> String {
    match format {
        DateFormat::Iso => date.to_rfc3339_opts(SecondsFormat::Millis, true),
        DateFormat::Fr => date.format("%d/%m/%Y").to_string(),
        DateFormat::Us => date.format("%-m/%-d/%Y").to_string(),
        DateFormat::Long => date.format("%a %b %d %Y %H:%M:%S GMT+0000").to_string(),
    }
}
