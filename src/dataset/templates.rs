use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};

pub(super) type Template = fn(&mut StdRng, DateTime<Utc>) -> Value;

const ID_RANGE: std::ops::Range<u32> = 0..10_000;
const ORDER_USER_ID_RANGE: std::ops::Range<u32> = 0..1_000;
const USER_AGE_RANGE: std::ops::Range<u32> = 18..68;
const ORDER_ITEMS_RANGE: std::ops::RangeInclusive<u32> = 1..=5;
/// Prices and totals are drawn in cents, ratings in tenths.
const PRODUCT_PRICE_CENTS: u32 = 100_000;
const ORDER_TOTAL_CENTS: u32 = 50_000;
const RATING_TENTHS: u32 = 50;
const IN_STOCK_PROBABILITY: f64 = 0.7;
const USER_HISTORY_DAYS: i64 = 365;
const ORDER_HISTORY_DAYS: i64 = 30;
const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const TAG_LEN: usize = 5;
const TAG_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub(crate) const PRODUCT_CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Books", "Home"];
pub(crate) const ORDER_STATUSES: [&str; 4] = ["pending", "confirmed", "shipped", "delivered"];

pub(super) fn user(rng: &mut StdRng, now: DateTime<Utc>) -> Value {
    json!({
        "id": rng.gen_range(ID_RANGE),
        "name": format!("User {}", random_tag(rng)),
        "email": format!("user{}@test.com", random_tag(rng)),
        "age": rng.gen_range(USER_AGE_RANGE),
        "active": rng.gen_bool(0.5),
        "createdAt": past_timestamp(rng, now, USER_HISTORY_DAYS),
    })
}

pub(super) fn product(rng: &mut StdRng, _now: DateTime<Utc>) -> Value {
    json!({
        "id": rng.gen_range(ID_RANGE),
        "name": format!("Product {}", random_tag(rng)),
        "price": scaled(rng.gen_range(0..PRODUCT_PRICE_CENTS), 100.0),
        "category": pick_label(rng, &PRODUCT_CATEGORIES),
        "inStock": rng.gen_bool(IN_STOCK_PROBABILITY),
        "rating": scaled(rng.gen_range(0..RATING_TENTHS), 10.0),
    })
}

pub(super) fn order(rng: &mut StdRng, now: DateTime<Utc>) -> Value {
    json!({
        "id": rng.gen_range(ID_RANGE),
        "userId": rng.gen_range(ORDER_USER_ID_RANGE),
        "total": scaled(rng.gen_range(0..ORDER_TOTAL_CENTS), 100.0),
        "status": pick_label(rng, &ORDER_STATUSES),
        "items": rng.gen_range(ORDER_ITEMS_RANGE),
        "orderDate": past_timestamp(rng, now, ORDER_HISTORY_DAYS),
    })
}

fn scaled(units: u32, divisor: f64) -> f64 {
    f64::from(units) / divisor
}

fn pick_label(rng: &mut StdRng, labels: &[&'static str]) -> &'static str {
    labels.choose(rng).copied().unwrap_or_default()
}

fn random_tag(rng: &mut StdRng) -> String {
    (0..TAG_LEN)
        .filter_map(|_| TAG_ALPHABET.choose(rng).map(|byte| char::from(*byte)))
        .collect()
}

fn past_timestamp(rng: &mut StdRng, now: DateTime<Utc>, days: i64) -> String {
    let window_ms = days.saturating_mul(MS_PER_DAY);
    let offset_ms = rng.gen_range(0..window_ms);
    let at = TimeDelta::try_milliseconds(offset_ms)
        .and_then(|offset| now.checked_sub_signed(offset))
        .unwrap_or(now);
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
