use rand::Rng;
use rand::seq::SliceRandom;

const FIRST_NAMES: [&str; 6] = ["John", "Jane", "Bob", "Alice", "Charlie", "Diana"];
const EMAIL_DOMAINS: [&str; 3] = ["example.com", "test.org", "demo.net"];
const PHONE_PREFIX: &str = "+33";
const PHONE_RANGE: std::ops::Range<u32> = 100_000_000..1_000_000_000;

pub fn faker_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FIRST_NAMES.choose(rng).copied().unwrap_or_default()
}

/// Lower-cased `name` (or `user`) at a random test domain.
pub fn faker_email<R: Rng + ?Sized>(rng: &mut R, name: Option<&str>) -> String {
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or_default();
    let local = name.filter(|value| !value.is_empty()).unwrap_or("user");
    format!("{}@{}", local.to_lowercase(), domain)
}

pub fn faker_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", PHONE_PREFIX, rng.gen_range(PHONE_RANGE))
}

/// Price between `min` and `max` rendered with two decimals. An empty range
/// yields `min`.
pub fn faker_price<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> String {
    let value = if min < max {
        // Interpolate instead of `max - min`, which overflows for wide bounds.
        let unit = rng.r#gen::<f64>();
        min * (1.0 - unit) + max * unit
    } else {
        min
    };
    format!("{:.2}", value)
}
