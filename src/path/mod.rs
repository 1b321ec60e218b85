//! Dotted-path access over loosely structured JSON records.
//!
//! Paths are split on `.` and each segment is taken verbatim: there is no
//! array-index syntax and no escaping. Only objects are traversed, so any
//! scalar or array met before the last segment resolves as "undefined"
//! (`None`). A JSON `null` stored at the final segment is a defined value.
use serde_json::{Map, Number, Value};


/// Separator between path segments.
const PATH_SEPARATOR: char = '.';

/// Resolves `path` inside `record`.
///
/// Walking stops at the first `null` or non-object value; the result is
/// `None` in that case. Falsy but defined values (`false`, `0`, `""`,
/// a trailing `null`) are returned as-is.
#[must_use]
pub fn get<'value>(record: &'value Value, path: &str) -> Option<&'value Value> {
    let mut current = Some(record);
    for segment in path.split(PATH_SEPARATOR) {
        current = match current {
            None | Some(Value::Null) => return None,
            Some(value) => value.as_object().and_then(|map| map.get(segment)),
        };
    }
    current
}

/// Resolves `path`, falling back to `default` when it is undefined.
#[must_use]
pub fn get_or<'value>(record: &'value Value, path: &str, default: &'value Value) -> &'value Value {
    get(record, path).unwrap_or(default)
}

/// Assigns `value` at `path`, creating intermediate objects as needed.
///
/// Any intermediate segment that is missing or holds something other than an
/// object is replaced with an empty object. The record is mutated in place and
/// returned for chaining.
pub fn set<'record>(
    record: &'record mut Map<String, Value>,
    path: &str,
    value: Value,
) -> &'record mut Map<String, Value> {
    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    assign(record, &segments, value);
    record
}

fn assign(map: &mut Map<String, Value>, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert((*last).to_owned(), value);
        }
        [head, rest @ ..] => {
            let slot = map.entry(*head).or_insert(Value::Null);
            match slot {
                Value::Object(child) => assign(child, rest, value),
                other => {
                    let mut child = Map::new();
                    assign(&mut child, rest, value);
                    *other = Value::Object(child);
                }
            }
        }
    }
}

/// Copies the listed top-level keys that exist in `record`.
#[must_use]
pub fn pick<I, S>(record: &Map<String, Value>, keys: I) -> Map<String, Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut picked = Map::new();
    for key in keys {
        let key = key.as_ref();
        if let Some(value) = record.get(key) {
            picked.insert(key.to_owned(), value.clone());
        }
    }
    picked
}

/// Copies `record` without the listed top-level keys.
#[must_use]
pub fn omit<I, S>(record: &Map<String, Value>, keys: I) -> Map<String, Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut remaining = record.clone();
    for key in keys {
        remaining.remove(key.as_ref());
    }
    remaining
}

/// Deep structural equality.
///
/// Object key order is irrelevant and numbers compare by value, so `1` and
/// `1.0` are equal just as their canonical JSON text would be.
#[must_use]
pub fn is_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(lhs), Value::Number(rhs)) => numbers_equal(lhs, rhs),
        (Value::Array(lhs), Value::Array(rhs)) => {
            lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| is_equal(a, b))
        }
        (Value::Object(lhs), Value::Object(rhs)) => {
            lhs.len() == rhs.len()
                && lhs
                    .iter()
                    .all(|(key, value)| rhs.get(key).is_some_and(|other| is_equal(value, other)))
        }
        _ => left == right,
    }
}

/// Equality over possibly-undefined values: two undefined values are equal,
/// undefined never equals a defined value (including `null`).
#[must_use]
pub fn is_equal_opt(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(lhs), Some(rhs)) => is_equal(lhs, rhs),
        (None, Some(_)) | (Some(_), None) => false,
    }
}

fn numbers_equal(lhs: &Number, rhs: &Number) -> bool {
    if let (Some(a), Some(b)) = (lhs.as_i64(), rhs.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (lhs.as_u64(), rhs.as_u64()) {
        return a == b;
    }
    match (lhs.as_f64(), rhs.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Independent deep copy of `value`.
///
/// `Value` cannot hold functions, cycles, or non-finite numbers, so the copy
/// is exact.
#[must_use]
pub fn clone_deep(value: &Value) -> Value {
    value.clone()
}
