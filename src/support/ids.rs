use uuid::Uuid;

/// Random RFC 4122 version-4 identifier.
#[must_use]
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Fast 32-bit rolling hash (`h = h * 31 + unit` over UTF-16 code units),
/// rendered as the lowercase hex of its magnitude.
///
/// Meant for cache keys and identity checks only. It has no collision
/// resistance; use [`md5_hex`] or a proper digest when that matters.
#[must_use]
pub fn fingerprint(data: &str) -> String {
    let hash = data.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    format!("{:x}", hash.unsigned_abs())
}

#[must_use]
pub fn md5_hex(data: impl AsRef<[u8]>) -> String {
    format!("{:x}", md5::compute(data))
}
