/// Characters an alias may be built from
pub const ALIAS_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of every generated alias
pub const ALIAS_LENGTH: usize = 8;

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    // 每个字符独立、均匀地从字母表中选取
    iter::repeat_with(|| ALIAS_ALPHABET[rand::random_range(0..ALIAS_ALPHABET.len())] as char)
        .take(length)
        .collect()
}

/// Whether `code` has the shape of a generated alias
///
/// Used to answer obviously foreign paths without touching the index lock.
#[inline]
pub fn is_valid_alias(code: &str) -> bool {
    code.len() == ALIAS_LENGTH && code.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Strip one trailing `/` from the configured response prefix
pub fn normalize_response_prefix(prefix: &str) -> String {
    prefix.strip_suffix('/').unwrap_or(prefix).to_string()
}
