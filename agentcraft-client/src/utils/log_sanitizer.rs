//! Log sanitization utilities
//!
//! Keeps access tokens and oversized response bodies out of debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of trailing characters left visible by [`mask_secret`].
const VISIBLE_SUFFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise the first `TRUNCATE_LIMIT` bytes with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret, keeping only its last four characters.
///
/// Secrets of four characters or fewer are fully masked.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count == 0 {
        return String::new();
    }
    if count <= VISIBLE_SUFFIX {
        return "•".repeat(count);
    }
    let visible: String = secret.chars().skip(count - VISIBLE_SUFFIX).collect();
    format!("{}{visible}", "•".repeat((count - VISIBLE_SUFFIX).min(8)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
    }

    #[test]
    fn multibyte_boundary_is_respected() {
        let s = "模".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.starts_with('模'));
    }

    #[test]
    fn mask_keeps_suffix() {
        assert_eq!(mask_secret("sk-abcdef123456"), "••••••••3456");
    }

    #[test]
    fn mask_short_and_empty() {
        assert_eq!(mask_secret("abc"), "•••");
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    fn mask_never_contains_prefix() {
        let masked = mask_secret("secret-token-value");
        assert!(!masked.contains("secret"));
    }
}
