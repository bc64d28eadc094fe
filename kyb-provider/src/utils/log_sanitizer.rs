//! Log sanitization utilities
//!
//! Registry bodies can be large and queries carry tax ids and API keys;
//! none of that should land in a log file verbatim.

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of trailing characters left readable by [`mask_secret`].
const VISIBLE_SUFFIX: usize = 3;

/// Largest char boundary not greater than `index`.
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

/// Truncate a response body for logging.
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

/// Mask an identifier (RFC, API key) keeping only its last few characters.
///
/// `"ACM010101ABC"` becomes `"*********ABC"`. Values no longer than the
/// visible suffix are fully masked.
pub fn mask_secret(s: &str) -> String {
    let count = s.chars().count();
    if count <= VISIBLE_SUFFIX {
        return "*".repeat(count);
    }
    let hidden = count - VISIBLE_SUFFIX;
    let suffix: String = s.chars().skip(hidden).collect();
    format!("{}{suffix}", "*".repeat(hidden))
}
