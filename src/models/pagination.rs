//! Lenient pagination parameters

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Parse the leading integer of a query string value.
///
/// Surrounding whitespace and one sign are accepted and anything after the
/// leading digits is ignored, so `"12abc"` yields 12. Values without leading
/// digits, or too large for an `i64`, yield `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// A resolved, always-valid page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// 1-based page number
    pub page: u64,
    pub page_size: u64,
}

impl PageSpec {
    /// Build a page request from raw query values.
    ///
    /// Missing, malformed or non-positive values fall back to the defaults.
    /// The page size has no upper bound.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            page_size: positive_or(page_size, DEFAULT_PAGE_SIZE),
        }
    }

    /// Number of matching records skipped before this page
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(parse_leading_int)
        .filter(|v| *v > 0)
        .map(|v| v as u64)
        .unwrap_or(default)
}
