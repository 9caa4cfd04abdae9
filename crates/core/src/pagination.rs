//! Pagination constants and clamping helpers for history listing.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API layer and the store adapter.

/// Default number of history records per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum number of history records per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit into `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Parse a raw `limit` query value and clamp it.
///
/// Query parameters arrive as strings; anything that does not parse as an
/// integer (absent, empty, `"abc"`) falls back to [`DEFAULT_PAGE_LIMIT`]
/// rather than producing a client error.
pub fn effective_limit(raw: Option<&str>) -> i64 {
    clamp_limit(
        raw.and_then(|s| s.parse().ok()),
        DEFAULT_PAGE_LIMIT,
        MAX_PAGE_LIMIT,
    )
}

/// Parse a raw `offset` query value and clamp it.
///
/// Non-numeric input falls back to 0.
pub fn effective_offset(raw: Option<&str>) -> i64 {
    clamp_offset(raw.and_then(|s| s.parse().ok()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
