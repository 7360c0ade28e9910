//! Pagination arithmetic shared by all list endpoints.

use serde::Serialize;

/// Page size applied when the query carries no usable `limit`.
pub const DEFAULT_LIMIT: i64 = 5;

/// Hard ceiling on the page size, whatever the query asks for.
pub const MAX_LIMIT: i64 = 10;

/// Parse a raw query value as a whole number, truncating toward zero.
fn parse_whole(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| n.trunc() as i64)
}

/// Resolve the page size from the raw `limit` query value.
///
/// Absent, non-numeric, zero or negative values fall back to
/// [`DEFAULT_LIMIT`]; anything above [`MAX_LIMIT`] is clamped. The result is
/// always in `[1, MAX_LIMIT]`.
pub fn resolve_limit(raw: Option<&str>) -> i64 {
    match raw.and_then(parse_whole) {
        Some(n) if n > 0 => n.min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

/// Resolve the row offset from the resolved limit and the raw `page` value.
///
/// Absent, non-numeric, zero or negative pages are treated as page 1, which
/// yields offset zero.
pub fn resolve_offset(limit: i64, raw_page: Option<&str>) -> i64 {
    let page = match raw_page.and_then(parse_whole) {
        Some(n) if n > 0 => n,
        _ => 1,
    };
    limit.saturating_mul(page - 1)
}

/// Pagination summary returned alongside every page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total_count: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub next_page: Option<i64>,
    pub prev_page: Option<i64>,
}

impl Pagination {
    /// Derive the summary from the unbounded match count and the window that
    /// produced the page.
    ///
    /// The current page is recomputed from offset and limit rather than
    /// carried through, so callers cannot disagree with the window they
    /// actually queried.
    pub fn build(total_count: i64, limit: i64, offset: i64) -> Self {
        let current_page = offset.saturating_add(limit + limit - 1) / limit;
        let total_pages = (total_count + limit - 1) / limit;
        let next_page = (current_page < total_pages).then_some(current_page + 1);
        let prev_page = (current_page > 1).then_some(current_page - 1);

        Self {
            total_count,
            current_page,
            total_pages,
            next_page,
            prev_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_when_absent_or_junk() {
        assert_eq!(resolve_limit(None), 5);
        assert_eq!(resolve_limit(Some("banana")), 5);
        assert_eq!(resolve_limit(Some("")), 5);
        assert_eq!(resolve_limit(Some("0")), 5);
        assert_eq!(resolve_limit(Some("-3")), 5);
    }

    #[test]
    fn limit_truncates_fractions_toward_zero() {
        assert_eq!(resolve_limit(Some("2.8")), 2);
        // 0.8 truncates to zero, which falls back to the default
        assert_eq!(resolve_limit(Some("0.8")), 5);
    }

    #[test]
    fn limit_clamps_to_maximum() {
        assert_eq!(resolve_limit(Some("1000")), 10);
        assert_eq!(resolve_limit(Some("10")), 10);
        assert_eq!(resolve_limit(Some("7")), 7);
    }

    #[test]
    fn offset_defaults_to_first_page() {
        assert_eq!(resolve_offset(5, None), 0);
        assert_eq!(resolve_offset(5, Some("1")), 0);
        assert_eq!(resolve_offset(5, Some("0")), 0);
        assert_eq!(resolve_offset(5, Some("-2")), 0);
        assert_eq!(resolve_offset(5, Some("junk")), 0);
        assert_eq!(resolve_offset(5, Some("0.8")), 0);
    }

    #[test]
    fn offset_multiplies_limit_by_preceding_pages() {
        assert_eq!(resolve_offset(5, Some("3")), 10);
        assert_eq!(resolve_offset(10, Some("2")), 10);
        assert_eq!(resolve_offset(2, Some("4.9")), 6);
    }

    #[test]
    fn build_on_empty_result() {
        let p = Pagination::build(0, 5, 0);
        assert_eq!(
            p,
            Pagination {
                total_count: 0,
                current_page: 1,
                total_pages: 0,
                next_page: None,
                prev_page: None,
            }
        );
    }

    #[test]
    fn build_first_page() {
        let p = Pagination::build(13, 5, 0);
        assert_eq!(p.total_count, 13);
        assert_eq!(p.current_page, 1);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.next_page, Some(2));
        assert_eq!(p.prev_page, None);
    }

    #[test]
    fn build_middle_page() {
        let p = Pagination::build(13, 5, 5);
        assert_eq!(p.current_page, 2);
        assert_eq!(p.next_page, Some(3));
        assert_eq!(p.prev_page, Some(1));
    }

    #[test]
    fn build_last_page() {
        let p = Pagination::build(13, 5, 10);
        assert_eq!(p.current_page, 3);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.next_page, None);
        assert_eq!(p.prev_page, Some(2));
    }

    #[test]
    fn build_past_the_end() {
        let p = Pagination::build(13, 5, 490);
        assert_eq!(p.current_page, 99);
        assert_eq!(p.next_page, None);
        assert_eq!(p.prev_page, Some(98));
    }

    #[test]
    fn serializes_absent_neighbours_as_null() {
        let json = serde_json::to_value(Pagination::build(13, 10, 0)).unwrap();
        assert_eq!(json["total_count"], 13);
        assert_eq!(json["total_pages"], 2);
        assert_eq!(json["next_page"], 2);
        assert!(json["prev_page"].is_null());
    }
}
