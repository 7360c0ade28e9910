//! Validation of raw listing query parameters.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::pagination::{resolve_limit, resolve_offset};

/// Raw, untrusted query-string input for list endpoints.
///
/// `limit` and `page` stay strings here so junk and out-of-range values can
/// fall back the documented way instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// Sort direction, parsed case-insensitively from the `order` query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse an optional `order` value; absent means descending.
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw {
            None => Ok(Self::Desc),
            Some(s) if s.eq_ignore_ascii_case("asc") => Ok(Self::Asc),
            Some(s) if s.eq_ignore_ascii_case("desc") => Ok(Self::Desc),
            Some(_) => Err(AppError::InvalidOrder),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Listing parameters that passed validation.
///
/// `sort_column` is borrowed from the endpoint's static whitelist, so only
/// vetted identifiers ever reach the SQL text. The topic value always
/// travels as a bound parameter.
#[derive(Debug, Clone)]
pub struct ResolvedListingParams {
    pub sort_column: &'static str,
    pub direction: SortDirection,
    pub topic: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl ResolvedListingParams {
    /// Validate a raw query against the endpoint's sortable columns.
    ///
    /// A `sort_by` outside the whitelist or an unrecognized `order` is an
    /// error, never silently replaced with a default. Only an absent value
    /// gets the default (`created_at`, descending).
    pub fn resolve(
        query: &ListingQuery,
        sortable: &'static [&'static str],
    ) -> Result<Self, AppError> {
        let sort_column = match query.sort_by.as_deref() {
            None => "created_at",
            Some(raw) => sortable
                .iter()
                .find(|col| **col == raw)
                .copied()
                .ok_or(AppError::InvalidSortColumn)?,
        };

        let direction = SortDirection::parse(query.order.as_deref())?;
        let limit = resolve_limit(query.limit.as_deref());
        let offset = resolve_offset(limit, query.page.as_deref());

        Ok(Self {
            sort_column,
            direction,
            topic: query.topic.clone(),
            limit,
            offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[&str] = &["article_id", "created_at", "votes"];

    fn query(sort_by: Option<&str>, order: Option<&str>) -> ListingQuery {
        ListingQuery {
            sort_by: sort_by.map(String::from),
            order: order.map(String::from),
            ..ListingQuery::default()
        }
    }

    #[test]
    fn defaults_to_created_at_descending() {
        let params = ResolvedListingParams::resolve(&query(None, None), COLUMNS).unwrap();
        assert_eq!(params.sort_column, "created_at");
        assert_eq!(params.direction, SortDirection::Desc);
        assert_eq!(params.limit, 5);
        assert_eq!(params.offset, 0);
    }

    #[test]
    fn accepts_whitelisted_column() {
        let params = ResolvedListingParams::resolve(&query(Some("votes"), None), COLUMNS).unwrap();
        assert_eq!(params.sort_column, "votes");
    }

    #[test]
    fn rejects_unknown_sort_column() {
        let err = ResolvedListingParams::resolve(&query(Some("body"), None), COLUMNS).unwrap_err();
        assert!(matches!(err, AppError::InvalidSortColumn));

        // Whole identifiers only, no SQL fragments
        let err = ResolvedListingParams::resolve(
            &query(Some("votes; DROP TABLE articles"), None),
            COLUMNS,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidSortColumn));
    }

    #[test]
    fn order_is_case_insensitive() {
        for raw in ["asc", "ASC", "Asc"] {
            let params = ResolvedListingParams::resolve(&query(None, Some(raw)), COLUMNS).unwrap();
            assert_eq!(params.direction, SortDirection::Asc);
        }
        for raw in ["desc", "DESC", "Desc"] {
            let params = ResolvedListingParams::resolve(&query(None, Some(raw)), COLUMNS).unwrap();
            assert_eq!(params.direction, SortDirection::Desc);
        }
    }

    #[test]
    fn rejects_unknown_order() {
        let err = ResolvedListingParams::resolve(&query(None, Some("sideways")), COLUMNS).unwrap_err();
        assert!(matches!(err, AppError::InvalidOrder));
    }

    #[test]
    fn limit_and_page_flow_through_resolution() {
        let raw = ListingQuery {
            limit: Some("1000".to_string()),
            page: Some("2".to_string()),
            ..ListingQuery::default()
        };
        let params = ResolvedListingParams::resolve(&raw, COLUMNS).unwrap();
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset, 10);
    }

    #[test]
    fn topic_is_carried_verbatim() {
        let raw = ListingQuery {
            topic: Some("coding".to_string()),
            ..ListingQuery::default()
        };
        let params = ResolvedListingParams::resolve(&raw, COLUMNS).unwrap();
        assert_eq!(params.topic.as_deref(), Some("coding"));
    }
}
