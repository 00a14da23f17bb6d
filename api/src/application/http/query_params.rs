use std::collections::HashMap;

use sift_core::domain::search::value_objects::SearchParams;

/// Listing parameters read from a raw query string
///
/// Handles:
/// - q=term
/// - orderBy=column, orderDirection=asc|desc
/// - per_page=10, page=1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQueryParams {
    pub term: Option<String>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub per_page: Option<u64>,
    pub page: Option<u64>,
}

impl SearchQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from query string map
    ///
    /// Blank values count as absent and numbers that do not parse are dropped.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut params = Self::new();

        for (key, value) in query_map {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match key.as_str() {
                "q" => params.term = Some(value.to_string()),
                "orderBy" => params.order_by = Some(value.to_string()),
                "orderDirection" => params.order_direction = Some(value.to_string()),
                "per_page" => params.per_page = value.parse::<u64>().ok(),
                "page" => params.page = value.parse::<u64>().ok(),
                _ => {}
            }
        }

        params
    }
}

impl From<SearchQueryParams> for SearchParams {
    fn from(params: SearchQueryParams) -> Self {
        SearchParams {
            term: params.term,
            order_by: params.order_by,
            order_direction: params.order_direction,
            per_page: params.per_page,
            page: params.page,
        }
    }
}

/// Helper trait for reading search parameters off a parsed query string
pub trait QueryParamsExt {
    fn parse_search_params(&self) -> SearchParams;
}

impl QueryParamsExt for HashMap<String, String> {
    fn parse_search_params(&self) -> SearchParams {
        SearchQueryParams::from_query_map(self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_parse() {
        let params = SearchQueryParams::from_query_map(&map(&[
            ("q", "rust"),
            ("orderBy", "Views"),
            ("orderDirection", "desc"),
        ]));
        assert_eq!(params.term.as_deref(), Some("rust"));
        assert_eq!(params.order_by.as_deref(), Some("Views"));
        assert_eq!(params.order_direction.as_deref(), Some("desc"));
        assert_eq!(params.per_page, None);
        assert_eq!(params.page, None);
    }

    #[test]
    fn test_pagination_parse() {
        let params =
            SearchQueryParams::from_query_map(&map(&[("per_page", "25"), ("page", "3")]));
        assert_eq!(params.per_page, Some(25));
        assert_eq!(params.page, Some(3));
    }

    #[test]
    fn test_invalid_numbers_are_dropped() {
        let params =
            SearchQueryParams::from_query_map(&map(&[("per_page", "lots"), ("page", "-1")]));
        assert_eq!(params.per_page, None);
        assert_eq!(params.page, None);
    }

    #[test]
    fn test_blank_values_are_absent() {
        let params = SearchQueryParams::from_query_map(&map(&[("q", "  "), ("orderBy", "")]));
        assert_eq!(params, SearchQueryParams::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let params = map(&[("sort", "-views"), ("limit", "5"), ("q", "ada")]).parse_search_params();
        assert_eq!(params, SearchParams::new().with_term("ada"));
    }
}
