use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use sift_core::domain::search::value_objects::SearchParams;
use std::collections::HashMap;

use super::query_params::QueryParamsExt;

/// Extractor for the `q`, `orderBy`, `orderDirection`, `per_page` and `page`
/// query parameters
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     SearchParamsExtractor(params): SearchParamsExtractor,
/// ) -> Result<Response<ResultPage>, ApiError> {
///     // hand params to a service
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SearchParamsExtractor(pub SearchParams);

impl<S> FromRequestParts<S> for SearchParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(SearchParamsExtractor(query_map.parse_search_params()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> SearchParams {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let SearchParamsExtractor(params) = SearchParamsExtractor::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        params
    }

    #[tokio::test]
    async fn test_extracts_encoded_term() {
        let params = extract("/articles?q=grace%20hopper&orderBy=views&page=2").await;
        assert_eq!(params.term(), "grace hopper");
        assert_eq!(params.order_by.as_deref(), Some("views"));
        assert_eq!(params.page, Some(2));
    }

    #[tokio::test]
    async fn test_missing_query_string() {
        assert_eq!(extract("/articles").await, SearchParams::default());
    }
}
