use axum::extract::State;
use sift_core::domain::{
    article::ports::ArticleService,
    search::{entities::page::ResultPage, value_objects::SearchParams},
};

use crate::application::http::{
    query_extractor::SearchParamsExtractor,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "article",
    summary = "Search articles",
    description = "Returns one page of articles whose title, body, author name or comments contain the search term. Each item carries the derived `title_length` and `is_popular` columns.",
    params(SearchParams),
    responses(
        (status = 200, body = ResultPage),
        (status = 400, body = ErrorResponse, description = "Invalid pagination")
    )
)]
pub async fn get_articles(
    State(state): State<AppState>,
    SearchParamsExtractor(params): SearchParamsExtractor,
) -> Result<Response<ResultPage>, ApiError> {
    let page = state
        .service
        .search_articles(params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
