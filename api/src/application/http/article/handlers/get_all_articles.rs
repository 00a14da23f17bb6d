use axum::extract::State;
use sift_core::domain::{
    article::ports::ArticleService,
    search::{entities::page::Listing, value_objects::SearchParams},
};

use crate::application::http::{
    query_extractor::SearchParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/all",
    tag = "article",
    summary = "List all matching articles",
    description = "Returns every article matching the search term, without pagination or derived columns. `per_page` and `page` are ignored.",
    params(SearchParams),
    responses(
        (status = 200, body = Listing)
    )
)]
pub async fn get_all_articles(
    State(state): State<AppState>,
    SearchParamsExtractor(params): SearchParamsExtractor,
) -> Result<Response<Listing>, ApiError> {
    let listing = state
        .service
        .list_articles(params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(listing))
}
