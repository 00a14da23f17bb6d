use super::handlers::{
    get_all_articles::{__path_get_all_articles, get_all_articles},
    get_articles::{__path_get_articles, get_articles},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_articles, get_all_articles))]
pub struct ArticleApiDoc;

pub fn article_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/articles", state.args.server.root_path),
            get(get_articles),
        )
        .route(
            &format!("{}/articles/all", state.args.server.root_path),
            get(get_all_articles),
        )
}
