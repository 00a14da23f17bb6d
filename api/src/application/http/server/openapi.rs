use crate::application::http::{article::router::ArticleApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sift API"
    ),
    nest(
        (path = "/articles", api = ArticleApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
