use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use tracing::{error, instrument};

use crate::{
    domain::{
        article::{
            ports::ArticleRepository,
            value_objects::{ARTICLE_SEARCHABLE, ARTICLE_SORTABLE, POPULAR_VIEWS},
        },
        common::entities::app_errors::CoreError,
        search::{
            entities::{
                errors::SearchError,
                page::{Listing, ResultPage},
            },
            value_objects::{Projection, SearchParams},
        },
    },
    entity::prelude::Articles,
    infrastructure::search::SearchQuery,
};

#[derive(Debug, Clone)]
pub struct PostgresArticleRepository {
    pub db: DatabaseConnection,
}

impl PostgresArticleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn query(&self, params: &SearchParams) -> Result<SearchQuery<Articles>, CoreError> {
        let query = SearchQuery::decorate(
            Articles::find(),
            ARTICLE_SEARCHABLE,
            ARTICLE_SORTABLE,
            params,
        )
        .map_err(map_search_error)?
        .add_column("title_length", |row| {
            json!(row.get_str("title").map_or(0, |title| title.chars().count()))
        })
        .add_column("is_popular", |row| {
            json!(row.get_i64("views").unwrap_or(0) >= POPULAR_VIEWS)
        });

        Ok(query)
    }
}

fn map_search_error(e: SearchError) -> CoreError {
    if let SearchError::Database(ref db_error) = e {
        error!("Failed to search articles: {}", db_error);
    }
    CoreError::from(e)
}

impl ArticleRepository for PostgresArticleRepository {
    #[instrument(skip(self))]
    async fn search_articles(&self, params: SearchParams) -> Result<ResultPage, CoreError> {
        self.query(&params)?
            .fetch_page(&self.db, None, &Projection::All)
            .await
            .map_err(map_search_error)
    }

    #[instrument(skip(self))]
    async fn list_articles(&self, params: SearchParams) -> Result<Listing, CoreError> {
        self.query(&params)?
            .fetch_all(&self.db, &Projection::All)
            .await
            .map_err(map_search_error)
    }
}
