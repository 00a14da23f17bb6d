use tracing::instrument;

use crate::domain::{
    article::{
        ports::{ArticleRepository, ArticleService},
        value_objects::MAX_PER_PAGE,
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    search::{
        entities::page::{Listing, ResultPage},
        value_objects::SearchParams,
    },
};

fn validate_pagination(params: &SearchParams) -> Result<(), CoreError> {
    if let Some(per_page) = params.per_page
        && (per_page == 0 || per_page > MAX_PER_PAGE)
    {
        return Err(CoreError::InvalidPagination(format!(
            "per_page must be between 1 and {MAX_PER_PAGE}"
        )));
    }

    if params.page == Some(0) {
        return Err(CoreError::InvalidPagination(
            "page must be >= 1".to_string(),
        ));
    }

    Ok(())
}

impl<AR, HC> ArticleService for Service<AR, HC>
where
    AR: ArticleRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self), fields(term = params.term()))]
    async fn search_articles(&self, params: SearchParams) -> Result<ResultPage, CoreError> {
        validate_pagination(&params)?;

        self.article_repository.search_articles(params).await
    }

    #[instrument(skip(self), fields(term = params.term()))]
    async fn list_articles(&self, params: SearchParams) -> Result<Listing, CoreError> {
        self.article_repository.list_articles(params).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::domain::{
        article::ports::MockArticleRepository, health::ports::MockHealthCheckRepository,
    };

    #[derive(Clone, Default)]
    struct CountingArticleRepository {
        calls: Arc<AtomicUsize>,
    }

    impl ArticleRepository for CountingArticleRepository {
        async fn search_articles(&self, params: SearchParams) -> Result<ResultPage, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ResultPage {
                sortable: vec!["title".to_string()],
                current_page: params.page.unwrap_or(1),
                last_page: 1,
                per_page: params.per_page.unwrap_or(10),
                total: 0,
                items: Vec::new(),
            })
        }

        async fn list_articles(&self, _params: SearchParams) -> Result<Listing, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Listing {
                data: Vec::new(),
                sortable: vec!["title".to_string()],
            })
        }
    }

    #[tokio::test]
    async fn test_search_articles_rejects_oversized_pages() {
        let mut repository = MockArticleRepository::new();
        repository.expect_search_articles().never();
        let service = Service::new(repository, MockHealthCheckRepository::new());

        let result = service
            .search_articles(SearchParams::new().with_per_page(500))
            .await;

        assert!(matches!(result, Err(CoreError::InvalidPagination(_))));
    }

    #[tokio::test]
    async fn test_search_articles_rejects_page_zero() {
        let mut repository = MockArticleRepository::new();
        repository.expect_search_articles().never();
        let service = Service::new(repository, MockHealthCheckRepository::new());

        let result = service
            .search_articles(SearchParams::new().with_page(0))
            .await;

        assert!(matches!(result, Err(CoreError::InvalidPagination(_))));
    }

    #[tokio::test]
    async fn test_search_articles_delegates_to_repository() {
        let repository = CountingArticleRepository::default();
        let calls = repository.calls.clone();
        let service = Service::new(repository, MockHealthCheckRepository::new());

        let page = service
            .search_articles(SearchParams::new().with_page(2).with_per_page(25))
            .await
            .unwrap();

        assert_eq!(page.current_page, 2);
        assert_eq!(page.per_page, 25);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        service.list_articles(SearchParams::new()).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
