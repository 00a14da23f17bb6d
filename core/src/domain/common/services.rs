use crate::domain::{article::ports::ArticleRepository, health::ports::HealthCheckRepository};

#[derive(Clone)]
pub struct Service<AR, HC>
where
    AR: ArticleRepository,
    HC: HealthCheckRepository,
{
    pub article_repository: AR,
    pub health_check_repository: HC,
}

impl<AR, HC> Service<AR, HC>
where
    AR: ArticleRepository,
    HC: HealthCheckRepository,
{
    pub fn new(article_repository: AR, health_check_repository: HC) -> Self {
        Self {
            article_repository,
            health_check_repository,
        }
    }
}
