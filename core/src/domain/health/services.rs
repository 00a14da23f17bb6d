use crate::domain::{
    article::ports::ArticleRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::{HealthCheckRepository, HealthCheckService},
};

impl<AR, HC> HealthCheckService for Service<AR, HC>
where
    AR: ArticleRepository,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<(), CoreError> {
        self.health_check_repository.ping().await
    }
}
