use crate::{
    domain::common::{SiftConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        article::PostgresArticleRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
    },
};

pub type SiftService = Service<PostgresArticleRepository, PostgresHealthCheckRepository>;

pub async fn create_service(config: SiftConfig) -> Result<SiftService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: config.database.max_connections,
    })
    .await?;

    Ok(Service::new(
        PostgresArticleRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
