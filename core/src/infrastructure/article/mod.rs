pub mod repositories;

pub use repositories::article_repository::PostgresArticleRepository;
