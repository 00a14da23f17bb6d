pub mod article_repository;
