pub mod get_all_articles;
pub mod get_articles;
