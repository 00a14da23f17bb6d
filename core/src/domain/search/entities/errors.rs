use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Unknown sort column: {0}")]
    UnknownSortColumn(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Unknown relation: {0}")]
    UnknownRelation(String),

    #[error("Invalid field path: {0}")]
    InvalidFieldPath(String),
}
