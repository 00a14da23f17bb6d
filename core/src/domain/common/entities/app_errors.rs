use thiserror::Error;

use crate::domain::search::entities::errors::SearchError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Unknown sort column: {0}")]
    UnknownSortColumn(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Database unavailable")]
    DatabaseUnavailable,
}

impl From<SearchError> for CoreError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::UnknownSortColumn(column) => CoreError::UnknownSortColumn(column),
            SearchError::UnknownColumn(column) => CoreError::UnknownColumn(column),
            SearchError::Database(_)
            | SearchError::UnknownRelation(_)
            | SearchError::InvalidFieldPath(_) => CoreError::InternalServerError,
        }
    }
}
