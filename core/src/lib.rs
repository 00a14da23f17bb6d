//! Searchable, sortable and paginated listings over SeaORM queries.
//!
//! [`SearchQuery`](infrastructure::search::SearchQuery) decorates a
//! `Select<E>` with a free-text search over declared fields, an allow-listed
//! order clause and derived columns, then fetches a page or every row.

pub mod application;
pub mod domain;
pub mod entity;
pub mod infrastructure;
