use std::str::FromStr;

use sea_orm::{EntityTrait, RelationDef};

/// Search metadata declared by a record type
///
/// Implemented by SeaORM entities that can be listed through
/// [`SearchQuery`](crate::infrastructure::search::SearchQuery).
pub trait Searchable: EntityTrait {
    /// Fields searched when the caller does not name any
    fn searchable_fields() -> &'static [&'static str] {
        &[]
    }

    /// Resolve the relation named by the first half of a `relation.column` path
    fn search_relation(_name: &str) -> Option<RelationDef> {
        None
    }

    /// Whether `name` is a column of this entity
    fn has_column(name: &str) -> bool {
        <Self::Column as FromStr>::from_str(name).is_ok()
    }
}
