use serde::Serialize;
use utoipa::ToSchema;

use super::record::Record;

/// One page of a decorated listing
///
/// `sortable` is serialized ahead of the pagination fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ResultPage {
    pub sortable: Vec<String>,
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Record>,
}

impl ResultPage {
    /// A page with nothing in it
    pub fn empty(sortable: Vec<String>, per_page: u64) -> Self {
        Self {
            sortable,
            current_page: 1,
            last_page: 1,
            per_page,
            total: 0,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Every row of a decorated listing, without pagination
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Listing {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Record>,
    pub sortable: Vec<String>,
}
