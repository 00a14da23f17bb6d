mod conditions;
pub mod decorator;

pub use decorator::SearchQuery;
