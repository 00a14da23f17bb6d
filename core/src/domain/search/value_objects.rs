use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::entities::errors::SearchError;

/// Page size used when neither the request nor the caller provides one
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Page number used when the request does not provide one
pub const DEFAULT_PAGE: u64 = 1;

/// Listing parameters as they arrive from a request
///
/// Every field is optional; absent values fall back to the documented
/// defaults at the point they are consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free-text term, substring-matched against every searchable field
    #[serde(rename = "q")]
    pub term: Option<String>,

    /// Column to sort by, lower-cased before validation
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,

    /// `asc` or `desc`, defaults to `asc`
    #[serde(rename = "orderDirection")]
    pub order_direction: Option<String>,

    /// Page size, defaults to 10
    pub per_page: Option<u64>,

    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_order(mut self, order_by: impl Into<String>, direction: Option<&str>) -> Self {
        self.order_by = Some(order_by.into());
        self.order_direction = direction.map(str::to_string);
        self
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// The search term, or an empty string when absent
    pub fn term(&self) -> &str {
        self.term.as_deref().unwrap_or("")
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// What to do with an `orderBy` value that is neither allow-listed nor a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSortPolicy {
    /// Skip the order clause and carry on
    #[default]
    Ignore,
    /// Fail the decoration with [`SearchError::UnknownSortColumn`]
    Reject,
}

/// Tuning knobs for decoration
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub on_unknown_sort: UnknownSortPolicy,
}

impl SearchOptions {
    pub fn reject_unknown_sort() -> Self {
        Self {
            on_unknown_sort: UnknownSortPolicy::Reject,
        }
    }
}

/// Which columns a fetch should return
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Projection {
    #[default]
    All,
    Columns(Vec<String>),
}

impl Projection {
    pub fn columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection::Columns(columns.into_iter().map(Into::into).collect())
    }
}

/// A searchable column reference, either on the queried table or one relation away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPath {
    Column(String),
    Related { relation: String, column: String },
}

impl FieldPath {
    /// Parse `column` or `relation.column`
    pub fn parse(path: &str) -> Result<Self, SearchError> {
        let parts: Vec<&str> = path.split('.').map(str::trim).collect();

        match parts.as_slice() {
            [column] if !column.is_empty() => Ok(FieldPath::Column(column.to_string())),
            [relation, column] if !relation.is_empty() && !column.is_empty() => {
                Ok(FieldPath::Related {
                    relation: relation.to_string(),
                    column: column.to_string(),
                })
            }
            _ => Err(SearchError::InvalidFieldPath(path.to_string())),
        }
    }
}
