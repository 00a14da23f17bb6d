use std::str::FromStr;

use sea_orm::{
    Condition, ConnectionTrait, DbBackend, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
    QueryTrait, Select, Statement,
};
use serde_json::Value;
use tracing::debug;

use crate::domain::search::{
    entities::{
        errors::SearchError,
        page::{Listing, ResultPage},
        record::{ColumnDerivation, Record},
    },
    ports::Searchable,
    value_objects::{
        DEFAULT_PAGE, DEFAULT_PER_PAGE, FieldPath, Projection, SearchOptions, SearchParams,
    },
};

use super::conditions::{apply_order, search_predicate};

/// A SeaORM select decorated with search, sort and derived columns
///
/// Built once per request through [`SearchQuery::decorate`], then consumed by
/// [`SearchQuery::fetch_page`] or [`SearchQuery::fetch_all`].
///
/// ```ignore
/// let page = SearchQuery::decorate(articles::Entity::find(), &["title", "author.name"], &["title"], &params)?
///     .add_column("title_length", |row| json!(row.get_str("title").map(str::len)))
///     .fetch_page(&db, None, &Projection::All)
///     .await?;
/// ```
pub struct SearchQuery<E: EntityTrait> {
    /// `None` when there was nothing to search for
    select: Option<Select<E>>,
    sortable: Vec<String>,
    per_page: Option<u64>,
    page: Option<u64>,
    derivations: Vec<ColumnDerivation>,
}

impl<E: Searchable> SearchQuery<E> {
    /// Decorate `select` with the default options
    pub fn decorate(
        select: Select<E>,
        searchable: &[&str],
        sortable: &[&str],
        params: &SearchParams,
    ) -> Result<Self, SearchError> {
        Self::decorate_with(select, searchable, sortable, params, SearchOptions::default())
    }

    /// Decorate `select` with search predicates and an order clause
    ///
    /// An empty `searchable` list falls back to [`Searchable::searchable_fields`].
    /// With no term and no searchable fields the query is dropped and every
    /// fetch returns an empty result.
    pub fn decorate_with(
        select: Select<E>,
        searchable: &[&str],
        sortable: &[&str],
        params: &SearchParams,
        options: SearchOptions,
    ) -> Result<Self, SearchError> {
        let searchable = if searchable.is_empty() {
            E::searchable_fields()
        } else {
            searchable
        };
        let sortable: Vec<String> = sortable.iter().map(|s| s.to_string()).collect();
        let term = params.term();

        let mut query = Self {
            select: None,
            sortable,
            per_page: params.per_page,
            page: params.page,
            derivations: Vec::new(),
        };

        if term.is_empty() && searchable.is_empty() {
            debug!("no search term and no searchable fields, query dropped");
            return Ok(query);
        }

        let mut select = select;

        if !searchable.is_empty() {
            let mut condition = Condition::any();
            for path in searchable {
                let path = FieldPath::parse(path)?;
                condition = condition.add(search_predicate::<E>(&path, term)?);
            }
            debug!(fields = searchable.len(), term, "search predicates added");
            select = select.filter(condition);
        }

        if let Some(order_by) = params.order_by.as_deref() {
            select = apply_order(
                select,
                order_by,
                params.order_direction.as_deref(),
                &query.sortable,
                options.on_unknown_sort,
            )?;
        }

        query.select = Some(select);
        Ok(query)
    }
}

impl<E: EntityTrait> SearchQuery<E> {
    /// Register a derived column, applied to every row of [`SearchQuery::fetch_page`]
    ///
    /// Columns are computed in registration order, so a later registration
    /// under the same name wins.
    pub fn add_column<F>(mut self, name: impl Into<String>, derive: F) -> Self
    where
        F: Fn(&Record) -> Value + Send + Sync + 'static,
    {
        self.derivations.push(ColumnDerivation::new(name, derive));
        self
    }

    /// Whether decoration dropped the query
    pub fn is_empty_result(&self) -> bool {
        self.select.is_none()
    }

    pub fn sortable(&self) -> &[String] {
        &self.sortable
    }

    /// The SQL that will run, if any
    pub fn statement(&self, backend: DbBackend) -> Option<Statement> {
        self.select.as_ref().map(|select| select.build(backend))
    }

    /// Fetch one page
    ///
    /// The page size comes from the request's `per_page` when present, then
    /// from `per_page`, then [`DEFAULT_PER_PAGE`]. A page past the end is
    /// replaced by the last page.
    pub async fn fetch_page<C>(
        &self,
        db: &C,
        per_page: Option<u64>,
        columns: &Projection,
    ) -> Result<ResultPage, SearchError>
    where
        C: ConnectionTrait,
    {
        let per_page = self.per_page.or(per_page).unwrap_or(DEFAULT_PER_PAGE).max(1);
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);

        let Some(select) = &self.select else {
            return Ok(ResultPage::empty(self.sortable.clone(), per_page));
        };

        let paginator = project(select.clone(), columns)?
            .into_json()
            .paginate(db, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let last_page = totals.number_of_pages.max(1);

        if page > last_page {
            debug!(requested = page, last_page, "page out of range, using last page");
        }
        let current_page = page.min(last_page);
        let rows = paginator.fetch_page(current_page - 1).await?;

        let items = rows
            .into_iter()
            .map(|row| self.augment(Record::from(row)))
            .collect();

        Ok(ResultPage {
            sortable: self.sortable.clone(),
            current_page,
            last_page,
            per_page,
            total: totals.number_of_items,
            items,
        })
    }

    /// Fetch every matching row
    ///
    /// Derived columns are not applied here.
    pub async fn fetch_all<C>(&self, db: &C, columns: &Projection) -> Result<Listing, SearchError>
    where
        C: ConnectionTrait,
    {
        let Some(select) = &self.select else {
            return Ok(Listing {
                data: Vec::new(),
                sortable: self.sortable.clone(),
            });
        };

        let rows = project(select.clone(), columns)?.into_json().all(db).await?;

        Ok(Listing {
            data: rows.into_iter().map(Record::from).collect(),
            sortable: self.sortable.clone(),
        })
    }

    fn augment(&self, mut record: Record) -> Record {
        for derivation in &self.derivations {
            derivation.apply(&mut record);
        }
        record
    }
}

fn project<E: EntityTrait>(
    select: Select<E>,
    columns: &Projection,
) -> Result<Select<E>, SearchError> {
    match columns {
        Projection::Columns(names) if !names.is_empty() => {
            let mut select = select.select_only();
            for name in names {
                let column = <E::Column as FromStr>::from_str(name)
                    .map_err(|_| SearchError::UnknownColumn(name.clone()))?;
                select = select.column(column);
            }
            Ok(select)
        }
        _ => Ok(select),
    }
}
