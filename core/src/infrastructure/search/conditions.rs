use std::str::FromStr;

use sea_orm::{
    EntityTrait, Identity, Order, QueryOrder, RelationDef, Select,
    sea_query::{Alias, DynIden, Expr, LikeExpr, Query, SimpleExpr, TableRef},
};
use tracing::debug;

use crate::domain::search::{
    entities::errors::SearchError,
    ports::Searchable,
    value_objects::{FieldPath, SortDirection, UnknownSortPolicy},
};

const LIKE_ESCAPE: char = '\\';

/// Escape LIKE wildcards so the term only ever matches literally
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn like_contains(term: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(term))).escape(LIKE_ESCAPE)
}

/// Build the predicate for one searchable field
pub(crate) fn search_predicate<E: Searchable>(
    path: &FieldPath,
    term: &str,
) -> Result<SimpleExpr, SearchError> {
    match path {
        FieldPath::Column(column) => {
            if !E::has_column(column) {
                return Err(SearchError::UnknownColumn(column.clone()));
            }
            Ok(Expr::col((E::default(), Alias::new(column.as_str()))).like(like_contains(term)))
        }
        FieldPath::Related { relation, column } => {
            let def = E::search_relation(relation)
                .ok_or_else(|| SearchError::UnknownRelation(relation.clone()))?;
            related_exists(def, column, term)
                .ok_or_else(|| SearchError::UnknownRelation(relation.clone()))
        }
    }
}

/// `EXISTS (SELECT 1 FROM related WHERE <join keys> AND related.column LIKE ...)`
fn related_exists(def: RelationDef, column: &str, term: &str) -> Option<SimpleExpr> {
    let from_tbl = table_iden(&def.from_tbl)?;
    let to_tbl = table_iden(&def.to_tbl)?;
    let from_cols = identity_columns(&def.from_col);
    let to_cols = identity_columns(&def.to_col);

    if from_cols.is_empty() || from_cols.len() != to_cols.len() {
        return None;
    }

    let mut subquery = Query::select();
    subquery.expr(Expr::val(1)).from(def.to_tbl.clone());

    for (from_col, to_col) in from_cols.into_iter().zip(to_cols) {
        subquery.and_where(Expr::col((to_tbl.clone(), to_col)).equals((from_tbl.clone(), from_col)));
    }
    subquery.and_where(Expr::col((to_tbl, Alias::new(column))).like(like_contains(term)));

    Some(Expr::exists(subquery.to_owned()))
}

fn table_iden(table: &TableRef) -> Option<DynIden> {
    match table {
        TableRef::Table(iden) => Some(iden.clone()),
        TableRef::SchemaTable(_, iden) => Some(iden.clone()),
        TableRef::TableAlias(_, alias) => Some(alias.clone()),
        _ => None,
    }
}

fn identity_columns(identity: &Identity) -> Vec<DynIden> {
    match identity {
        Identity::Unary(a) => vec![a.clone()],
        Identity::Binary(a, b) => vec![a.clone(), b.clone()],
        Identity::Ternary(a, b, c) => vec![a.clone(), b.clone(), c.clone()],
        Identity::Many(cols) => cols.clone(),
    }
}

/// Append the requested order clause when the column is allowed
pub(crate) fn apply_order<E: Searchable>(
    select: Select<E>,
    order_by: &str,
    order_direction: Option<&str>,
    sortable: &[String],
    policy: UnknownSortPolicy,
) -> Result<Select<E>, SearchError> {
    let column = order_by.trim().to_lowercase();
    if column.is_empty() {
        return Ok(select);
    }

    let allow_listed = sortable.iter().any(|s| *s == column);
    let declared = <E::Column as FromStr>::from_str(&column).ok();

    if !allow_listed && declared.is_none() {
        return match policy {
            UnknownSortPolicy::Ignore => {
                debug!(order_by = %column, "ignoring unknown sort column");
                Ok(select)
            }
            UnknownSortPolicy::Reject => Err(SearchError::UnknownSortColumn(column)),
        };
    }

    let direction = order_direction
        .map(|d| {
            d.parse::<SortDirection>().unwrap_or_else(|_| {
                debug!(order_direction = %d, "unknown sort direction, using asc");
                SortDirection::Asc
            })
        })
        .unwrap_or_default();
    let order = match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    let select = match declared {
        Some(col) => select.order_by(col, order),
        None => {
            let expr: SimpleExpr = Expr::col(Alias::new(column.as_str())).into();
            select.order_by(expr, order)
        }
    };

    Ok(select)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("rust"), "rust");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_identity_columns_keeps_every_key() {
        use sea_orm::sea_query::{Iden, IntoIden};

        let keys = ["tenant_id", "region", "shard", "article_id"];
        let identity = Identity::Many(keys.iter().map(|k| Alias::new(*k).into_iden()).collect());

        let names: Vec<String> = identity_columns(&identity)
            .iter()
            .map(|col| col.to_string())
            .collect();
        assert_eq!(names, keys);
    }
}
