use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::search::ports::Searchable;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub article_id: i32,
    #[sea_orm(column_type = "Text")]
    pub body: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::articles::Entity",
        from = "Column::ArticleId",
        to = "super::articles::Column::Id"
    )]
    Article,
}

impl Related<super::articles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Comments declare no default search fields.
impl Searchable for Entity {
    fn search_relation(name: &str) -> Option<RelationDef> {
        match name {
            "article" => Some(Relation::Article.def()),
            _ => None,
        }
    }
}
