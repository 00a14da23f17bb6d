use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::search::ports::Searchable;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::articles::Entity")]
    Articles,
}

impl Related<super::articles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Articles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Searchable for Entity {
    fn searchable_fields() -> &'static [&'static str] {
        &["name", "email"]
    }

    fn search_relation(name: &str) -> Option<RelationDef> {
        match name {
            "articles" => Some(Relation::Articles.def()),
            _ => None,
        }
    }
}
