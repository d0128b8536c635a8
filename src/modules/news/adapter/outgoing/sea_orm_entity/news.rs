use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::news::adapter::outgoing::sea_orm_entity::news_categories::Entity"
    )]
    NewsCategories,
}

impl Related<super::news_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
