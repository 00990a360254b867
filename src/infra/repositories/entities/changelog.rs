//! Changelog database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Changelog;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "changelogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub change_type: String,
    pub was_read: bool,
    pub created_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Changelog {
    fn from(model: Model) -> Self {
        Changelog {
            id: model.id,
            content: model.content,
            change_type: model.change_type,
            was_read: model.was_read,
            created_date: model.created_date,
        }
    }
}
