//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Employee;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub password_hash: Option<String>,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: Option<bool>,
    pub privilege_level: i32,
    pub created_date: DateTimeUtc,
    pub last_login_date: DateTimeUtc,
    pub business_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business::Entity",
        from = "Column::BusinessId",
        to = "super::business::Column::Id",
        on_delete = "Cascade"
    )]
    Business,
}

impl Related<super::business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.id,
            name: model.name,
            email: model.email,
            email_verified: model.email_verified,
            password_hash: model.password_hash,
            phone_mobile: model.phone_mobile,
            phone_mobile_verified: model.phone_mobile_verified,
            privilege_level: model.privilege_level,
            created_date: model.created_date,
            last_login_date: model.last_login_date,
            business_id: model.business_id,
        }
    }
}
