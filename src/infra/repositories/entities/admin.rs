//! Admin database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Admin;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_verified: bool,
    pub password_hash: String,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: bool,
    pub created_date: DateTimeUtc,
    pub last_login_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Admin {
    fn from(model: Model) -> Self {
        Admin {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            email_verified: model.email_verified,
            password_hash: model.password_hash,
            phone_mobile: model.phone_mobile,
            phone_mobile_verified: model.phone_mobile_verified,
            created_date: model.created_date,
            last_login_date: model.last_login_date,
        }
    }
}
