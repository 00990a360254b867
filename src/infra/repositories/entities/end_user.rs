//! End user database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::EndUser;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "end_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub password_hash: String,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: Option<bool>,
    pub phone_home: Option<String>,
    pub address_code: Option<String>,
    pub address_detailed: Option<String>,
    pub created_date: DateTimeUtc,
    pub last_login_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::certificate::Entity")]
    Certificate,
}

impl Related<super::certificate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for EndUser {
    fn from(model: Model) -> Self {
        EndUser {
            id: model.id,
            name: model.name,
            email: model.email,
            email_verified: model.email_verified,
            password_hash: model.password_hash,
            phone_mobile: model.phone_mobile,
            phone_mobile_verified: model.phone_mobile_verified,
            phone_home: model.phone_home,
            address_code: model.address_code,
            address_detailed: model.address_detailed,
            created_date: model.created_date,
            last_login_date: model.last_login_date,
        }
    }
}
