//! Certificate database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Certificate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub serial_number: String,
    pub course_title: Option<String>,
    pub course_date: Option<DateTimeUtc>,
    pub pdf_uri: String,
    pub qr_code_uri: String,
    pub expires: bool,
    pub expiry_date: Option<DateTimeUtc>,
    pub created_date: DateTimeUtc,
    pub business_id: Uuid,
    pub end_user_id: Uuid,
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
    #[sea_orm(
        belongs_to = "super::end_user::Entity",
        from = "Column::EndUserId",
        to = "super::end_user::Column::Id",
        on_delete = "Cascade"
    )]
    EndUser,
}

impl Related<super::business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl Related<super::end_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EndUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Certificate {
    fn from(model: Model) -> Self {
        Certificate {
            id: model.id,
            title: model.title,
            serial_number: model.serial_number,
            course_title: model.course_title,
            course_date: model.course_date,
            pdf_uri: model.pdf_uri,
            qr_code_uri: model.qr_code_uri,
            expires: model.expires,
            expiry_date: model.expiry_date,
            created_date: model.created_date,
            business_id: model.business_id,
            end_user_id: model.end_user_id,
        }
    }
}
