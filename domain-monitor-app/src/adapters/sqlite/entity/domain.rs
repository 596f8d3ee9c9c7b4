use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "domains")]
/// Database row model for a domain record.
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub domain_name: String,
    pub registration_date: String,
    pub expiration_date: String,
    pub days_to_expire: i64,
    pub remark: String,
    pub is_online: i32,
    pub status_code: String,
    pub response_time_ms: i64,
    pub last_checked: String,
    pub position: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
