//! `DomainRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, SqlErr};

use domain_monitor_core::error::{CoreError, CoreResult};
use domain_monitor_core::traits::DomainRepository;
use domain_monitor_core::types::DomainRecord;

use super::entity::domain;
use super::SqliteStore;

impl domain::Model {
    /// Convert a `SeaORM` row model into a `DomainRecord`.
    fn into_record(self) -> CoreResult<DomainRecord> {
        let last_checked = chrono::DateTime::parse_from_rfc3339(&self.last_checked)
            .map_err(|e| CoreError::SerializationError(format!("Invalid last_checked: {e}")))?
            .with_timezone(&chrono::Utc);

        Ok(DomainRecord {
            id: self.id,
            domain_name: self.domain_name,
            registration_date: self.registration_date,
            expiration_date: self.expiration_date,
            days_to_expire: self.days_to_expire,
            remark: self.remark,
            is_online: self.is_online != 0,
            status_code: self.status_code,
            response_time_ms: self.response_time_ms,
            last_checked,
            position: self.position,
        })
    }
}

/// Convert a `DomainRecord` into a `SeaORM` active model for insert/upsert.
fn record_to_active_model(record: &DomainRecord) -> domain::ActiveModel {
    use sea_orm::ActiveValue::Set;

    domain::ActiveModel {
        id: Set(record.id.clone()),
        domain_name: Set(record.domain_name.clone()),
        registration_date: Set(record.registration_date.clone()),
        expiration_date: Set(record.expiration_date.clone()),
        days_to_expire: Set(record.days_to_expire),
        remark: Set(record.remark.clone()),
        is_online: Set(i32::from(record.is_online)),
        status_code: Set(record.status_code.clone()),
        response_time_ms: Set(record.response_time_ms),
        last_checked: Set(record.last_checked.to_rfc3339()),
        position: Set(record.position),
    }
}

#[async_trait]
impl DomainRepository for SqliteStore {
    async fn find_all(&self) -> CoreResult<Vec<DomainRecord>> {
        let rows = domain::Entity::find()
            .order_by_asc(domain::Column::Position)
            .order_by_asc(domain::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query domains: {e}")))?;

        rows.into_iter().map(domain::Model::into_record).collect()
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<DomainRecord>> {
        let row = domain::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query domain: {e}")))?;

        row.map(domain::Model::into_record).transpose()
    }

    async fn find_by_name(&self, domain_name: &str) -> CoreResult<Option<DomainRecord>> {
        let row = domain::Entity::find()
            .filter(domain::Column::DomainName.eq(domain_name))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query domain: {e}")))?;

        row.map(domain::Model::into_record).transpose()
    }

    async fn insert(&self, record: &DomainRecord) -> CoreResult<bool> {
        // 依赖 domain_name 的唯一约束做去重，避免先查后插的竞态
        match domain::Entity::insert(record_to_active_model(record))
            .exec(&self.db)
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(e) => Err(CoreError::StorageError(format!(
                "Failed to insert domain: {e}"
            ))),
        }
    }

    async fn update(&self, record: &DomainRecord) -> CoreResult<()> {
        domain::Entity::insert(record_to_active_model(record))
            .on_conflict(
                OnConflict::column(domain::Column::Id)
                    .update_columns([
                        domain::Column::DomainName,
                        domain::Column::RegistrationDate,
                        domain::Column::ExpirationDate,
                        domain::Column::DaysToExpire,
                        domain::Column::Remark,
                        domain::Column::IsOnline,
                        domain::Column::StatusCode,
                        domain::Column::ResponseTimeMs,
                        domain::Column::LastChecked,
                        domain::Column::Position,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to update domain: {e}")))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        domain::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete domain: {e}")))?;

        Ok(())
    }

    async fn max_position(&self) -> CoreResult<i64> {
        let row = domain::Entity::find()
            .order_by_desc(domain::Column::Position)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query positions: {e}")))?;

        Ok(row.map_or(0, |m| m.position))
    }

    async fn update_positions(&self, positions: &[(String, i64)]) -> CoreResult<()> {
        for (id, position) in positions {
            domain::Entity::update_many()
                .col_expr(domain::Column::Position, Expr::value(*position))
                .filter(domain::Column::Id.eq(id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    CoreError::StorageError(format!("Failed to update positions: {e}"))
                })?;
        }

        Ok(())
    }
}
