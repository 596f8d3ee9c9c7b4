//! `ConfigRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::Set;
use sea_orm::EntityTrait;

use domain_monitor_core::error::{CoreError, CoreResult};
use domain_monitor_core::traits::ConfigRepository;
use domain_monitor_core::types::MonitorConfig;

use super::entity::config;
use super::SqliteStore;

/// 单行配置表的固定主键
const CONFIG_ROW_ID: i32 = 1;

impl config::Model {
    fn into_config(self) -> MonitorConfig {
        MonitorConfig {
            gist_token: self.gist_token,
            gist_id: self.gist_id,
            webdav_url: self.webdav_url,
            webdav_user: self.webdav_user,
            webdav_pass: self.webdav_pass,
        }
    }
}

fn config_to_active_model(config: &MonitorConfig) -> config::ActiveModel {
    config::ActiveModel {
        id: Set(CONFIG_ROW_ID),
        gist_token: Set(config.gist_token.clone()),
        gist_id: Set(config.gist_id.clone()),
        webdav_url: Set(config.webdav_url.clone()),
        webdav_user: Set(config.webdav_user.clone()),
        webdav_pass: Set(config.webdav_pass.clone()),
    }
}

#[async_trait]
impl ConfigRepository for SqliteStore {
    async fn load(&self) -> CoreResult<MonitorConfig> {
        let row = config::Entity::find_by_id(CONFIG_ROW_ID)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query config: {e}")))?;

        match row {
            Some(model) => Ok(model.into_config()),
            None => {
                // 惰性初始化默认行
                let default = MonitorConfig::default();
                config::Entity::insert(config_to_active_model(&default))
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        CoreError::StorageError(format!("Failed to initialize config: {e}"))
                    })?;
                Ok(default)
            }
        }
    }

    async fn save(&self, config: &MonitorConfig) -> CoreResult<()> {
        config::Entity::insert(config_to_active_model(config))
            .on_conflict(
                OnConflict::column(config::Column::Id)
                    .update_columns([
                        config::Column::GistToken,
                        config::Column::GistId,
                        config::Column::WebdavUrl,
                        config::Column::WebdavUser,
                        config::Column::WebdavPass,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to save config: {e}")))?;

        Ok(())
    }
}
