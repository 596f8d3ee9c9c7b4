//! 配置管理服务

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{MonitorConfig, UpdateConfigRequest};

/// 配置管理服务
pub struct ConfigService {
    ctx: Arc<ServiceContext>,
}

impl ConfigService {
    /// 创建配置服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 读取配置（首次读取时惰性创建默认值）
    pub async fn get(&self) -> CoreResult<MonitorConfig> {
        self.ctx.config_repository.load().await
    }

    /// 保存配置；`gist_id` 绑定不受保存影响
    pub async fn save(&self, request: UpdateConfigRequest) -> CoreResult<MonitorConfig> {
        let mut config = self.ctx.config_repository.load().await?;
        request.apply_to(&mut config);
        self.ctx.config_repository.save(&config).await?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;

    #[tokio::test]
    async fn save_applies_fields_and_preserves_binding() {
        let (ctx, _, config_repo) = create_test_context();
        let service = ConfigService::new(ctx);

        config_repo.set_gist_id("bound-id").await;

        let saved = service
            .save(UpdateConfigRequest {
                gist_token: "tok".to_string(),
                webdav_url: "https://dav.example.com/dav/".to_string(),
                webdav_user: "user".to_string(),
                webdav_pass: "pass".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(saved.gist_token, "tok");
        assert_eq!(saved.gist_id, "bound-id");
        assert_eq!(service.get().await.unwrap().webdav_user, "user");
    }

    #[tokio::test]
    async fn get_returns_default_before_first_save() {
        let (ctx, _, _) = create_test_context();
        let service = ConfigService::new(ctx);

        let config = service.get().await.unwrap();
        assert_eq!(config, MonitorConfig::default());
    }
}
