//! 业务逻辑服务层

mod backup_service;
mod config_service;
mod domain_service;
mod liveness_service;
mod sync_service;

pub use backup_service::BackupService;
pub use config_service::ConfigService;
pub use domain_service::DomainService;
pub use liveness_service::LivenessService;
pub use sync_service::SyncService;

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ConfigRepository, DomainRepository};
use crate::types::DomainRecord;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    /// 域名记录仓库
    pub domain_repository: Arc<dyn DomainRepository>,
    /// 单例配置仓库
    pub config_repository: Arc<dyn ConfigRepository>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        domain_repository: Arc<dyn DomainRepository>,
        config_repository: Arc<dyn ConfigRepository>,
    ) -> Self {
        Self {
            domain_repository,
            config_repository,
        }
    }

    /// 按 ID 获取记录，不存在时返回 `DomainNotFound`
    pub async fn get_domain(&self, id: &str) -> CoreResult<DomainRecord> {
        self.domain_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::DomainNotFound(id.to_string()))
    }
}
