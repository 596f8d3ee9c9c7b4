//! 远端同步调度服务

use std::sync::Arc;

use domain_monitor_remote::{create_backend, BackendType, PushOutcome, RemoteBackend};

use crate::error::CoreResult;
use crate::services::{BackupService, ServiceContext};
use crate::types::{SyncAction, SyncOutcome};

/// 远端同步调度服务
///
/// 从配置构造后端实例，串联备份编解码与导入合并。
/// 片段存储首次导出分配的标识符在此处写回配置，供后续推送复用。
pub struct SyncService {
    ctx: Arc<ServiceContext>,
}

impl SyncService {
    /// 创建同步服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 执行一次远端同步动作
    pub async fn remote_action(
        &self,
        backend_type: BackendType,
        action: SyncAction,
    ) -> CoreResult<SyncOutcome> {
        let config = self.ctx.config_repository.load().await?;
        let backend = create_backend(config.backend_credentials(backend_type))?;

        match action {
            SyncAction::Push => self.push_with(backend_type, backend.as_ref()).await,
            SyncAction::Pull => self.pull_with(backend_type, backend.as_ref()).await,
        }
    }

    /// 推送当前记录集到指定后端
    pub async fn push_with(
        &self,
        backend_type: BackendType,
        backend: &dyn RemoteBackend,
    ) -> CoreResult<SyncOutcome> {
        let payload = BackupService::new(Arc::clone(&self.ctx))
            .export_payload()
            .await?;

        let message = match backend.push(&payload).await? {
            PushOutcome::Created {
                gist_id: Some(gist_id),
            } => {
                // 绑定新分配的标识符，之后的推送走更新路径
                let mut config = self.ctx.config_repository.load().await?;
                config.gist_id = gist_id;
                self.ctx.config_repository.save(&config).await?;
                "已创建远端备份并绑定".to_string()
            }
            // 固定路径后端首次写入，无标识符需要绑定
            PushOutcome::Created { gist_id: None } => "已创建远端备份".to_string(),
            PushOutcome::Updated => "远端备份已更新".to_string(),
        };

        log::info!("Pushed backup to {}", backend.id());
        Ok(SyncOutcome {
            backend: backend_type,
            action: SyncAction::Push,
            message,
            imported: None,
        })
    }

    /// 从指定后端拉取并做追加式合并
    pub async fn pull_with(
        &self,
        backend_type: BackendType,
        backend: &dyn RemoteBackend,
    ) -> CoreResult<SyncOutcome> {
        let payload = backend.pull().await?;
        let entries = BackupService::decode(&payload)?;
        let result = BackupService::new(Arc::clone(&self.ctx))
            .merge(entries)
            .await?;

        log::info!(
            "Pulled backup from {}, imported {} new record(s)",
            backend.id(),
            result.imported
        );
        Ok(SyncOutcome {
            backend: backend_type,
            action: SyncAction::Pull,
            message: format!("导入完成，新增 {} 条记录", result.imported),
            imported: Some(result.imported),
        })
    }
}
