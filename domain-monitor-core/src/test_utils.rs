//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain_monitor_remote::{BackendError, PushOutcome, RemoteBackend};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{ConfigRepository, DomainRepository};
use crate::types::{DomainRecord, MonitorConfig};

// ===== MockDomainRepository =====

pub struct MockDomainRepository {
    records: RwLock<HashMap<String, DomainRecord>>,
    /// 如果 Some，写操作返回此错误（用于测试失败路径）
    save_error: RwLock<Option<String>>,
}

impl MockDomainRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            save_error: RwLock::new(None),
        }
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }

    async fn check_save_error(&self) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl DomainRepository for MockDomainRepository {
    async fn find_all(&self) -> CoreResult<Vec<DomainRecord>> {
        let mut records: Vec<DomainRecord> =
            self.records.read().await.values().cloned().collect();
        records.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(records)
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<DomainRecord>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find_by_name(&self, domain_name: &str) -> CoreResult<Option<DomainRecord>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .find(|r| r.domain_name == domain_name)
            .cloned())
    }

    async fn insert(&self, record: &DomainRecord) -> CoreResult<bool> {
        self.check_save_error().await?;
        let mut store = self.records.write().await;
        if store.values().any(|r| r.domain_name == record.domain_name) {
            return Ok(false);
        }
        store.insert(record.id.clone(), record.clone());
        Ok(true)
    }

    async fn update(&self, record: &DomainRecord) -> CoreResult<()> {
        self.check_save_error().await?;
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        self.check_save_error().await?;
        self.records.write().await.remove(id);
        Ok(())
    }

    async fn max_position(&self) -> CoreResult<i64> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .map(|r| r.position)
            .max()
            .unwrap_or(0))
    }

    async fn update_positions(&self, positions: &[(String, i64)]) -> CoreResult<()> {
        self.check_save_error().await?;
        let mut store = self.records.write().await;
        for (id, position) in positions {
            if let Some(record) = store.get_mut(id) {
                record.position = *position;
            }
        }
        Ok(())
    }
}

// ===== MockConfigRepository =====

pub struct MockConfigRepository {
    config: RwLock<Option<MonitorConfig>>,
}

impl MockConfigRepository {
    pub fn new() -> Self {
        Self {
            config: RwLock::new(None),
        }
    }

    /// 当前持久化的配置（未初始化时为默认值）
    pub async fn stored(&self) -> MonitorConfig {
        self.config.read().await.clone().unwrap_or_default()
    }

    pub async fn set_gist_id(&self, gist_id: &str) {
        let mut guard = self.config.write().await;
        let mut config = guard.clone().unwrap_or_default();
        config.gist_id = gist_id.to_string();
        *guard = Some(config);
    }
}

#[async_trait]
impl ConfigRepository for MockConfigRepository {
    async fn load(&self) -> CoreResult<MonitorConfig> {
        let mut guard = self.config.write().await;
        if let Some(ref config) = *guard {
            return Ok(config.clone());
        }
        let config = MonitorConfig::default();
        *guard = Some(config.clone());
        Ok(config)
    }

    async fn save(&self, config: &MonitorConfig) -> CoreResult<()> {
        *self.config.write().await = Some(config.clone());
        Ok(())
    }
}

// ===== MockRemoteBackend =====

enum MockPushBehavior {
    Created(Option<String>),
    Updated,
    Fail,
}

pub struct MockRemoteBackend {
    push_behavior: MockPushBehavior,
    pull_payload: Option<String>,
    pushed: RwLock<Vec<String>>,
}

impl MockRemoteBackend {
    /// push 返回 Created 并携带指定标识符
    pub fn created(gist_id: &str) -> Self {
        Self {
            push_behavior: MockPushBehavior::Created(Some(gist_id.to_string())),
            pull_payload: None,
            pushed: RwLock::new(Vec::new()),
        }
    }

    /// push 返回不携带标识符的 Created（固定路径后端首次写入）
    pub fn created_unbound() -> Self {
        Self {
            push_behavior: MockPushBehavior::Created(None),
            pull_payload: None,
            pushed: RwLock::new(Vec::new()),
        }
    }

    /// push 返回 Updated
    pub fn updated() -> Self {
        Self {
            push_behavior: MockPushBehavior::Updated,
            pull_payload: None,
            pushed: RwLock::new(Vec::new()),
        }
    }

    /// pull 返回指定负载
    pub fn with_payload(payload: &str) -> Self {
        Self {
            push_behavior: MockPushBehavior::Updated,
            pull_payload: Some(payload.to_string()),
            pushed: RwLock::new(Vec::new()),
        }
    }

    /// push 与 pull 都返回网络错误
    pub fn failing() -> Self {
        Self {
            push_behavior: MockPushBehavior::Fail,
            pull_payload: None,
            pushed: RwLock::new(Vec::new()),
        }
    }

    /// 已推送的负载（按调用顺序）
    pub async fn pushed_payloads(&self) -> Vec<String> {
        self.pushed.read().await.clone()
    }

    fn network_error() -> BackendError {
        BackendError::NetworkError {
            backend: "mock".to_string(),
            detail: "connection refused".to_string(),
        }
    }
}

#[async_trait]
impl RemoteBackend for MockRemoteBackend {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn push(&self, payload: &str) -> Result<PushOutcome, BackendError> {
        self.pushed.write().await.push(payload.to_string());
        match &self.push_behavior {
            MockPushBehavior::Created(gist_id) => Ok(PushOutcome::Created {
                gist_id: gist_id.clone(),
            }),
            MockPushBehavior::Updated => Ok(PushOutcome::Updated),
            MockPushBehavior::Fail => Err(Self::network_error()),
        }
    }

    async fn pull(&self) -> Result<String, BackendError> {
        match self.pull_payload {
            Some(ref payload) => Ok(payload.clone()),
            None => Err(Self::network_error()),
        }
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockDomainRepository>,
    Arc<MockConfigRepository>,
) {
    let domain_repo = Arc::new(MockDomainRepository::new());
    let config_repo = Arc::new(MockConfigRepository::new());

    let ctx = Arc::new(ServiceContext::new(
        domain_repo.clone(),
        config_repo.clone(),
    ));

    (ctx, domain_repo, config_repo)
}
