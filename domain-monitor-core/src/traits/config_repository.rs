//! 单例配置持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::MonitorConfig;

/// 单例配置仓库 Trait
///
/// 配置是单行表：首次读取时不存在则创建默认行（惰性初始化），
/// 之后只会被保存操作改写，永不删除。读写串行经过此单例。
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// 读取配置；不存在时持久化并返回默认值
    async fn load(&self) -> CoreResult<MonitorConfig>;

    /// 保存配置
    async fn save(&self, config: &MonitorConfig) -> CoreResult<()>;
}
