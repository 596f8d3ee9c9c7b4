//! 域名记录持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::DomainRecord;

/// 域名记录仓库 Trait
///
/// 平台实现:
/// - SQLite: `SqliteStore` (`SeaORM`)
///
/// `domain_name` 的唯一性在写入点集中保证：所有入口（批量添加、文件导入、
/// 远端导入合并）都经过 [`insert`](Self::insert) 的去重路径。
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// 获取所有记录，按 `(position, id)` 升序排列
    async fn find_all(&self) -> CoreResult<Vec<DomainRecord>>;

    /// 按 ID 查找
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<DomainRecord>>;

    /// 按域名精确查找（大小写敏感，不做任何归一化）
    async fn find_by_name(&self, domain_name: &str) -> CoreResult<Option<DomainRecord>>;

    /// 插入新记录
    ///
    /// # Returns
    /// * `true` - 插入成功
    /// * `false` - 同名记录已存在，静默跳过（批量操作幂等的基础）
    async fn insert(&self, record: &DomainRecord) -> CoreResult<bool>;

    /// 整体更新一条记录（按 ID）
    ///
    /// 单条记录的更新必须是原子的；同一记录的并发更新为后写覆盖。
    async fn update(&self, record: &DomainRecord) -> CoreResult<()>;

    /// 删除记录；目标不存在时为无操作
    async fn delete(&self, id: &str) -> CoreResult<()>;

    /// 当前最大排序位置；无记录时为 0
    async fn max_position(&self) -> CoreResult<i64>;

    /// 批量改写记录的排序位置（`id -> position`）
    ///
    /// 不在列表中的记录保持原位置；未知 ID 被跳过。
    async fn update_positions(&self, positions: &[(String, i64)]) -> CoreResult<()>;
}
