use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 远端推送的终态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum PushOutcome {
    /// 新建了远端备份
    ///
    /// 片段存储后端携带新分配的标识符，调用方负责持久化绑定；
    /// 固定路径后端（WebDAV 首次 PUT 返回 201）没有标识符。
    Created { gist_id: Option<String> },
    /// 已有的远端备份更新成功
    Updated,
}

/// 远端备份后端 Trait
///
/// 两个实现：
/// - `GistBackend`: Gist 式代码片段存储（按不透明标识符寻址）
/// - `WebdavBackend`: WebDAV 固定路径 PUT/GET
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    /// 后端标识符
    fn id(&self) -> &'static str;

    /// 推送备份负载到远端
    ///
    /// # Returns
    /// * `PushOutcome::Created` - 新建成功（片段存储首次推送或绑定失效后重建）
    /// * `PushOutcome::Updated` - 更新成功
    async fn push(&self, payload: &str) -> Result<PushOutcome>;

    /// 从远端拉取备份负载
    ///
    /// 返回原始负载文本，解码与合并由调用方完成。
    async fn pull(&self) -> Result<String>;
}
