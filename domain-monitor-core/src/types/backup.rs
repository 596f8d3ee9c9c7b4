//! 备份交换格式与同步相关类型定义

use serde::{Deserialize, Serialize};

use domain_monitor_remote::BackendType;

use super::domain::DomainRecord;

/// 备份条目：可移植交换格式中的一条记录
///
/// 字段顺序固定为 `domain` / `reg` / `exp` / `remark`。
/// 状态字段（在线、状态码等）是派生数据，刻意不进入备份格式。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupEntry {
    /// 域名（必填；缺失此字段的条目在解码时被跳过）
    pub domain: String,
    /// 注册日期
    #[serde(default)]
    pub reg: String,
    /// 到期日期
    #[serde(default)]
    pub exp: String,
    /// 备注
    #[serde(default)]
    pub remark: String,
}

impl BackupEntry {
    /// 从完整记录中提取备份条目
    #[must_use]
    pub fn from_record(record: &DomainRecord) -> Self {
        Self {
            domain: record.domain_name.clone(),
            reg: record.registration_date.clone(),
            exp: record.expiration_date.clone(),
            remark: record.remark.clone(),
        }
    }
}

/// 文件导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// 结构化备份格式（完整字段）
    Json,
    /// 纯文本，一行一个域名（不含状态）
    Txt,
}

impl ExportFormat {
    /// 导出文件的扩展名
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Txt => "txt",
        }
    }
}

/// 文件导出响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFileResponse {
    /// 文件内容
    pub content: String,
    /// 建议的文件名（带日期）
    pub suggested_filename: String,
}

/// 导入合并结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// 实际插入条数（与现有记录同名的条目被跳过，本地数据优先）
    pub imported: usize,
}

/// 远端同步动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    /// 导出到远端
    Push,
    /// 从远端恢复
    Pull,
}

/// 远端同步结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
    pub backend: BackendType,
    pub action: SyncAction,
    /// 面向用户的结果描述
    pub message: String,
    /// 拉取动作实际导入的条数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported: Option<usize>,
}
