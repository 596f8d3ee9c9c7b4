//! 域名记录类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 新导入记录的哨兵排序位置（排在所有现有记录之后，直到显式重排）
pub const SENTINEL_POSITION: i64 = 9999;

/// 首次检查前的状态码占位值
pub const STATUS_UNCHECKED: &str = "N/A";

/// 探测失败（超时、DNS 失败、连接拒绝、TLS 失败）统一归类的状态码
pub const STATUS_ERROR: &str = "Error";

fn default_status_code() -> String {
    STATUS_UNCHECKED.to_string()
}

/// 域名记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// 记录 ID (UUID)，服务端分配，稳定不变
    pub id: String,

    /// 域名（唯一键，大小写敏感，只含主机部分）
    pub domain_name: String,

    /// 注册日期，`YYYY-MM-DD` 或空
    #[serde(default)]
    pub registration_date: String,

    /// 到期日期，`YYYY-MM-DD` 或空
    #[serde(default)]
    pub expiration_date: String,

    /// 距到期天数（派生值，每次检查/编辑时重算；0 表示未知）
    #[serde(default)]
    pub days_to_expire: i64,

    /// 备注
    #[serde(default)]
    pub remark: String,

    /// 是否在线（仅由存活探测写入）
    #[serde(default)]
    pub is_online: bool,

    /// HTTP 状态码字符串；首次检查前为 "N/A"，传输失败为 "Error"
    #[serde(default = "default_status_code")]
    pub status_code: String,

    /// 响应耗时（毫秒），首次成功检查前为 0
    #[serde(default)]
    pub response_time_ms: i64,

    /// 最近一次检查时间
    pub last_checked: DateTime<Utc>,

    /// 显示排序位置（重排后为密集下标，其余时刻允许空洞）
    pub position: i64,
}

impl DomainRecord {
    /// 创建新记录（批量添加 / 导入路径）
    #[must_use]
    pub fn new(domain_name: String, position: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            domain_name,
            registration_date: String::new(),
            expiration_date: String::new(),
            days_to_expire: 0,
            remark: String::new(),
            is_online: false,
            status_code: default_status_code(),
            response_time_ms: 0,
            last_checked: Utc::now(),
            position,
        }
    }

    /// 是否已经检查过（状态码不再是占位值）
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.status_code != STATUS_UNCHECKED
    }
}

/// 编辑域名记录请求（支持部分更新）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDomainRequest {
    /// 记录 ID
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

/// 批量添加结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkAddResult {
    /// 实际插入条数（重复与无效行被静默跳过）
    pub added: usize,
}

/// 批量删除结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteResult {
    pub success_count: usize,
    pub failed_count: usize,
}

/// 面板统计
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainStats {
    pub total: usize,
    /// 在线记录数
    pub online: usize,
    /// 检查过且离线的记录数
    pub issue: usize,
    /// 30 天内到期的记录数
    pub expiring_soon: usize,
}

/// 单次存活探测的结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProbeOutcome {
    /// 是否收到任何 HTTP 响应（不限于 2xx）
    pub is_online: bool,
    /// 数字状态码字符串，或传输失败时的 "Error"
    pub status_code: String,
    /// 响应耗时（毫秒），失败时为 0
    pub response_time_ms: i64,
}

impl ProbeOutcome {
    /// 传输层失败的统一结果：所有失败模式折叠为一类
    #[must_use]
    pub fn failure() -> Self {
        Self {
            is_online: false,
            status_code: STATUS_ERROR.to_string(),
            response_time_ms: 0,
        }
    }
}
