//! 类型定义模块

mod backup;
mod config;
mod domain;
mod response;

pub use backup::{
    BackupEntry, ExportFileResponse, ExportFormat, ImportResult, SyncAction, SyncOutcome,
};
pub use config::{MonitorConfig, UpdateConfigRequest};
pub use domain::{
    BatchDeleteResult, BulkAddResult, DomainRecord, DomainStats, ProbeOutcome,
    UpdateDomainRequest, SENTINEL_POSITION, STATUS_ERROR, STATUS_UNCHECKED,
};
pub use response::ApiResponse;

// Re-export remote 库的公共类型
pub use domain_monitor_remote::{BackendCredentials, BackendType, PushOutcome};
