//! 备份编解码与导入合并服务

use std::sync::Arc;

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{
    BackupEntry, DomainRecord, ExportFileResponse, ExportFormat, ImportResult, SENTINEL_POSITION,
};
use crate::utils::expiry::days_to_expire;

/// 备份编解码与导入合并服务
pub struct BackupService {
    ctx: Arc<ServiceContext>,
}

impl BackupService {
    /// 创建备份服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 将记录集序列化为可移植备份格式（pretty JSON，保留非 ASCII）
    pub fn encode(records: &[DomainRecord]) -> CoreResult<String> {
        let entries: Vec<BackupEntry> = records.iter().map(BackupEntry::from_record).collect();
        serde_json::to_string_pretty(&entries)
            .map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    /// 解析备份负载
    ///
    /// 整体必须是 JSON 数组，否则报错；数组内缺少 `domain` 字段的
    /// 条目被逐条跳过，不影响批次的其余部分。
    pub fn decode(payload: &str) -> CoreResult<Vec<BackupEntry>> {
        let items: Vec<serde_json::Value> = serde_json::from_str(payload)
            .map_err(|e| CoreError::ImportExportError(format!("无法解析备份内容: {e}")))?;

        let entries = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<BackupEntry>(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping malformed backup entry: {e}");
                    None
                }
            })
            .collect();
        Ok(entries)
    }

    /// 追加式合并：只插入本地不存在的域名，绝不改写现有记录
    ///
    /// 新插入的记录落在哨兵位置（排在现有记录之后，直到显式重排）。
    pub async fn merge(&self, entries: Vec<BackupEntry>) -> CoreResult<ImportResult> {
        let today = Utc::now().date_naive();
        let mut imported = 0;

        for entry in entries {
            let mut record = DomainRecord::new(entry.domain, SENTINEL_POSITION);
            record.registration_date = entry.reg;
            record.expiration_date = entry.exp;
            record.remark = entry.remark;
            record.days_to_expire = days_to_expire(&record.expiration_date, today);

            if self.ctx.domain_repository.insert(&record).await? {
                imported += 1;
            }
        }

        log::info!("Import merged {imported} new domain(s)");
        Ok(ImportResult { imported })
    }

    /// 导出当前全部记录为备份负载
    pub async fn export_payload(&self) -> CoreResult<String> {
        let records = self.ctx.domain_repository.find_all().await?;
        Self::encode(&records)
    }

    /// 导出为可下载文件
    pub async fn export_file(&self, format: ExportFormat) -> CoreResult<ExportFileResponse> {
        let records = self.ctx.domain_repository.find_all().await?;
        let content = match format {
            ExportFormat::Json => Self::encode(&records)?,
            ExportFormat::Txt => {
                let mut content = records
                    .iter()
                    .map(|r| r.domain_name.as_str())
                    .collect::<Vec<_>>()
                    .join("\n");
                if !records.is_empty() {
                    content.push('\n');
                }
                content
            }
        };

        Ok(ExportFileResponse {
            suggested_filename: format!(
                "backup_{}.{}",
                Utc::now().format("%Y%m%d"),
                format.extension()
            ),
            content,
        })
    }

    /// 从文件内容导入
    ///
    /// 纯文本格式每行一个域名，仅去除首尾空白，空行跳过。
    pub async fn import_file(
        &self,
        format: ExportFormat,
        content: &str,
    ) -> CoreResult<ImportResult> {
        let entries = match format {
            ExportFormat::Json => Self::decode(content)?,
            ExportFormat::Txt => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| BackupEntry {
                    domain: line.to_string(),
                    reg: String::new(),
                    exp: String::new(),
                    remark: String::new(),
                })
                .collect(),
        };
        self.merge(entries).await
    }
}
