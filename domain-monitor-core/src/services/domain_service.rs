//! 域名记录管理服务

use std::sync::Arc;

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{BatchDeleteResult, BulkAddResult, DomainRecord, DomainStats, UpdateDomainRequest};
use crate::utils::expiry::{days_to_expire, days_until};
use crate::utils::normalize::clean_domain_line;

/// 即将到期的天数阈值
const EXPIRING_SOON_DAYS: i64 = 30;

/// 域名记录管理服务
pub struct DomainService {
    ctx: Arc<ServiceContext>,
}

impl DomainService {
    /// 创建域名服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取所有记录（按显示顺序）
    pub async fn list(&self) -> CoreResult<Vec<DomainRecord>> {
        self.ctx.domain_repository.find_all().await
    }

    /// 批量添加：每行一个域名，允许带协议前缀和路径
    ///
    /// 无效行（清洗后不含 `.`）与已存在的域名被静默跳过，
    /// 因此重复提交同一段文本是幂等的。
    pub async fn bulk_add(&self, raw_text: &str) -> CoreResult<BulkAddResult> {
        let mut next_position = self.ctx.domain_repository.max_position().await? + 1;
        let mut added = 0;

        for line in raw_text.lines() {
            let Some(domain_name) = clean_domain_line(line) else {
                continue;
            };
            let record = DomainRecord::new(domain_name, next_position);
            if self.ctx.domain_repository.insert(&record).await? {
                added += 1;
                next_position += 1;
            }
        }

        log::info!("Bulk add accepted {added} domain(s)");
        Ok(BulkAddResult { added })
    }

    /// 编辑记录（部分更新），并重算到期天数
    pub async fn edit(&self, request: UpdateDomainRequest) -> CoreResult<DomainRecord> {
        let mut record = self.ctx.get_domain(&request.id).await?;

        if let Some(domain_name) = request.domain_name {
            if domain_name != record.domain_name {
                if let Some(existing) = self
                    .ctx
                    .domain_repository
                    .find_by_name(&domain_name)
                    .await?
                {
                    if existing.id != record.id {
                        return Err(CoreError::ValidationError(format!(
                            "域名 {domain_name} 已存在"
                        )));
                    }
                }
                record.domain_name = domain_name;
            }
        }
        if let Some(remark) = request.remark {
            record.remark = remark;
        }
        if let Some(registration_date) = request.registration_date {
            record.registration_date = registration_date;
        }
        if let Some(expiration_date) = request.expiration_date {
            record.expiration_date = expiration_date;
        }
        record.days_to_expire = days_to_expire(&record.expiration_date, Utc::now().date_naive());

        self.ctx.domain_repository.update(&record).await?;
        Ok(record)
    }

    /// 删除记录
    pub async fn delete(&self, id: &str) -> CoreResult<()> {
        // 先确认存在，缺失时返回可预期的 DomainNotFound
        self.ctx.get_domain(id).await?;
        self.ctx.domain_repository.delete(id).await
    }

    /// 批量删除：逐条独立处理，失败不影响其余条目
    pub async fn batch_delete(&self, ids: &[String]) -> CoreResult<BatchDeleteResult> {
        let mut success_count = 0;
        let mut failed_count = 0;

        for id in ids {
            match self.delete(id).await {
                Ok(()) => success_count += 1,
                Err(e) => {
                    log::warn!("Failed to delete domain {id}: {e}");
                    failed_count += 1;
                }
            }
        }

        Ok(BatchDeleteResult {
            success_count,
            failed_count,
        })
    }

    /// 重排：按给定 ID 顺序将位置改写为密集下标
    ///
    /// 列表之外的记录保持原位置；未知 ID 被跳过。
    pub async fn reorder(&self, ordered_ids: &[String]) -> CoreResult<()> {
        let positions: Vec<(String, i64)> = ordered_ids
            .iter()
            .enumerate()
            .map(|(index, id)| (id.clone(), index as i64))
            .collect();
        self.ctx.domain_repository.update_positions(&positions).await
    }

    /// 面板统计
    ///
    /// `issue` 只统计检查过且离线的记录；`expiring_soon` 只统计
    /// 有合法到期日期且不足 30 天（含已过期）的记录。
    pub async fn stats(&self) -> CoreResult<DomainStats> {
        let records = self.ctx.domain_repository.find_all().await?;
        let today = Utc::now().date_naive();

        let online = records.iter().filter(|r| r.is_online).count();
        let issue = records
            .iter()
            .filter(|r| r.is_checked() && !r.is_online)
            .count();
        let expiring_soon = records
            .iter()
            .filter(|r| {
                days_until(&r.expiration_date, today)
                    .is_some_and(|days| days < EXPIRING_SOON_DAYS)
            })
            .count();

        Ok(DomainStats {
            total: records.len(),
            online,
            issue,
            expiring_soon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;
    use crate::traits::DomainRepository;

    #[tokio::test]
    async fn bulk_add_cleans_and_deduplicates() {
        let (ctx, _, _) = create_test_context();
        let service = DomainService::new(ctx.clone());

        let result = service
            .bulk_add("https://example.com/path\n example.com \nnotadomain\nb.org")
            .await
            .unwrap();
        assert_eq!(result.added, 2);

        let records = service.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].domain_name, "example.com");
        assert_eq!(records[1].domain_name, "b.org");
    }

    #[tokio::test]
    async fn bulk_add_is_idempotent() {
        let (ctx, _, _) = create_test_context();
        let service = DomainService::new(ctx);

        let first = service.bulk_add("a.com\nb.com").await.unwrap();
        let second = service.bulk_add("a.com\nb.com").await.unwrap();
        assert_eq!(first.added, 2);
        assert_eq!(second.added, 0);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn bulk_add_positions_continue_after_existing() {
        let (ctx, _, _) = create_test_context();
        let service = DomainService::new(ctx);

        service.bulk_add("a.com").await.unwrap();
        service.bulk_add("b.com\nc.com").await.unwrap();

        let records = service.list().await.unwrap();
        let positions: Vec<i64> = records.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn bulk_add_propagates_storage_errors() {
        let (ctx, domain_repo, _) = create_test_context();
        let service = DomainService::new(ctx);

        domain_repo.set_save_error(Some("disk full".to_string())).await;
        let result = service.bulk_add("a.com").await;
        assert!(matches!(result, Err(CoreError::StorageError(_))));
    }

    #[tokio::test]
    async fn edit_recomputes_days_and_rejects_duplicate_name() {
        let (ctx, _, _) = create_test_context();
        let service = DomainService::new(ctx);

        service.bulk_add("a.com\nb.com").await.unwrap();
        let records = service.list().await.unwrap();

        let future = (Utc::now().date_naive() + chrono::Duration::days(10))
            .format("%Y-%m-%d")
            .to_string();
        let edited = service
            .edit(UpdateDomainRequest {
                id: records[0].id.clone(),
                domain_name: None,
                remark: Some("主站".to_string()),
                registration_date: None,
                expiration_date: Some(future),
            })
            .await
            .unwrap();
        assert_eq!(edited.days_to_expire, 10);
        assert_eq!(edited.remark, "主站");

        let result = service
            .edit(UpdateDomainRequest {
                id: records[0].id.clone(),
                domain_name: Some("b.com".to_string()),
                remark: None,
                registration_date: None,
                expiration_date: None,
            })
            .await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }

    #[tokio::test]
    async fn edit_keeping_own_name_is_allowed() {
        let (ctx, _, _) = create_test_context();
        let service = DomainService::new(ctx);

        service.bulk_add("a.com").await.unwrap();
        let records = service.list().await.unwrap();

        let edited = service
            .edit(UpdateDomainRequest {
                id: records[0].id.clone(),
                domain_name: Some("a.com".to_string()),
                remark: None,
                registration_date: None,
                expiration_date: None,
            })
            .await
            .unwrap();
        assert_eq!(edited.domain_name, "a.com");
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let (ctx, _, _) = create_test_context();
        let service = DomainService::new(ctx);

        let result = service.delete("no-such-id").await;
        assert!(matches!(result, Err(CoreError::DomainNotFound(_))));
    }

    #[tokio::test]
    async fn batch_delete_counts_partial_failures() {
        let (ctx, _, _) = create_test_context();
        let service = DomainService::new(ctx);

        service.bulk_add("a.com\nb.com").await.unwrap();
        let records = service.list().await.unwrap();

        let ids = vec![
            records[0].id.clone(),
            "missing".to_string(),
            records[1].id.clone(),
        ];
        let result = service.batch_delete(&ids).await.unwrap();
        assert_eq!(result.success_count, 2);
        assert_eq!(result.failed_count, 1);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reorder_assigns_dense_indices() {
        let (ctx, _, _) = create_test_context();
        let service = DomainService::new(ctx);

        service.bulk_add("a.com\nb.com\nc.com").await.unwrap();
        let records = service.list().await.unwrap();

        // [c, a, b]
        let order = vec![
            records[2].id.clone(),
            records[0].id.clone(),
            records[1].id.clone(),
        ];
        service.reorder(&order).await.unwrap();

        let reordered = service.list().await.unwrap();
        let names: Vec<&str> = reordered.iter().map(|r| r.domain_name.as_str()).collect();
        assert_eq!(names, vec!["c.com", "a.com", "b.com"]);
        let positions: Vec<i64> = reordered.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn reorder_skips_unknown_ids() {
        let (ctx, _, _) = create_test_context();
        let service = DomainService::new(ctx);

        service.bulk_add("a.com\nb.com").await.unwrap();
        let records = service.list().await.unwrap();

        let order = vec![
            records[1].id.clone(),
            "ghost".to_string(),
            records[0].id.clone(),
        ];
        service.reorder(&order).await.unwrap();

        let reordered = service.list().await.unwrap();
        assert_eq!(reordered[0].domain_name, "b.com");
        assert_eq!(reordered[0].position, 0);
        assert_eq!(reordered[1].domain_name, "a.com");
        assert_eq!(reordered[1].position, 2);
    }

    #[tokio::test]
    async fn stats_classify_online_issue_and_expiring() {
        let (ctx, domain_repo, _) = create_test_context();
        let service = DomainService::new(ctx.clone());

        service.bulk_add("a.com\nb.com\nc.com\nd.com").await.unwrap();
        let records = service.list().await.unwrap();
        let today = Utc::now().date_naive();

        // a: 在线; b: 检查过且离线; c: 未检查; d: 即将到期
        let mut a = records[0].clone();
        a.is_online = true;
        a.status_code = "200".to_string();
        domain_repo.update(&a).await.unwrap();

        let mut b = records[1].clone();
        b.is_online = false;
        b.status_code = "Error".to_string();
        domain_repo.update(&b).await.unwrap();

        let mut d = records[3].clone();
        d.expiration_date = (today + chrono::Duration::days(5))
            .format("%Y-%m-%d")
            .to_string();
        domain_repo.update(&d).await.unwrap();

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.online, 1);
        assert_eq!(stats.issue, 1);
        assert_eq!(stats.expiring_soon, 1);
    }
}
