//! 存活探测服务

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{DomainRecord, ProbeOutcome};
use crate::utils::expiry::days_to_expire;

/// 单次探测的超时（秒）
const PROBE_TIMEOUT_SECS: u64 = 5;

/// 探测请求的 User-Agent
const PROBE_USER_AGENT: &str = "Mozilla/5.0 (DomainMonitor/1.0)";

/// 重定向跟随上限
const MAX_REDIRECTS: usize = 5;

/// 存活探测服务
///
/// 点时探测，无后台调度：每次探测都由调用方显式触发，
/// 多条记录的批量检查由调用方逐条发起并自行控制节奏。
pub struct LivenessService {
    ctx: Arc<ServiceContext>,
    client: reqwest::Client,
}

impl LivenessService {
    /// 创建存活探测服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(PROBE_USER_AGENT)
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .expect("Failed to create HTTP client");
        Self { ctx, client }
    }

    /// 探测单个域名
    ///
    /// 收到任何 HTTP 响应（不限于 2xx）即视为在线；所有传输层失败
    /// （超时、DNS、连接拒绝、TLS）折叠为 `(false, "Error", 0)`。
    /// 不做重试。
    pub async fn probe(&self, domain_name: &str) -> ProbeOutcome {
        let url = if domain_name.starts_with("http://") || domain_name.starts_with("https://") {
            domain_name.to_string()
        } else {
            format!("http://{domain_name}")
        };

        let started = Instant::now();
        match self.client.get(&url).send().await {
            Ok(response) => ProbeOutcome {
                is_online: true,
                status_code: response.status().as_u16().to_string(),
                response_time_ms: i64::try_from(started.elapsed().as_millis())
                    .unwrap_or(i64::MAX),
            },
            Err(e) => {
                log::warn!("Probe failed for {domain_name}: {e}");
                ProbeOutcome::failure()
            }
        }
    }

    /// 探测并持久化：状态字段与重算的到期天数作为一次更新写入
    pub async fn refresh(&self, id: &str) -> CoreResult<DomainRecord> {
        let mut record = self.ctx.get_domain(id).await?;
        let outcome = self.probe(&record.domain_name).await;

        record.is_online = outcome.is_online;
        record.status_code = outcome.status_code;
        record.response_time_ms = outcome.response_time_ms;
        record.last_checked = Utc::now();
        record.days_to_expire =
            days_to_expire(&record.expiration_date, Utc::now().date_naive());

        self.ctx.domain_repository.update(&record).await?;
        Ok(record)
    }
}
