//! Backend 公共工具函数

use std::time::Duration;

use reqwest::Client;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 备份后端使用的 User-Agent（GitHub API 要求必须携带）
const BACKEND_USER_AGENT: &str = concat!("DomainMonitor/", env!("CARGO_PKG_VERSION"));

/// 创建带超时配置的 HTTP Client
pub fn create_http_client() -> Client {
    Client::builder()
        .user_agent(BACKEND_USER_AGENT)
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// 将 reqwest 错误映射为后端错误
pub fn map_transport_error(backend: &str, e: &reqwest::Error) -> crate::error::BackendError {
    if e.is_timeout() {
        crate::error::BackendError::Timeout {
            backend: backend.to_string(),
            detail: e.to_string(),
        }
    } else {
        crate::error::BackendError::NetworkError {
            backend: backend.to_string(),
            detail: e.to_string(),
        }
    }
}
