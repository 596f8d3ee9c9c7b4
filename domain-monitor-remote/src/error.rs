use serde::{Deserialize, Serialize};

/// Unified error type for all remote backend operations.
///
/// Each variant includes a `backend` field identifying which backend produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "code")]
pub enum BackendError {
    /// A required credential or URL is absent. Raised before any network call.
    #[error("[{backend}] 配置缺失: {detail}")]
    NotConfigured {
        /// Backend that produced the error.
        backend: String,
        /// What is missing and how to fix it.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    #[error("[{backend}] 网络错误: {detail}")]
    NetworkError {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[{backend}] 请求超时: {detail}")]
    Timeout {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The remote replied with a non-success status.
    #[error("[{backend}] 远端返回 HTTP {status}")]
    RemoteStatus {
        /// Backend that produced the error.
        backend: String,
        /// HTTP status code reported by the remote.
        status: u16,
        /// Original response body, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the backend's API response.
    #[error("[{backend}] 响应解析失败: {detail}")]
    ParseError {
        /// Backend that produced the error.
        backend: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The remote snippet exists but does not contain the well-known
    /// backup payload file.
    #[error("[{backend}] 远端数据缺少备份文件: {detail}")]
    PayloadMissing {
        /// Backend that produced the error.
        backend: String,
        /// Name of the missing file.
        detail: String,
    },
}

impl BackendError {
    /// Whether this is expected behavior (user configuration, stale remote
    /// state) rather than a defect; used for log-level classification.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotConfigured { .. } | Self::PayloadMissing { .. }
        )
    }
}

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;
