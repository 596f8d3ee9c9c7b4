//! API 响应相关类型定义

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// API 响应包装类型
///
/// 变更类操作的错误在操作边界被吸收为结构化结果（成功标志 + 消息），
/// 不允许向上层崩溃传播。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 是否成功
    pub success: bool,
    /// 响应数据
    pub data: Option<T>,
    /// 失败时的描述信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// 创建失败响应
    #[must_use]
    pub fn failure(error: &CoreError) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(error.to_string()),
        }
    }
}

impl<T> From<CoreResult<T>> for ApiResponse<T> {
    fn from(result: CoreResult<T>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("{e}");
                } else {
                    log::error!("{e}");
                }
                Self::failure(&e)
            }
        }
    }
}
