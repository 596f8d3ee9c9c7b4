//! 单例配置类型定义

use serde::{Deserialize, Serialize};

use domain_monitor_remote::{BackendCredentials, BackendType};

/// 用户配置（单行表，首次读取时惰性创建默认值）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonitorConfig {
    /// 片段存储访问令牌
    #[serde(default)]
    pub gist_token: String,

    /// 已绑定的片段标识符（首次成功导出后自动记录）
    #[serde(default)]
    pub gist_id: String,

    /// WebDAV 基础地址
    #[serde(default)]
    pub webdav_url: String,

    /// WebDAV 账号
    #[serde(default)]
    pub webdav_user: String,

    /// WebDAV 密码（或应用密码）
    #[serde(default)]
    pub webdav_pass: String,
}

impl MonitorConfig {
    /// 构造指定后端的凭证（缺失项由后端工厂校验）
    #[must_use]
    pub fn backend_credentials(&self, backend: BackendType) -> BackendCredentials {
        match backend {
            BackendType::Gist => BackendCredentials::Gist {
                token: self.gist_token.clone(),
                gist_id: if self.gist_id.is_empty() {
                    None
                } else {
                    Some(self.gist_id.clone())
                },
            },
            BackendType::Webdav => BackendCredentials::Webdav {
                base_url: self.webdav_url.clone(),
                username: self.webdav_user.clone(),
                password: self.webdav_pass.clone(),
            },
        }
    }
}

/// 保存配置请求
///
/// `gist_id` 不在此处：它由首次成功导出自动绑定，保存配置不会改写它。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigRequest {
    #[serde(default)]
    pub gist_token: String,
    #[serde(default)]
    pub webdav_url: String,
    #[serde(default)]
    pub webdav_user: String,
    #[serde(default)]
    pub webdav_pass: String,
}

impl UpdateConfigRequest {
    /// 应用到现有配置（保留 `gist_id` 绑定）
    pub fn apply_to(&self, config: &mut MonitorConfig) {
        config.gist_token.clone_from(&self.gist_token);
        config.webdav_url.clone_from(&self.webdav_url);
        config.webdav_user.clone_from(&self.webdav_user);
        config.webdav_pass.clone_from(&self.webdav_pass);
    }
}
