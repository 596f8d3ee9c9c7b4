//! Gist 式代码片段存储后端

mod backend;
mod types;

use reqwest::Client;

use crate::backends::common::create_http_client;

pub(crate) const GIST_API_BASE: &str = "https://api.github.com/gists";
/// 远端片段的描述文字
pub(crate) const GIST_DESCRIPTION: &str = "Domain Monitor Backup";

/// Gist 式片段存储后端
///
/// 状态机：无 token 时工厂直接拒绝；`gist_id` 为 `None` 时 `push` 新建并
/// 返回新标识符；已绑定标识符失效（远端 404）时清除绑定并在同一次调用内
/// 转为新建。
pub struct GistBackend {
    pub(crate) client: Client,
    pub(crate) token: String,
    /// 已绑定的片段标识符（首次成功导出后由调用方持久化）
    pub(crate) gist_id: Option<String>,
    /// API 基础地址（测试中指向本地监听器）
    pub(crate) api_base: String,
}

impl GistBackend {
    pub fn new(token: String, gist_id: Option<String>) -> Self {
        Self {
            client: create_http_client(),
            token,
            // 空字符串视为未绑定
            gist_id: gist_id.filter(|id| !id.is_empty()),
            api_base: GIST_API_BASE.to_string(),
        }
    }
}
