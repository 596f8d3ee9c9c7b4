//! Gist API 类型定义

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 创建/更新片段的请求体
#[derive(Debug, Serialize)]
pub struct GistPayload {
    pub description: String,
    pub public: bool,
    pub files: HashMap<String, GistFileContent>,
}

#[derive(Debug, Serialize)]
pub struct GistFileContent {
    pub content: String,
}

impl GistPayload {
    /// 构造携带单个备份文件的请求体
    pub fn single_file(filename: &str, description: &str, content: &str) -> Self {
        let mut files = HashMap::new();
        files.insert(
            filename.to_string(),
            GistFileContent {
                content: content.to_string(),
            },
        );
        Self {
            description: description.to_string(),
            public: false,
            files,
        }
    }
}

/// 片段响应（仅解析用到的字段）
#[derive(Debug, Deserialize)]
pub struct GistResponse {
    pub id: String,
    #[serde(default)]
    pub files: HashMap<String, GistFile>,
}

#[derive(Debug, Deserialize)]
pub struct GistFile {
    pub content: Option<String>,
}
