//! WebDAV 后端
//!
//! 在配置的基础 URL 下的固定路径上 PUT/GET 备份负载，使用 Basic 认证。
//! 适配坚果云 / Nextcloud 等任意标准 WebDAV 服务。

use async_trait::async_trait;
use reqwest::Client;

use crate::backends::common::{create_http_client, map_transport_error};
use crate::backends::BACKUP_FILENAME;
use crate::error::{BackendError, Result};
use crate::traits::{PushOutcome, RemoteBackend};

const BACKEND_ID: &str = "webdav";

/// WebDAV 后端
pub struct WebdavBackend {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl WebdavBackend {
    pub fn new(base_url: String, username: String, password: String) -> Self {
        Self {
            client: create_http_client(),
            base_url,
            username,
            password,
        }
    }

    /// 备份文件的完整 URL
    fn backup_url(&self) -> String {
        format!("{}/{BACKUP_FILENAME}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RemoteBackend for WebdavBackend {
    fn id(&self) -> &'static str {
        BACKEND_ID
    }

    async fn push(&self, payload: &str) -> Result<PushOutcome> {
        let url = self.backup_url();
        log::debug!("PUT {url}");

        let response = self
            .client
            .put(&url)
            .basic_auth(&self.username, Some(&self.password))
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| map_transport_error(BACKEND_ID, &e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        // WebDAV 服务对新建返回 201、覆盖返回 200/204
        match status.as_u16() {
            201 => Ok(PushOutcome::Created { gist_id: None }),
            200 | 204 => Ok(PushOutcome::Updated),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(BackendError::RemoteStatus {
                    backend: BACKEND_ID.to_string(),
                    status: status.as_u16(),
                    raw_message: Some(body),
                })
            }
        }
    }

    async fn pull(&self) -> Result<String> {
        let url = self.backup_url();
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| map_transport_error(BACKEND_ID, &e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::RemoteStatus {
                backend: BACKEND_ID.to_string(),
                status: status.as_u16(),
                raw_message: Some(body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| map_transport_error(BACKEND_ID, &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::common::testing::spawn_http_server;

    #[tokio::test]
    async fn push_first_upload_reports_created() {
        let base = spawn_http_server(vec![(201, String::new())]).await;
        let backend = WebdavBackend::new(base, "user".to_string(), "pass".to_string());
        let outcome = backend.push("[]").await.unwrap();
        assert_eq!(outcome, PushOutcome::Created { gist_id: None });
    }

    #[tokio::test]
    async fn push_overwrite_reports_updated() {
        let base = spawn_http_server(vec![(204, String::new())]).await;
        let backend = WebdavBackend::new(base, "user".to_string(), "pass".to_string());
        let outcome = backend.push("[]").await.unwrap();
        assert_eq!(outcome, PushOutcome::Updated);
    }

    #[tokio::test]
    async fn pull_returns_remote_payload() {
        let base = spawn_http_server(vec![(200, "[1,2]".to_string())]).await;
        let backend = WebdavBackend::new(base, "user".to_string(), "pass".to_string());
        assert_eq!(backend.pull().await.unwrap(), "[1,2]");
    }

    #[tokio::test]
    async fn pull_surfaces_remote_status_error() {
        let base = spawn_http_server(vec![(404, String::new())]).await;
        let backend = WebdavBackend::new(base, "user".to_string(), "pass".to_string());
        let result = backend.pull().await;
        assert!(matches!(
            result,
            Err(BackendError::RemoteStatus { status: 404, .. })
        ));
    }

    #[test]
    fn backup_url_joins_with_trailing_slash() {
        let backend = WebdavBackend::new(
            "https://dav.example.com/dav/".to_string(),
            String::new(),
            String::new(),
        );
        assert_eq!(
            backend.backup_url(),
            "https://dav.example.com/dav/domains_backup.json"
        );
    }

    #[test]
    fn backup_url_joins_without_trailing_slash() {
        let backend = WebdavBackend::new(
            "https://dav.example.com/dav".to_string(),
            String::new(),
            String::new(),
        );
        assert_eq!(
            backend.backup_url(),
            "https://dav.example.com/dav/domains_backup.json"
        );
    }
}
