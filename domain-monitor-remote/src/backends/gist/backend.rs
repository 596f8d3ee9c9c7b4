//! Gist 后端的 HTTP 请求与 `RemoteBackend` 实现

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::backends::common::map_transport_error;
use crate::backends::BACKUP_FILENAME;
use crate::error::{BackendError, Result};
use crate::traits::{PushOutcome, RemoteBackend};

use super::types::{GistPayload, GistResponse};
use super::{GistBackend, GIST_DESCRIPTION};

const BACKEND_ID: &str = "gist";

impl GistBackend {
    fn payload(content: &str) -> GistPayload {
        GistPayload::single_file(BACKUP_FILENAME, GIST_DESCRIPTION, content)
    }

    fn auth_header(&self) -> String {
        format!("token {}", self.token)
    }

    /// 更新已绑定的片段（条件请求）
    ///
    /// # Returns
    /// * `Ok(true)` - 更新成功
    /// * `Ok(false)` - 远端报告标识符已不存在（404），调用方应转为新建
    async fn update_gist(&self, gist_id: &str, content: &str) -> Result<bool> {
        let url = format!("{}/{gist_id}", self.api_base);
        log::debug!("PATCH {url}");

        let response = self
            .client
            .patch(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/vnd.github.v3+json")
            .json(&Self::payload(content))
            .send()
            .await
            .map_err(|e| map_transport_error(BACKEND_ID, &e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if status == StatusCode::NOT_FOUND {
            log::warn!("[gist] 绑定的片段 {gist_id} 已不存在，转为新建");
            return Ok(false);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::RemoteStatus {
                backend: BACKEND_ID.to_string(),
                status: status.as_u16(),
                raw_message: Some(body),
            });
        }

        Ok(true)
    }

    /// 新建片段，返回远端分配的标识符
    async fn create_gist(&self, content: &str) -> Result<String> {
        log::debug!("POST {}", self.api_base);

        let response = self
            .client
            .post(&self.api_base)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/vnd.github.v3+json")
            .json(&Self::payload(content))
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

        let created: GistResponse = response.json().await.map_err(|e| {
            BackendError::ParseError {
                backend: BACKEND_ID.to_string(),
                detail: e.to_string(),
            }
        })?;

        Ok(created.id)
    }

    /// 获取已绑定的片段
    async fn fetch_gist(&self, gist_id: &str) -> Result<GistResponse> {
        let url = format!("{}/{gist_id}", self.api_base);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/vnd.github.v3+json")
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

        response.json().await.map_err(|e| BackendError::ParseError {
            backend: BACKEND_ID.to_string(),
            detail: e.to_string(),
        })
    }
}

#[async_trait]
impl RemoteBackend for GistBackend {
    fn id(&self) -> &'static str {
        BACKEND_ID
    }

    async fn push(&self, payload: &str) -> Result<PushOutcome> {
        // 已绑定标识符时先尝试更新；404 说明绑定失效，同一次调用内转为新建
        if let Some(gist_id) = &self.gist_id {
            if self.update_gist(gist_id, payload).await? {
                return Ok(PushOutcome::Updated);
            }
        }

        let gist_id = self.create_gist(payload).await?;
        log::info!("[gist] 新建片段成功: {gist_id}");
        Ok(PushOutcome::Created {
            gist_id: Some(gist_id),
        })
    }

    async fn pull(&self) -> Result<String> {
        let Some(gist_id) = &self.gist_id else {
            return Err(BackendError::NotConfigured {
                backend: BACKEND_ID.to_string(),
                detail: "未找到绑定的 Gist ID，请先执行一次导出".to_string(),
            });
        };

        let gist = self.fetch_gist(gist_id).await?;
        gist.files
            .get(BACKUP_FILENAME)
            .and_then(|f| f.content.clone())
            .ok_or_else(|| BackendError::PayloadMissing {
                backend: BACKEND_ID.to_string(),
                detail: BACKUP_FILENAME.to_string(),
            })
    }
}
