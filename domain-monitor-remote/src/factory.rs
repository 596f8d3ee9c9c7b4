//! Backend factory functions and runtime selection tag.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::backends::{GistBackend, WebdavBackend};
use crate::error::{BackendError, Result};
use crate::traits::RemoteBackend;

/// Runtime tag selecting which backend a sync operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    /// Gist-style snippet store.
    Gist,
    /// WebDAV endpoint.
    Webdav,
}

/// Credentials for constructing a backend.
///
/// The variant determines the concrete backend type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum BackendCredentials {
    /// Snippet-store access token plus the bound snippet identifier, if any.
    Gist {
        token: String,
        gist_id: Option<String>,
    },
    /// WebDAV base URL and basic-auth credentials.
    Webdav {
        base_url: String,
        username: String,
        password: String,
    },
}

/// Creates a [`RemoteBackend`] instance from the given credentials.
///
/// Required configuration is validated here, so a misconfigured backend
/// fails before any network I/O is attempted.
///
/// # Errors
/// Returns [`BackendError::NotConfigured`] when the snippet-store token or
/// the WebDAV base URL is absent.
pub fn create_backend(credentials: BackendCredentials) -> Result<Arc<dyn RemoteBackend>> {
    match credentials {
        BackendCredentials::Gist { token, gist_id } => {
            if token.is_empty() {
                return Err(BackendError::NotConfigured {
                    backend: "gist".to_string(),
                    detail: "请先配置 Gist Token".to_string(),
                });
            }
            Ok(Arc::new(GistBackend::new(token, gist_id)))
        }
        BackendCredentials::Webdav {
            base_url,
            username,
            password,
        } => {
            if base_url.is_empty() {
                return Err(BackendError::NotConfigured {
                    backend: "webdav".to_string(),
                    detail: "请先配置 WebDAV 地址".to_string(),
                });
            }
            Ok(Arc::new(WebdavBackend::new(base_url, username, password)))
        }
    }
}
