//! # domain-monitor-remote
//!
//! Remote backup backend abstraction for Domain Monitor.
//!
//! A backend is a remote location that can hold one copy of the domain-list
//! backup payload. Two backends are provided:
//!
//! | Backend | Auth Method | Transport |
//! |---------|-------------|-----------|
//! | Gist-style snippet store | Token | REST (create / conditional update / fetch) |
//! | WebDAV | Basic auth | PUT/GET at a fixed path |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_monitor_remote::{create_backend, BackendCredentials, PushOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = create_backend(BackendCredentials::Gist {
//!         token: "ghp_xxx".to_string(),
//!         gist_id: None,
//!     })?;
//!
//!     match backend.push("[]").await? {
//!         PushOutcome::Created { gist_id } => println!("created {gist_id:?}"),
//!         PushOutcome::Updated => println!("updated"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, BackendError>`](BackendError).
//! Configuration problems (missing token, unset base URL) surface as
//! [`BackendError::NotConfigured`] before any network I/O is attempted.
//! No automatic retry is performed; the caller decides.

mod backends;
mod error;
mod factory;
mod traits;

// Re-export error types
pub use error::{BackendError, Result};

// Re-export factory functions
pub use factory::{create_backend, BackendCredentials, BackendType};

// Re-export core trait and outcome types
pub use traits::{PushOutcome, RemoteBackend};

// Re-export concrete backends
pub use backends::{GistBackend, WebdavBackend, BACKUP_FILENAME};
