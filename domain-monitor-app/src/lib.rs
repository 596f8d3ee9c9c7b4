//! Platform-agnostic application bootstrap for Domain Monitor.
//!
//! Provides `AppState` (service container) and `AppStateBuilder`
//! (adapter injection). The web frontend constructs this once at startup
//! and routes every request through the services held here.

pub mod adapters;

use std::sync::Arc;

use domain_monitor_core::error::{CoreError, CoreResult};
use domain_monitor_core::services::{
    BackupService, ConfigService, DomainService, LivenessService, ServiceContext, SyncService,
};
use domain_monitor_core::traits::{ConfigRepository, DomainRepository};

/// Platform-agnostic application state.
///
/// Holds all services and the `ServiceContext`.
pub struct AppState {
    /// Service context (holds the storage adapters)
    pub ctx: Arc<ServiceContext>,
    /// Domain record service
    pub domain_service: DomainService,
    /// Reachability probing service
    pub liveness_service: LivenessService,
    /// Backup codec and import merge service
    pub backup_service: BackupService,
    /// Remote synchronization service
    pub sync_service: SyncService,
    /// Configuration service
    pub config_service: ConfigService,
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `domain_repository` — how domain records are stored
/// - `config_repository` — how the singleton configuration is stored
pub struct AppStateBuilder {
    domain_repository: Option<Arc<dyn DomainRepository>>,
    config_repository: Option<Arc<dyn ConfigRepository>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            domain_repository: None,
            config_repository: None,
        }
    }

    #[must_use]
    pub fn domain_repository(mut self, repo: Arc<dyn DomainRepository>) -> Self {
        self.domain_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn config_repository(mut self, repo: Arc<dyn ConfigRepository>) -> Self {
        self.config_repository = Some(repo);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let domain_repository = self.domain_repository.ok_or_else(|| {
            CoreError::ValidationError("domain_repository is required".to_string())
        })?;
        let config_repository = self.config_repository.ok_or_else(|| {
            CoreError::ValidationError("config_repository is required".to_string())
        })?;

        let ctx = Arc::new(ServiceContext::new(domain_repository, config_repository));

        Ok(AppState {
            domain_service: DomainService::new(Arc::clone(&ctx)),
            liveness_service: LivenessService::new(Arc::clone(&ctx)),
            backup_service: BackupService::new(Arc::clone(&ctx)),
            sync_service: SyncService::new(Arc::clone(&ctx)),
            config_service: ConfigService::new(Arc::clone(&ctx)),
            ctx,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
