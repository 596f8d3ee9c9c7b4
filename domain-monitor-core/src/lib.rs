//! Domain Monitor Core Library
//!
//! Provides core business logic for the domain monitoring service, including:
//! - Domain record management (Domain Service)
//! - Reachability probing (Liveness Service)
//! - Backup encode/decode and import merge (Backup Service)
//! - Remote synchronization dispatch (Sync Service)
//!
//! This library is designed to be platform-independent, abstracting the
//! storage layer through traits. The web-facing layer lives elsewhere and
//! calls into the services exposed here.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{ConfigRepository, DomainRepository};
