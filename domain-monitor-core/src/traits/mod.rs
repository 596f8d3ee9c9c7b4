//! 存储抽象 Trait 模块

mod config_repository;
mod domain_repository;

pub use config_repository::ConfigRepository;
pub use domain_repository::DomainRepository;
