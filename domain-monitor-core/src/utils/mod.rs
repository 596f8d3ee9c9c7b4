//! 工具模块

pub mod expiry;
pub mod normalize;
