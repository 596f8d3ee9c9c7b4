mod common;
mod gist;
mod webdav;

pub use gist::GistBackend;
pub use webdav::WebdavBackend;

/// 备份负载在远端的固定文件名
///
/// Gist 后端在片段文件表中使用此名字；WebDAV 后端把它拼接在基础 URL 之后。
pub const BACKUP_FILENAME: &str = "domains_backup.json";
