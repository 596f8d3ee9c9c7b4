//! 批量添加输入的域名清洗

/// 清洗一行用户输入，提取裸域名
///
/// 规则：去首尾空白、剥离 `https://` / `http://` 前缀、截断首个 `/` 之后
/// 的路径。结果必须包含 `.` 才视为有效域名，否则返回 `None`。
#[must_use]
pub fn clean_domain_line(line: &str) -> Option<String> {
    let mut cleaned = line.trim();
    if let Some(rest) = cleaned.strip_prefix("https://") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("http://") {
        cleaned = rest;
    }
    let host = cleaned.split('/').next().unwrap_or_default();
    if host.contains('.') {
        Some(host.to_string())
    } else {
        None
    }
}
