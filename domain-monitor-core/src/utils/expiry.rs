//! 到期天数计算

use chrono::NaiveDate;

/// 日期字段的存储格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 计算距指定到期日期还有多少天
///
/// 相对 `today` 计算日历天数差，可为负（已过期）。
/// 日期为空或无法按 [`DATE_FORMAT`] 解析时返回 `None`。
#[must_use]
pub fn days_until(expiration_date: &str, today: NaiveDate) -> Option<i64> {
    let trimmed = expiration_date.trim();
    if trimmed.is_empty() {
        return None;
    }
    let expiry = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()?;
    Some((expiry - today).num_days())
}

/// 记录层面的到期天数：未知（空/无效日期）归一为 0
///
/// 展示层以 0 作为"未知"哨兵值，与真实的"今天到期"不作区分。
#[must_use]
pub fn days_to_expire(expiration_date: &str, today: NaiveDate) -> i64 {
    days_until(expiration_date, today).unwrap_or(0)
}
