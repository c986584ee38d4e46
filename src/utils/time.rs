//! 时间工具模块
//!
//! 所有输出文件共用同一个运行时间戳，时区固定为北京时间（UTC+8）

use chrono::{DateTime, FixedOffset, Utc};

/// 北京时间与 UTC 的秒偏移
const BEIJING_OFFSET_SECS: i32 = 8 * 3600;

/// 获取当前北京时间
pub fn now_beijing() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(BEIJING_OFFSET_SECS).expect("UTC+8 是合法偏移");
    Utc::now().with_timezone(&offset)
}

/// 生成文件首行的运行时间戳，例如 `### 2025/09/04 08:30`
///
/// 一次运行只计算一次，所有输出文件共用同一个字符串
pub fn run_timestamp(now: &DateTime<FixedOffset>) -> String {
    now.format("### %Y/%m/%d %H:%M").to_string()
}

/// 生成归档文件名中的日期片段，例如 `20250904`
pub fn archive_date(now: &DateTime<FixedOffset>) -> String {
    now.format("%Y%m%d").to_string()
}
