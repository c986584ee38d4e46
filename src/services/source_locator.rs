//! 输入文件定位服务 - 业务能力层
//!
//! 只负责"从上传目录挑出唯一的最新文件"，不关心后续流程
//!
//! - CSV：按文件名内嵌日期（esa_ip_list_YYYYMMDD.csv）取最大值
//! - JSON：按文件系统修改时间取最新（data*.json）

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::path::PathBuf;
use std::time::SystemTime;
use tokio::fs;

use crate::error::AppError;

/// CSV 文件名模式，捕获组为日期片段
const CSV_NAME_PATTERN: &str = r"^esa_ip_list_(.+)\.csv$";

/// 在上传目录中定位最新的 CSV 文件
///
/// 候选文件名中的日期无法解析时直接报错，而不是静默跳过
pub async fn find_latest_csv(upload_dir: &str) -> Result<PathBuf> {
    let pattern = Regex::new(CSV_NAME_PATTERN).context("CSV 文件名模式非法")?;

    let mut latest: Option<(NaiveDate, PathBuf)> = None;
    let mut entries = fs::read_dir(upload_dir)
        .await
        .with_context(|| format!("无法读取上传目录: {}", upload_dir))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(captures) = pattern.captures(name) else {
            continue;
        };

        let date_token = &captures[1];
        let date = NaiveDate::parse_from_str(date_token, "%Y%m%d").map_err(|e| {
            AppError::MalformedDate {
                file: name.to_string(),
                reason: e.to_string(),
            }
        })?;

        if latest.as_ref().map_or(true, |(max, _)| date > *max) {
            latest = Some((date, path));
        }
    }

    match latest {
        Some((_, path)) => Ok(path),
        None => Err(AppError::MissingInput {
            dir: upload_dir.to_string(),
            pattern: "esa_ip_list_*.csv".to_string(),
        }
        .into()),
    }
}

/// 在上传目录中定位最新的 JSON 文件（按修改时间）
pub async fn find_latest_json(upload_dir: &str) -> Result<PathBuf> {
    let mut latest: Option<(SystemTime, PathBuf)> = None;
    let mut entries = fs::read_dir(upload_dir)
        .await
        .with_context(|| format!("无法读取上传目录: {}", upload_dir))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with("data") || !name.ends_with(".json") {
            continue;
        }

        let modified = entry
            .metadata()
            .await
            .with_context(|| format!("无法读取文件元数据: {}", path.display()))?
            .modified()
            .with_context(|| format!("无法获取修改时间: {}", path.display()))?;

        if latest.as_ref().map_or(true, |(max, _)| modified > *max) {
            latest = Some((modified, path));
        }
    }

    match latest {
        Some((_, path)) => Ok(path),
        None => Err(AppError::MissingInput {
            dir: upload_dir.to_string(),
            pattern: "data*.json".to_string(),
        }
        .into()),
    }
}
