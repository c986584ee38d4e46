//! 归档服务 - 业务能力层
//!
//! 处理完的输入文件移入归档目录：
//! - CSV 保留原始文件名
//! - JSON 重命名为 dataYYYYMMDD-N.json，N 为当日已有最大序号加一，
//!   保证同一天多次归档互不覆盖

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::config::Config;

/// 归档 CSV 文件，保留原始文件名
pub async fn archive_csv(config: &Config, source: &Path) -> Result<PathBuf> {
    fs::create_dir_all(&config.archive_dir)
        .await
        .with_context(|| format!("无法创建归档目录: {}", config.archive_dir))?;

    let file_name = source
        .file_name()
        .with_context(|| format!("输入文件没有文件名: {}", source.display()))?;
    let dest = Path::new(&config.archive_dir).join(file_name);

    fs::rename(source, &dest)
        .await
        .with_context(|| format!("归档失败: {} -> {}", source.display(), dest.display()))?;

    info!("📦 已归档到: {}", dest.display());
    Ok(dest)
}

/// 归档 JSON 文件，按日期加序号命名
pub async fn archive_json(config: &Config, source: &Path, date: &str) -> Result<PathBuf> {
    fs::create_dir_all(&config.archive_dir)
        .await
        .with_context(|| format!("无法创建归档目录: {}", config.archive_dir))?;

    let base = format!("data{}", date);
    let mut existing = Vec::new();
    let mut entries = fs::read_dir(&config.archive_dir)
        .await
        .with_context(|| format!("无法读取归档目录: {}", config.archive_dir))?;
    while let Some(entry) = entries.next_entry().await? {
        existing.push(entry.file_name().to_string_lossy().into_owned());
    }

    let sequence = next_sequence(existing.iter().map(String::as_str), &base);
    let dest = Path::new(&config.archive_dir).join(format!("{}-{}.json", base, sequence));

    fs::rename(source, &dest)
        .await
        .with_context(|| format!("归档失败: {} -> {}", source.display(), dest.display()))?;

    info!("📦 已归档到: {}", dest.display());
    Ok(dest)
}

/// 清理上传目录中剩余的 CSV 文件（多候选时的安全扫尾），返回删除数量
pub async fn sweep_upload_csv(config: &Config) -> Result<usize> {
    let mut removed = 0;
    let mut entries = fs::read_dir(&config.upload_dir)
        .await
        .with_context(|| format!("无法读取上传目录: {}", config.upload_dir))?;

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with("esa_ip_list_") && name.ends_with(".csv") {
            let path = entry.path();
            fs::remove_file(&path)
                .await
                .with_context(|| format!("删除残留文件失败: {}", path.display()))?;
            debug!("🧹 已删除残留文件: {}", name);
            removed += 1;
        }
    }

    Ok(removed)
}

/// 计算当日下一个归档序号：已有最大序号加一，没有则为 1
///
/// 无法解析出序号的文件名忽略，不算错误
fn next_sequence<'a>(names: impl Iterator<Item = &'a str>, base: &str) -> u32 {
    names
        .filter_map(|name| {
            let rest = name.strip_prefix(base)?.strip_suffix(".json")?;
            rest.trim_start_matches('-').parse::<u32>().ok()
        })
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_next_sequence_increments_max() {
        let names = ["data20250904-1.json", "data20250904-2.json"];
        assert_eq!(next_sequence(names.iter().copied(), "data20250904"), 3);
    }

    #[test]
    fn test_next_sequence_starts_at_one() {
        assert_eq!(next_sequence(std::iter::empty(), "data20250904"), 1);
    }

    #[test]
    fn test_next_sequence_ignores_other_dates_and_garbage() {
        let names = [
            "data20250903-7.json",
            "data20250904-junk.json",
            "data20250904-2.json",
            "notes.txt",
        ];
        assert_eq!(next_sequence(names.iter().copied(), "data20250904"), 3);
    }

    #[tokio::test]
    async fn test_archive_json_names_by_date_and_sequence() {
        let dir = TempDir::new().unwrap();
        let config = Config::with_root(dir.path());
        std::fs::create_dir_all(&config.upload_dir).unwrap();
        std::fs::create_dir_all(&config.archive_dir).unwrap();
        std::fs::write(
            Path::new(&config.archive_dir).join("data20250904-1.json"),
            "{}",
        )
        .unwrap();

        let source = Path::new(&config.upload_dir).join("data1.json");
        std::fs::write(&source, "{}").unwrap();

        let dest = archive_json(&config, &source, "20250904").await.unwrap();
        assert_eq!(
            dest.file_name().unwrap().to_str().unwrap(),
            "data20250904-2.json"
        );
        assert!(dest.exists());
        assert!(!source.exists());
    }

    #[tokio::test]
    async fn test_archive_csv_keeps_original_name() {
        let dir = TempDir::new().unwrap();
        let config = Config::with_root(dir.path());
        std::fs::create_dir_all(&config.upload_dir).unwrap();

        let source = Path::new(&config.upload_dir).join("esa_ip_list_20250904.csv");
        std::fs::write(&source, "x").unwrap();

        let dest = archive_csv(&config, &source).await.unwrap();
        assert_eq!(
            dest.file_name().unwrap().to_str().unwrap(),
            "esa_ip_list_20250904.csv"
        );
        assert!(!source.exists());
    }

    #[tokio::test]
    async fn test_sweep_removes_only_matching_files() {
        let dir = TempDir::new().unwrap();
        let config = Config::with_root(dir.path());
        std::fs::create_dir_all(&config.upload_dir).unwrap();
        let upload = Path::new(&config.upload_dir);
        std::fs::write(upload.join("esa_ip_list_20250901.csv"), "x").unwrap();
        std::fs::write(upload.join("esa_ip_list_20250902.csv"), "x").unwrap();
        std::fs::write(upload.join("keep.json"), "{}").unwrap();

        let removed = sweep_upload_csv(&config).await.unwrap();
        assert_eq!(removed, 2);
        assert!(upload.join("keep.json").exists());
    }
}
