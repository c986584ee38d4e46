//! 应用编排层
//!
//! 串联四个阶段：定位 → 解析 → 落盘 → 归档，严格顺序执行，
//! 任何一步失败都直接中止本次运行

use anyhow::{Context, Result};
use std::str::FromStr;
use tokio::fs;
use tracing::info;

use crate::config::Config;
use crate::services::{archiver, csv_parser, json_parser, materializer, source_locator};
use crate::utils::time;

/// 运行模式，对应两种导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Csv,
    Json,
}

impl FromStr for RunMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "csv" => Ok(RunMode::Csv),
            "json" => Ok(RunMode::Json),
            other => anyhow::bail!("未知运行模式: {}（可选: csv / json）", other),
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 按运行模式执行完整管线
    pub async fn run(&self, mode: RunMode) -> Result<()> {
        match mode {
            RunMode::Csv => self.run_csv().await,
            RunMode::Json => self.run_json().await,
        }
    }

    /// CSV 变体：按文件名日期取最新文件，归档保留原名，扫尾清理
    pub async fn run_csv(&self) -> Result<()> {
        let source = source_locator::find_latest_csv(&self.config.upload_dir).await?;
        info!("📥 处理最新 CSV 文件: {}", source.display());

        let content = fs::read_to_string(&source)
            .await
            .with_context(|| format!("无法读取输入文件: {}", source.display()))?;
        let records = csv_parser::parse_csv(&content)?;
        info!("✓ 解析出 {} 个地址簿条目", records.len());

        // 时间戳一次运行只计算一次，所有输出文件共用
        let now = time::now_beijing();
        let timestamp = time::run_timestamp(&now);

        let written = materializer::write_address_books(&self.config, &records, &timestamp).await?;
        materializer::write_esa_latest(&self.config, &records, &timestamp).await?;
        let indexed = materializer::write_index(&self.config).await?;
        info!("✓ 已写入 {} 个地址簿文件，索引收录 {} 个", written, indexed);

        archiver::archive_csv(&self.config, &source).await?;
        let swept = archiver::sweep_upload_csv(&self.config).await?;
        if swept > 0 {
            info!("🧹 已清理 {} 个残留 CSV 文件", swept);
        }

        Ok(())
    }

    /// JSON 变体：按修改时间取最新文件，归档按日期加序号命名
    pub async fn run_json(&self) -> Result<()> {
        let source = source_locator::find_latest_json(&self.config.upload_dir).await?;
        info!("📥 处理最新 JSON 文件: {}", source.display());

        let content = fs::read_to_string(&source)
            .await
            .with_context(|| format!("无法读取输入文件: {}", source.display()))?;
        let records = json_parser::parse_json(&content)?;
        info!("✓ 解析出 {} 个地址簿条目", records.len());

        let now = time::now_beijing();
        let timestamp = time::run_timestamp(&now);

        let written = materializer::write_address_books(&self.config, &records, &timestamp).await?;
        materializer::write_esa_latest(&self.config, &records, &timestamp).await?;
        let indexed = materializer::write_index(&self.config).await?;
        info!("✓ 已写入 {} 个地址簿文件，索引收录 {} 个", written, indexed);

        archiver::archive_json(&self.config, &source, &time::archive_date(&now)).await?;

        Ok(())
    }
}
