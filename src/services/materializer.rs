//! 落盘服务 - 业务能力层
//!
//! 负责三类输出的写入：
//! - 每个地址簿一个 txt 文件（首行为运行时间戳）
//! - ESA 回源地址簿的专用文件 esa_ip_list_latest.txt
//! - 全量重建的 index.html 导航页
//!
//! 索引每次整体重建：列目录、排序、渲染，不做增量维护，
//! 上次运行遗留的 txt 文件只要还在磁盘上就会被重新收录

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::AddressBookRecord;

/// 为每个非空地址簿写入独立的 txt 文件，返回写入数量
pub async fn write_address_books(
    config: &Config,
    records: &[AddressBookRecord],
    timestamp: &str,
) -> Result<usize> {
    fs::create_dir_all(&config.address_books_dir)
        .await
        .with_context(|| format!("无法创建输出目录: {}", config.address_books_dir))?;

    let mut written = 0;
    for record in records {
        if record.addresses.is_empty() {
            continue;
        }

        let file_name = format!("{}.txt", record.file_stem());
        let path = Path::new(&config.address_books_dir).join(&file_name);
        fs::write(&path, render_list(timestamp, &record.addresses))
            .await
            .with_context(|| format!("写入地址簿文件失败: {}", path.display()))?;

        debug!("✓ 已写入 {} ({} 条地址)", file_name, record.addresses.len());
        written += 1;
    }

    Ok(written)
}

/// 写入 ESA 回源地址簿的专用文件
///
/// 找不到 ESA 记录时只告警不报错，返回是否写入
pub async fn write_esa_latest(
    config: &Config,
    records: &[AddressBookRecord],
    timestamp: &str,
) -> Result<bool> {
    let Some(esa) = records.iter().find(|r| r.is_esa()) else {
        warn!("⚠️ 没有找到 ESA 回源地址簿，跳过 {}", config.esa_latest_file);
        return Ok(false);
    };

    fs::write(&config.esa_latest_file, render_list(timestamp, &esa.addresses))
        .await
        .with_context(|| format!("写入 ESA 文件失败: {}", config.esa_latest_file))?;

    info!("✓ 已写入 ESA 回源文件: {}", config.esa_latest_file);
    Ok(true)
}

/// 全量重建 index.html，返回收录的文件数量
pub async fn write_index(config: &Config) -> Result<usize> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(&config.address_books_dir)
        .await
        .with_context(|| format!("无法读取输出目录: {}", config.address_books_dir))?;

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".txt") {
            files.push(name);
        }
    }
    files.sort();

    // 索引里的链接相对于 index.html 所在目录
    let link_dir = Path::new(&config.address_books_dir)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "address_books".to_string());

    let index_path = Path::new(&config.docs_dir).join("index.html");
    fs::write(&index_path, render_index_html(&link_dir, &files))
        .await
        .with_context(|| format!("写入索引失败: {}", index_path.display()))?;

    Ok(files.len())
}

/// 渲染单个地址簿文件：首行时间戳，之后每行一个地址（逐行 trim）
fn render_list(timestamp: &str, addresses: &[String]) -> String {
    let mut content = String::with_capacity(timestamp.len() + addresses.len() * 16);
    content.push_str(timestamp);
    content.push('\n');
    for address in addresses {
        content.push_str(address.trim());
        content.push('\n');
    }
    content
}

/// 渲染导航页 HTML，文件名需已按字典序排好
pub fn render_index_html(link_dir: &str, files: &[String]) -> String {
    let mut html = String::new();
    html.push_str("<html><head><meta charset=\"UTF-8\"><title>地址簿导航</title></head><body>\n");
    html.push_str("<h1>📒 地址簿列表</h1><ul>\n");
    for file in files {
        let name = file.trim_end_matches(".txt");
        html.push_str(&format!(
            "<li><a href=\"{}/{}\">{}</a></li>\n",
            link_dir, file, name
        ));
    }
    html.push_str("</ul></body></html>");
    html
}
