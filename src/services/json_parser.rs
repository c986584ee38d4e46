//! JSON 解析服务 - 业务能力层
//!
//! 只负责"把导出 JSON 解码成地址簿记录"，两种顶层结构和
//! 两种地址字段形态在 [`AclExport`] 解码时就已归一

use anyhow::Result;

use crate::error::AppError;
use crate::models::{AclExport, AddressBookRecord};

/// 把 JSON 内容解析成地址簿记录序列
///
/// 地址为空的条目直接跳过，不算错误
pub fn parse_json(content: &str) -> Result<Vec<AddressBookRecord>> {
    let export: AclExport =
        serde_json::from_str(content).map_err(|e| AppError::UnexpectedJsonStructure {
            reason: e.to_string(),
        })?;

    let records = export
        .into_entries()
        .into_iter()
        .map(|entry| AddressBookRecord::new(entry.group_name, entry.address_list.into_addresses()))
        .filter(|record| !record.addresses.is_empty())
        .collect();

    Ok(records)
}
