//! CSV 解析服务 - 业务能力层
//!
//! 只负责"把导出 CSV 解码成地址簿记录"，不关心文件定位和落盘
//!
//! 导出 CSV 的地址列在单个单元格内用换行分隔多个地址，
//! 地址为空或为占位符 `nan` 的行直接跳过

use anyhow::{Context, Result};

use crate::error::AppError;
use crate::models::AddressBookRecord;

/// 地址簿名称列
const NAME_COLUMN: &str = "地址簿名称";
/// 地址列表列
const ADDRESS_COLUMN: &str = "IP地址/域名";

/// 把 CSV 内容解析成地址簿记录序列
pub fn parse_csv(content: &str) -> Result<Vec<AddressBookRecord>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());

    let headers = reader.headers().context("无法读取 CSV 表头")?.clone();
    let name_idx = column_index(&headers, NAME_COLUMN)?;
    let addr_idx = column_index(&headers, ADDRESS_COLUMN)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.context("无法读取 CSV 行")?;
        let name = row.get(name_idx).unwrap_or("");
        let addr_cell = row.get(addr_idx).unwrap_or("").trim();

        // 空地址或占位符行跳过，不算错误
        if addr_cell.is_empty() || addr_cell.eq_ignore_ascii_case("nan") {
            continue;
        }

        let addresses = addr_cell.split('\n').map(str::trim).map(String::from).collect();
        records.push(AddressBookRecord::new(name, addresses));
    }

    Ok(records)
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| {
            AppError::MissingColumn {
                column: column.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiline_address_cell() {
        let content = "地址簿名称,IP地址/域名\nESA Back-to-origin Address Book,\"1.2.3.4\n5.6.7.8\"\n";
        let records = parse_csv(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].group_name, "ESA Back-to-origin Address Book");
        assert_eq!(records[0].addresses, vec!["1.2.3.4", "5.6.7.8"]);
    }

    #[test]
    fn test_skips_empty_and_nan_rows() {
        let content = "地址簿名称,IP地址/域名\n空簿,\n占位,nan\n正常,9.9.9.9\n";
        let records = parse_csv(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].group_name, "正常");
    }

    #[test]
    fn test_missing_column_is_error() {
        let content = "名称,地址\nx,y\n";
        let err = parse_csv(content).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_addresses_trimmed_in_order() {
        let content = "地址簿名称,IP地址/域名\ncdn,\" a.example.com \nb.example.com\"\n";
        let records = parse_csv(content).unwrap();
        assert_eq!(records[0].addresses, vec!["a.example.com", "b.example.com"]);
    }
}
