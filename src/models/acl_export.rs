//! JSON 导出文件的线上格式
//!
//! 云端导出的 JSON 存在两种顶层结构、两种地址字段形态，
//! 这里用 `#[serde(untagged)]` 在解码边界一次性归一，
//! 下游只看到统一的 [`AddressBookRecord`](crate::models::AddressBookRecord)

use serde::Deserialize;

/// JSON 导出文件的两种顶层结构
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AclExport {
    /// `{ "Acls": [ ... ] }`
    Wrapped {
        #[serde(rename = "Acls")]
        acls: Vec<AclEntry>,
    },
    /// 顶层直接是数组
    Bare(Vec<AclEntry>),
}

impl AclExport {
    /// 取出地址簿条目列表
    pub fn into_entries(self) -> Vec<AclEntry> {
        match self {
            AclExport::Wrapped { acls } => acls,
            AclExport::Bare(entries) => entries,
        }
    }
}

/// 单个地址簿条目
#[derive(Debug, Deserialize)]
pub struct AclEntry {
    #[serde(rename = "GroupName", default)]
    pub group_name: String,
    #[serde(rename = "AddressList", default)]
    pub address_list: AddressField,
}

/// 地址字段的两种形态
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AddressField {
    /// 原生字符串数组，按原样使用
    List(Vec<String>),
    /// 换行分隔的单个字符串，拆分后去除空白、丢弃空行
    Text(String),
}

impl Default for AddressField {
    fn default() -> Self {
        AddressField::List(Vec::new())
    }
}

impl AddressField {
    /// 归一成地址列表
    pub fn into_addresses(self) -> Vec<String> {
        match self {
            AddressField::List(list) => list,
            AddressField::Text(text) => text
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wrapped_object() {
        let json = r#"{"Acls":[{"GroupName":"默认","AddressList":["1.1.1.1"]}]}"#;
        let export: AclExport = serde_json::from_str(json).unwrap();
        let entries = export.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].group_name, "默认");
    }

    #[test]
    fn test_decode_bare_array() {
        let json = r#"[{"GroupName":"默认","AddressList":["1.1.1.1","2.2.2.2"]}]"#;
        let export: AclExport = serde_json::from_str(json).unwrap();
        assert_eq!(export.into_entries().len(), 1);
    }

    #[test]
    fn test_decode_rejects_other_shapes() {
        assert!(serde_json::from_str::<AclExport>(r#""not an export""#).is_err());
        assert!(serde_json::from_str::<AclExport>(r#"{"Other":[]}"#).is_err());
    }

    #[test]
    fn test_address_field_list_kept_as_is() {
        let field = AddressField::List(vec!["1.2.3.4 ".to_string(), "".to_string()]);
        // 数组形态不做拆分和过滤，落盘时才逐行 trim
        assert_eq!(field.into_addresses(), vec!["1.2.3.4 ", ""]);
    }

    #[test]
    fn test_address_field_text_split_and_trimmed() {
        let field = AddressField::Text("1.2.3.4\n  5.6.7.8 \n\n".to_string());
        assert_eq!(field.into_addresses(), vec!["1.2.3.4", "5.6.7.8"]);
    }

    #[test]
    fn test_missing_address_list_defaults_to_empty() {
        let json = r#"{"Acls":[{"GroupName":"空"}]}"#;
        let export: AclExport = serde_json::from_str(json).unwrap();
        let entries = export.into_entries();
        assert!(entries.into_iter().next().unwrap().address_list.into_addresses().is_empty());
    }
}
