//! 地址簿内部数据模型
//!
//! CSV 和 JSON 两种输入在解析阶段都被统一成 [`AddressBookRecord`]，
//! 后续的落盘、索引、归档逻辑不再关心输入格式

/// ESA 回源地址簿的识别子串（区分大小写）
pub const ESA_MARKER: &str = "ESA Back-to-origin Address";

/// 单个地址簿记录
///
/// `group_name` 保留导出文件中的原始名称（仅去除首尾空白），
/// 输出文件名通过 [`AddressBookRecord::file_stem`] 规范化得到
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBookRecord {
    /// 地址簿名称（原始形式）
    pub group_name: String,
    /// 地址列表（IP 或域名），保持导出时的顺序
    pub addresses: Vec<String>,
}

impl AddressBookRecord {
    pub fn new(group_name: impl Into<String>, addresses: Vec<String>) -> Self {
        Self {
            group_name: group_name.into().trim().to_string(),
            addresses,
        }
    }

    /// 输出文件名主干（不含 .txt 后缀）
    pub fn file_stem(&self) -> String {
        normalize_group_name(&self.group_name)
    }

    /// 是否为 ESA 回源地址簿
    ///
    /// 按原始名称做子串匹配，规范化之后空格已被替换，匹配不到
    pub fn is_esa(&self) -> bool {
        self.group_name.contains(ESA_MARKER)
    }
}

/// 规范化地址簿名称：去除首尾空白，内部空格和斜杠替换为下划线
///
/// 对已规范化的名称再次调用结果不变
pub fn normalize_group_name(name: &str) -> String {
    name.trim().replace(' ', "_").replace('/', "_")
}
