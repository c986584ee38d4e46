//! # ESA Address Book
//!
//! 把云端导出的回源 IP 地址簿（CSV 或 JSON）转换成纯文本 IP/域名列表，
//! 生成静态 HTML 导航页，并把消费过的输入文件归档
//!
//! ## 架构设计
//!
//! 管线分为四个严格顺序的阶段：
//!
//! ### ① 定位（Locate）
//! - `services/source_locator` - 从上传目录挑出唯一的最新输入文件
//! - CSV 按文件名内嵌日期取最大，JSON 按修改时间取最新
//!
//! ### ② 解析（Parse）
//! - `services/csv_parser` / `services/json_parser` - 解码成统一的记录类型
//! - `models/acl_export` - JSON 的两种顶层结构和两种地址字段形态在解码边界归一
//!
//! ### ③ 落盘（Materialize）
//! - `services/materializer` - 每个地址簿一个 txt、ESA 专用文件、全量重建的索引页
//!
//! ### ④ 归档（Archive）
//! - `services/archiver` - CSV 保留原名，JSON 按日期加序号命名避免同日覆盖
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::{App, RunMode};
pub use config::Config;
pub use error::AppError;
pub use models::{normalize_group_name, AddressBookRecord, ESA_MARKER};
