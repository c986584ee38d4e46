/// 程序配置
///
/// 所有目录和文件路径都在这里集中管理，默认值与线上部署的
/// 仓库布局一致；测试时可以整体指向临时目录
#[derive(Clone, Debug)]
pub struct Config {
    /// 上传（待处理）目录
    pub upload_dir: String,
    /// 输出根目录（index.html 所在位置）
    pub docs_dir: String,
    /// 各地址簿 txt 文件的输出目录
    pub address_books_dir: String,
    /// ESA 回源地址簿专用输出文件
    pub esa_latest_file: String,
    /// 归档目录
    pub archive_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_dir: "upload".to_string(),
            docs_dir: "docs".to_string(),
            address_books_dir: "docs/address_books".to_string(),
            esa_latest_file: "docs/esa_ip_list_latest.txt".to_string(),
            archive_dir: "Archive".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or(default.upload_dir),
            docs_dir: std::env::var("DOCS_DIR").unwrap_or(default.docs_dir),
            address_books_dir: std::env::var("ADDRESS_BOOKS_DIR").unwrap_or(default.address_books_dir),
            esa_latest_file: std::env::var("ESA_LATEST_FILE").unwrap_or(default.esa_latest_file),
            archive_dir: std::env::var("ARCHIVE_DIR").unwrap_or(default.archive_dir),
        }
    }

    /// 以 root 为根目录构造一套完整路径（测试用临时目录时使用）
    pub fn with_root(root: &std::path::Path) -> Self {
        Self {
            upload_dir: root.join("upload").to_string_lossy().into_owned(),
            docs_dir: root.join("docs").to_string_lossy().into_owned(),
            address_books_dir: root.join("docs/address_books").to_string_lossy().into_owned(),
            esa_latest_file: root.join("docs/esa_ip_list_latest.txt").to_string_lossy().into_owned(),
            archive_dir: root.join("Archive").to_string_lossy().into_owned(),
        }
    }
}
