use thiserror::Error;

/// 应用程序错误类型
///
/// 管线在产生任何输出文件之前触发的错误都会直接中止本次运行，
/// 不会留下部分写入的状态
#[derive(Debug, Error)]
pub enum AppError {
    /// 上传目录中没有匹配的输入文件
    #[error("在 {dir} 目录中没有找到匹配 {pattern} 的文件")]
    MissingInput { dir: String, pattern: String },

    /// 文件名中内嵌的日期无法解析
    #[error("无法解析文件名中的日期 ({file}): {reason}")]
    MalformedDate { file: String, reason: String },

    /// JSON 结构不符合预期（既不是含 Acls 数组的对象，也不是顶层数组）
    #[error("JSON 结构不符合预期: {reason}")]
    UnexpectedJsonStructure { reason: String },

    /// CSV 缺少必需的列
    #[error("CSV 缺少必需的列: {column}")]
    MissingColumn { column: String },
}
