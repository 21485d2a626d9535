//! 错误上报
//!
//! 设置文件缺失根节点或无法解析时，通过上报接口通知外部（例如弹窗），上报本身不能失败

use std::fmt;

/// 上报的错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 必需的 XML 元素缺失
    MissingXml,
    /// 文件无法读取或解析
    ParseFailed,
    /// 文件或程序不存在
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingXml => write!(f, "missing XML element"),
            ErrorKind::ParseFailed => write!(f, "could not parse file"),
            ErrorKind::NotFound => write!(f, "not found"),
        }
    }
}

/// 错误上报接口
pub trait ErrorReporter: Send + Sync {
    fn report(&self, kind: ErrorKind, context: &str);
}

/// 默认实现：写入日志
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, kind: ErrorKind, context: &str) {
        tracing::error!("{}: {}", kind, context);
    }
}
