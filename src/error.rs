//! 驱动层错误定义
//!
//! 词法错误不在这里：它们通过 `Reporter` 上报，不会中断扫描

use std::io;

use thiserror::Error;

use crate::config::{EXIT_IO_ERR, EXIT_USAGE};
use crate::i18n::{format_message, messages, Locale};

/// 读取源文件时可能出现的错误
#[derive(Debug, Error)]
pub enum DriverError {
    /// 文件扩展名不对
    #[error("invalid file extension: '{path}', expected '.{expected}'")]
    InvalidExtension { path: String, expected: &'static str },

    /// 文件不存在
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// 其他 I/O 错误
    #[error("cannot read file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl DriverError {
    /// 本地化的错误消息
    pub fn localized(&self, locale: Locale) -> String {
        match self {
            DriverError::InvalidExtension { path, expected } => {
                format_message(
                    messages::MSG_CLI_INVALID_EXTENSION,
                    locale,
                    &[path.as_str(), *expected],
                )
            }
            DriverError::NotFound { path } => {
                format_message(messages::MSG_CLI_FILE_NOT_FOUND, locale, &[path.as_str()])
            }
            DriverError::Io { path, source } => {
                let reason = source.to_string();
                format_message(
                    messages::MSG_CLI_CANNOT_READ_FILE,
                    locale,
                    &[path.as_str(), reason.as_str()],
                )
            }
        }
    }

    /// 对应的进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::InvalidExtension { .. } => EXIT_USAGE,
            DriverError::NotFound { .. } | DriverError::Io { .. } => EXIT_IO_ERR,
        }
    }
}

/// 驱动层结果类型
pub type DriverResult<T> = Result<T, DriverError>;
