//! Lox 词法分析器
//!
//! 把源代码转换为带位置信息的 Token 序列，供后续语法分析使用

pub mod config;
pub mod error;
pub mod i18n;
pub mod lexer;
pub mod source;

pub use error::{DriverError, DriverResult};
pub use lexer::{
    scan, scan_collect, Diagnostics, LexError, LexErrorKind, Literal, Reporter, Span, Token,
    TokenKind,
};
