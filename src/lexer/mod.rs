//! 词法分析模块
//!
//! 将源代码转换为 Token 流

pub mod token;
pub mod scanner;
pub mod diagnostics;
pub mod batch;

pub use token::{Literal, Span, Token, TokenKind};
pub use scanner::{scan, scan_collect};
pub use diagnostics::{Diagnostics, LexError, LexErrorKind, Reporter, SharedDiagnostics};
pub use batch::{exit_code, scan_file, scan_files, BatchOptions, FileScan, ScannedSource};
