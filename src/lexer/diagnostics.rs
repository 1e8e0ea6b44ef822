//! 词法错误与错误收集器
//!
//! 扫描器不会因错误中止，而是把每个错误交给调用方提供的 `Reporter`

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::i18n::{format_message, get_message, messages, Locale};

/// 词法错误种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// 无法匹配任何词法规则的字符
    UnexpectedCharacter(char),
    /// 输入结束前未找到闭合引号
    UnterminatedString,
}

impl LexErrorKind {
    fn message_key(self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedCharacter(_) => messages::ERR_LEX_UNEXPECTED_CHARACTER,
            LexErrorKind::UnterminatedString => messages::ERR_LEX_UNTERMINATED_STRING,
        }
    }
}

/// 词法错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// 错误种类
    pub kind: LexErrorKind,
    /// 出错结构开始的行号（从1开始）
    pub line: usize,
}

impl LexError {
    /// 创建新的词法错误
    pub fn new(kind: LexErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// 错误消息文本（不含行号）
    pub fn message(&self, locale: Locale) -> &'static str {
        get_message(self.kind.message_key(), locale)
    }

    /// 渲染为 `[line N] Error: ...`
    pub fn render(&self, locale: Locale) -> String {
        let line = self.line.to_string();
        format_message(messages::MSG_DIAGNOSTIC, locale, &[line.as_str(), self.message(locale)])
    }

    /// 带文件路径的渲染
    pub fn render_in_file(&self, path: &str, locale: Locale) -> String {
        let line = self.line.to_string();
        format_message(
            messages::MSG_DIAGNOSTIC_IN_FILE,
            locale,
            &[path, line.as_str(), self.message(locale)],
        )
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::En))
    }
}

impl std::error::Error for LexError {}

/// 错误上报接口
pub trait Reporter {
    /// 上报一个词法错误，不得中止扫描
    fn report(&mut self, error: LexError);
}

impl Reporter for Vec<LexError> {
    fn report(&mut self, error: LexError) {
        self.push(error);
    }
}

/// 单次扫描的错误收集器
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<LexError>,
}

impl Diagnostics {
    /// 创建空的收集器
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 错误数量
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// 按上报顺序遍历错误
    pub fn iter(&self) -> std::slice::Iter<'_, LexError> {
        self.errors.iter()
    }

    /// 全部错误
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

}

impl Reporter for Diagnostics {
    fn report(&mut self, error: LexError) {
        self.errors.push(error);
    }
}

impl IntoIterator for Diagnostics {
    type Item = LexError;
    type IntoIter = std::vec::IntoIter<LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a LexError;
    type IntoIter = std::slice::Iter<'a, LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// 线程安全的错误收集器，可克隆后交给多个扫描线程
#[derive(Debug, Clone, Default)]
pub struct SharedDiagnostics {
    errors: Arc<Mutex<Vec<LexError>>>,
}

impl SharedDiagnostics {
    /// 创建空的共享收集器
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        !self.errors.lock().is_empty()
    }

    /// 错误数量
    pub fn len(&self) -> usize {
        self.errors.lock().len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.errors.lock().is_empty()
    }

    /// 复制当前收集到的全部错误
    pub fn snapshot(&self) -> Vec<LexError> {
        self.errors.lock().clone()
    }
}

impl Reporter for SharedDiagnostics {
    fn report(&mut self, error: LexError) {
        self.errors.lock().push(error);
    }
}
