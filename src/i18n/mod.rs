//! 国际化模块
//!
//! 提供多语言消息支持，目前支持英文、中文和日文

pub mod messages;
pub mod en;
pub mod zh;
pub mod ja;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 英文（默认）
    #[default]
    En,
    /// 中文
    Zh,
    /// 日文
    Ja,
}

impl Locale {
    /// 从命令行参数解析语言，未知值回退到英文
    pub fn parse(name: &str) -> Self {
        match name {
            "zh" | "cn" | "chinese" => Locale::Zh,
            "ja" | "jp" | "japanese" => Locale::Ja,
            _ => Locale::En,
        }
    }
}

/// 获取指定语言的消息
pub fn get_message(key: &str, locale: Locale) -> &'static str {
    match locale {
        Locale::En => en::get(key),
        Locale::Zh => zh::get(key),
        Locale::Ja => ja::get(key),
    }
}

/// 获取带参数的消息（使用 {} 占位符）
pub fn format_message(key: &str, locale: Locale, args: &[&str]) -> String {
    let mut msg = get_message(key, locale).to_string();
    let mut from = 0;
    for arg in args {
        match msg[from..].find("{}") {
            Some(offset) => {
                let pos = from + offset;
                msg.replace_range(pos..pos + 2, arg);
                // 参数内容不参与后续占位符查找
                from = pos + arg.len();
            }
            None => break,
        }
    }
    msg
}
