//! 中文消息

use super::messages::*;

/// 获取中文消息
pub fn get(key: &str) -> &'static str {
    match key {
        // 词法错误
        ERR_LEX_UNEXPECTED_CHARACTER => "意外的字符。",
        ERR_LEX_UNTERMINATED_STRING => "未闭合的字符串。",

        // 诊断
        MSG_DIAGNOSTIC => "[第 {} 行] 错误: {}",
        MSG_DIAGNOSTIC_IN_FILE => "{}: [第 {} 行] 错误: {}",
        MSG_ERROR_SUMMARY => "{} 个词法错误，位于 {}",

        // CLI 消息
        MSG_CLI_USAGE => "用法: {} [--lang <en|zh|ja>] [--jobs <n>] <命令> [文件...]",
        MSG_CLI_VERSION => "{} 扫描器版本 {}",
        MSG_CLI_COMMANDS => "命令:\n  tokenize <文件>...  输出每个源文件的 token\n  repl                交互式扫描\n  help                显示帮助信息\n  version             显示版本信息",
        MSG_CLI_OPTIONS => "选项:\n  --lang <en|zh|ja>   设置消息语言（默认: en）\n  --jobs <n>          工作线程数（默认: CPU 核心数）",
        MSG_CLI_FILE_NOT_FOUND => "文件未找到: {}",
        MSG_CLI_INVALID_EXTENSION => "无效的文件扩展名: '{}'，需要 '.{}' 文件",
        MSG_CLI_CANNOT_READ_FILE => "无法读取文件 {}: {}",
        MSG_CLI_INVALID_JOBS => "无效的线程数: '{}'",
        MSG_REPL_BANNER => "{} {} 扫描器 REPL",
        MSG_REPL_HINT => "输入 'exit' 退出。",

        // 未知消息键
        _ => "未知消息键",
    }
}
