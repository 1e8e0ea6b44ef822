//! 消息键定义
//!
//! 各语言表通过这些键查找对应文本

// 词法错误
pub const ERR_LEX_UNEXPECTED_CHARACTER: &str = "err.lex.unexpected_character";
pub const ERR_LEX_UNTERMINATED_STRING: &str = "err.lex.unterminated_string";

// 诊断输出
pub const MSG_DIAGNOSTIC: &str = "msg.diagnostic";
pub const MSG_DIAGNOSTIC_IN_FILE: &str = "msg.diagnostic.in_file";
pub const MSG_ERROR_SUMMARY: &str = "msg.error_summary";

// CLI 消息
pub const MSG_CLI_USAGE: &str = "msg.cli.usage";
pub const MSG_CLI_VERSION: &str = "msg.cli.version";
pub const MSG_CLI_COMMANDS: &str = "msg.cli.commands";
pub const MSG_CLI_OPTIONS: &str = "msg.cli.options";
pub const MSG_CLI_FILE_NOT_FOUND: &str = "msg.cli.file_not_found";
pub const MSG_CLI_INVALID_EXTENSION: &str = "msg.cli.invalid_extension";
pub const MSG_CLI_CANNOT_READ_FILE: &str = "msg.cli.cannot_read_file";
pub const MSG_CLI_INVALID_JOBS: &str = "msg.cli.invalid_jobs";
pub const MSG_REPL_BANNER: &str = "msg.repl.banner";
pub const MSG_REPL_HINT: &str = "msg.repl.hint";
