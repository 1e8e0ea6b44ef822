//! English messages

use super::messages::*;

/// Get English message
pub fn get(key: &str) -> &'static str {
    match key {
        // Lexical errors
        ERR_LEX_UNEXPECTED_CHARACTER => "Unexpected character.",
        ERR_LEX_UNTERMINATED_STRING => "Unterminated string.",

        // Diagnostics
        MSG_DIAGNOSTIC => "[line {}] Error: {}",
        MSG_DIAGNOSTIC_IN_FILE => "{}: [line {}] Error: {}",
        MSG_ERROR_SUMMARY => "{} lexical error(s) in {}",

        // CLI messages
        MSG_CLI_USAGE => "Usage: {} [--lang <en|zh|ja>] [--jobs <n>] <command> [files...]",
        MSG_CLI_VERSION => "{} scanner version {}",
        MSG_CLI_COMMANDS => "Commands:\n  tokenize <file>...  Print the tokens of each source file\n  repl                Scan lines interactively\n  help                Show this help message\n  version             Show version information",
        MSG_CLI_OPTIONS => "Options:\n  --lang <en|zh|ja>   Set message language (default: en)\n  --jobs <n>          Number of worker threads (default: CPU count)",
        MSG_CLI_FILE_NOT_FOUND => "File not found: {}",
        MSG_CLI_INVALID_EXTENSION => "Invalid file extension: '{}'. Expected '.{}' file",
        MSG_CLI_CANNOT_READ_FILE => "Cannot read file {}: {}",
        MSG_CLI_INVALID_JOBS => "Invalid job count: '{}'",
        MSG_REPL_BANNER => "{} {} scanner REPL",
        MSG_REPL_HINT => "Type 'exit' to quit.",

        // Unknown message key
        _ => "Unknown message key",
    }
}
