//! 日本語メッセージ

use super::messages::*;

/// 日本語メッセージを取得
pub fn get(key: &str) -> &'static str {
    match key {
        // 字句エラー
        ERR_LEX_UNEXPECTED_CHARACTER => "予期しない文字です。",
        ERR_LEX_UNTERMINATED_STRING => "文字列が閉じられていません。",

        // 診断
        MSG_DIAGNOSTIC => "[{} 行目] エラー: {}",
        MSG_DIAGNOSTIC_IN_FILE => "{}: [{} 行目] エラー: {}",
        MSG_ERROR_SUMMARY => "{} 件の字句エラー ({})",

        // CLI メッセージ
        MSG_CLI_USAGE => "使用法: {} [--lang <en|zh|ja>] [--jobs <n>] <コマンド> [ファイル...]",
        MSG_CLI_VERSION => "{} スキャナー バージョン {}",
        MSG_CLI_COMMANDS => "コマンド:\n  tokenize <ファイル>...  各ソースファイルのトークンを表示\n  repl                    対話的にスキャン\n  help                    このヘルプメッセージを表示\n  version                 バージョン情報を表示",
        MSG_CLI_OPTIONS => "オプション:\n  --lang <en|zh|ja>   メッセージの言語 (デフォルト: en)\n  --jobs <n>          ワーカースレッド数 (デフォルト: CPU コア数)",
        MSG_CLI_FILE_NOT_FOUND => "ファイルが見つかりません: {}",
        MSG_CLI_INVALID_EXTENSION => "無効なファイル拡張子: '{}'。'.{}' ファイルを使用してください",
        MSG_CLI_CANNOT_READ_FILE => "ファイル {} を読み込めません: {}",
        MSG_CLI_INVALID_JOBS => "無効なスレッド数: '{}'",
        MSG_REPL_BANNER => "{} {} スキャナー REPL",
        MSG_REPL_HINT => "'exit' で終了します。",

        // 未知のメッセージキー
        _ => "未知のメッセージキー",
    }
}
