//! Lox 词法分析器
//!
//! 命令行入口点

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use loxscan::config::{EXIT_USAGE, LANG_NAME, SOURCE_EXTENSION, VERSION};
use loxscan::i18n::{format_message, get_message, messages, Locale};
use loxscan::lexer::{exit_code, scan_collect, scan_files, BatchOptions, FileScan, Token};

/// 扫描多个文件并输出 token，返回退出码
fn tokenize_files(files: &[&str], options: &BatchOptions, locale: Locale) -> i32 {
    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    let results = scan_files(&paths, options);
    let with_header = results.len() > 1;

    for scan in &results {
        report_file(scan, with_header, locale);
    }
    exit_code(&results)
}

/// 输出单个文件的 token 和错误
fn report_file(scan: &FileScan, with_header: bool, locale: Locale) {
    let scanned = match &scan.result {
        Ok(scanned) => scanned,
        Err(e) => {
            eprintln!("{}", e.localized(locale));
            return;
        }
    };

    let path = scan.path.display().to_string();
    for error in &scanned.diagnostics {
        if with_header {
            eprintln!("{}", error.render_in_file(&path, locale));
        } else {
            eprintln!("{}", error.render(locale));
        }
    }

    if with_header {
        println!("{}", scan.header());
    }
    print_tokens(&scanned.tokens);

    if let Some(summary) = scan.error_summary(locale) {
        eprintln!("{}", summary);
    }
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}

/// 去掉 read_line 留下的行尾，单行输入应结束在第 1 行
fn repl_source(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// REPL 交互模式，每一行独立扫描
fn repl(locale: Locale) {
    let banner = format_message(messages::MSG_REPL_BANNER, locale, &[LANG_NAME, VERSION]);
    println!("{}", banner);
    println!("{}\n", get_message(messages::MSG_REPL_HINT, locale));

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        let (tokens, diagnostics) = scan_collect(repl_source(&line));
        for error in &diagnostics {
            eprintln!("{}", error.render(locale));
        }
        print_tokens(&tokens);
    }
}

/// 打印帮助信息
fn print_help(locale: Locale) {
    let usage = format_message(messages::MSG_CLI_USAGE, locale, &[env!("CARGO_PKG_NAME")]);
    println!("{}", usage);
    println!();
    println!("{}", get_message(messages::MSG_CLI_COMMANDS, locale));
    println!();
    println!("{}", get_message(messages::MSG_CLI_OPTIONS, locale));
}

/// 打印版本信息
fn print_version(locale: Locale) {
    let msg = format_message(messages::MSG_CLI_VERSION, locale, &[LANG_NAME, VERSION]);
    println!("{}", msg);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // 默认设置
    let mut locale = Locale::En;
    let mut options = BatchOptions::default();

    // 解析全局选项
    let mut i = 1;
    while i + 1 < args.len() {
        match args[i].as_str() {
            "--lang" => {
                locale = Locale::parse(&args[i + 1]);
            }
            "--jobs" | "-j" => match args[i + 1].parse::<usize>() {
                Ok(jobs) if jobs > 0 => options = BatchOptions::with_jobs(jobs),
                _ => {
                    let msg = format_message(
                        messages::MSG_CLI_INVALID_JOBS,
                        locale,
                        &[args[i + 1].as_str()],
                    );
                    eprintln!("{}", msg);
                    process::exit(EXIT_USAGE);
                }
            },
            _ => break,
        }
        i += 2;
    }

    // 剩余参数
    let remaining: Vec<&str> = args[i..].iter().map(|s| s.as_str()).collect();
    let extension = format!(".{}", SOURCE_EXTENSION);

    match remaining.as_slice() {
        [] | ["repl"] => repl(locale),
        ["help"] | ["--help"] | ["-h"] => print_help(locale),
        ["version"] | ["--version"] | ["-v"] => print_version(locale),
        ["tokenize", files @ ..] if !files.is_empty() => {
            process::exit(tokenize_files(files, &options, locale));
        }
        [path] if path.ends_with(&extension) => {
            process::exit(tokenize_files(&[*path], &options, locale));
        }
        _ => {
            print_help(locale);
            process::exit(EXIT_USAGE);
        }
    }
}
