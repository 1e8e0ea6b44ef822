//! 多文件并发扫描
//!
//! 每个文件一次独立扫描，扫描状态互不共享，因此可以放到工作线程上并行执行

use std::path::{Path, PathBuf};

use crossbeam_channel::{bounded, unbounded};

use super::diagnostics::Diagnostics;
use super::scanner::scan_collect;
use super::token::Token;
use crate::config::{BATCH_QUEUE_CAPACITY, EXIT_DATA_ERR};
use crate::error::DriverResult;
use crate::i18n::{format_message, messages, Locale};
use crate::source::read_source;

/// 批量扫描选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// 工作线程数
    pub jobs: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { jobs: num_cpus::get() }
    }
}

impl BatchOptions {
    /// 指定线程数，0 视为 1
    pub fn with_jobs(jobs: usize) -> Self {
        Self { jobs: jobs.max(1) }
    }
}

/// 单个文件的扫描结果
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedSource {
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

/// 单个文件的批量扫描结果
#[derive(Debug)]
pub struct FileScan {
    pub path: PathBuf,
    pub result: DriverResult<ScannedSource>,
}

impl FileScan {
    /// 是否存在词法错误
    pub fn has_lex_errors(&self) -> bool {
        matches!(&self.result, Ok(scanned) if scanned.diagnostics.has_errors())
    }

    /// 多文件输出时 token 列表前的标题行
    pub fn header(&self) -> String {
        format!("==> {} <==", self.path.display())
    }

    /// 词法错误汇总，没有错误时返回 None
    pub fn error_summary(&self, locale: Locale) -> Option<String> {
        let scanned = self.result.as_ref().ok()?;
        if !scanned.diagnostics.has_errors() {
            return None;
        }
        let count = scanned.diagnostics.len().to_string();
        let path = self.path.display().to_string();
        Some(format_message(
            messages::MSG_ERROR_SUMMARY,
            locale,
            &[count.as_str(), path.as_str()],
        ))
    }
}

/// 根据扫描结果决定退出码
///
/// 第一个读取失败的文件决定退出码；否则有词法错误时为 65，全部正常为 0。
pub fn exit_code(results: &[FileScan]) -> i32 {
    let driver_error = results.iter().find_map(|scan| scan.result.as_ref().err());
    match driver_error {
        Some(e) => e.exit_code(),
        None if results.iter().any(FileScan::has_lex_errors) => EXIT_DATA_ERR,
        None => 0,
    }
}

/// 读取并扫描单个文件
pub fn scan_file(path: &Path) -> FileScan {
    let result = read_source(path).map(|source| {
        let (tokens, diagnostics) = scan_collect(&source);
        ScannedSource { tokens, diagnostics }
    });
    FileScan {
        path: path.to_path_buf(),
        result,
    }
}

/// 并发扫描多个文件，结果按输入顺序返回
pub fn scan_files(paths: &[PathBuf], options: &BatchOptions) -> Vec<FileScan> {
    if paths.is_empty() {
        return Vec::new();
    }

    let workers = options.jobs.clamp(1, paths.len());
    if workers == 1 {
        return paths.iter().map(|path| scan_file(path)).collect();
    }

    let (job_tx, job_rx) = bounded::<(usize, &Path)>(BATCH_QUEUE_CAPACITY);
    let (result_tx, result_rx) = unbounded::<(usize, FileScan)>();

    crossbeam::thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move |_| {
                for (index, path) in job_rx.iter() {
                    if result_tx.send((index, scan_file(path))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(job_rx);
        drop(result_tx);

        for (index, path) in paths.iter().enumerate() {
            if job_tx.send((index, path.as_path())).is_err() {
                break;
            }
        }
        // 关闭任务队列，工作线程取完剩余任务后退出
        drop(job_tx);
    })
    .unwrap_or_else(|payload| std::panic::resume_unwind(payload));

    let mut results: Vec<(usize, FileScan)> = result_rx.try_iter().collect();
    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, scan)| scan).collect()
}
