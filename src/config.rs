//! 配置常量模块
//!
//! 所有可配置的语言相关常量都在这里定义，便于后期修改

/// 语言名称
pub const LANG_NAME: &str = "Lox";

/// 源码文件扩展名
pub const SOURCE_EXTENSION: &str = "lox";

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 命令行用法错误
pub const EXIT_USAGE: i32 = 64;

/// 输入数据错误（存在词法错误）
pub const EXIT_DATA_ERR: i32 = 65;

/// 文件读取失败
pub const EXIT_IO_ERR: i32 = 74;

/// 批量扫描任务队列容量
pub const BATCH_QUEUE_CAPACITY: usize = 256;
