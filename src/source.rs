//! 源文件读取

use std::fs;
use std::io;
use std::path::Path;

use crate::config::SOURCE_EXTENSION;
use crate::error::{DriverError, DriverResult};

/// 检查文件扩展名
pub fn check_extension(path: &Path) -> DriverResult<()> {
    if path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
        Ok(())
    } else {
        Err(DriverError::InvalidExtension {
            path: path.display().to_string(),
            expected: SOURCE_EXTENSION,
        })
    }
}

/// 读取源文件内容
pub fn read_source(path: &Path) -> DriverResult<String> {
    check_extension(path)?;

    fs::read_to_string(path).map_err(|source| {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            _ => DriverError::Io { path, source },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_extension() {
        assert!(check_extension(Path::new("main.lox")).is_ok());
        assert!(check_extension(Path::new("dir/main.lox")).is_ok());
        assert!(matches!(
            check_extension(Path::new("main.q")),
            Err(DriverError::InvalidExtension { .. })
        ));
        assert!(check_extension(Path::new("lox")).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("loxscan-definitely-missing.lox");
        assert!(matches!(read_source(&path), Err(DriverError::NotFound { .. })));
    }

    #[test]
    fn test_read_source() {
        let path = std::env::temp_dir().join(format!("loxscan-read-{}.lox", std::process::id()));
        fs::write(&path, "print 1;").unwrap();
        assert_eq!(read_source(&path).unwrap(), "print 1;");
        fs::remove_file(&path).unwrap();
    }
}
