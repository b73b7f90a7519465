//! 日志初始化
//!
//! 终端被 TUI 占用，日志写到 `<cache_dir>/docui/docui.log`。
//! 代码里统一使用 `log` 宏，由 tracing-subscriber 桥接输出。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// 日志过滤环境变量，优先于配置文件
pub const LOG_ENV: &str = "DOCUI_LOG";

/// 获取日志文件路径
pub fn log_file_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docui")
        .join("docui.log")
}

/// 初始化日志，返回日志文件路径
pub fn init_logging(default_level: &str) -> Result<PathBuf> {
    let path = log_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    Ok(path)
}
