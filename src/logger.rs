//! 日志初始化
//!
//! 终端界面占用标准输出，所有日志写入文件。

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::utils::logging::init_log_file;

/// 初始化全局日志订阅器
///
/// `RUST_LOG` 优先；否则 `verbose_logging` 决定 debug 还是 info。
pub fn init(config: &Config) -> Result<()> {
    init_log_file(&config.output_log_file)
        .with_context(|| format!("无法初始化日志文件: {}", config.output_log_file))?;

    let file = OpenOptions::new()
        .append(true)
        .open(&config.output_log_file)
        .with_context(|| format!("无法打开日志文件: {}", config.output_log_file))?;

    let default_level = if config.verbose_logging { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("日志初始化失败: {}", e))?;

    Ok(())
}
