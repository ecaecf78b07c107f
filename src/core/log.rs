//! 日志系统模块
//!
//! 基于 `tracing` 提供结构化的日志记录功能。
//!
//! 控制台输出写入标准错误流：着色器编译日志是本层唯一面向用户的诊断通道，
//! 不能与程序的标准输出混在一起。
//!
//! # 使用示例
//!
//! ```no_run
//! use voksel::core::{log, LogLevel};
//!
//! log::init_logger(LogLevel::Info, false, None).ok();
//! tracing::info!(width = 800, height = 600, "Window created");
//! ```

use std::path::Path;

use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use super::config::{LogLevel, LoggingConfig};
use super::error::{Result, VokselError};

/// 初始化日志系统
///
/// 只能成功调用一次；重复初始化返回 [`VokselError::Log`]。
///
/// # 参数
///
/// * `level` - 日志级别，`RUST_LOG` 存在时以环境变量为准
/// * `file_output` - 是否同时输出到文件
/// * `log_file_path` - 日志文件路径（可选，默认为 "voksel.log"）
pub fn init_logger(level: LogLevel, file_output: bool, log_file_path: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(Level::from(level)).into())
    });

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(true)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer);

    let result = if file_output {
        let log_path = log_file_path.unwrap_or("voksel.log");
        let path = Path::new(log_path);
        let directory = path.parent().unwrap_or(Path::new("."));
        let filename = path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("voksel.log");

        // 每天滚动
        let file_appender = RollingFileAppender::new(Rotation::DAILY, directory, filename);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(file_appender);

        registry.with(file_layer).try_init()
    } else {
        registry.try_init()
    };

    result.map_err(|e| VokselError::Log(e.to_string()))
}

/// 按配置初始化日志系统
pub fn init_from_config(config: &LoggingConfig) -> Result<()> {
    let log_file = config.file_output.then_some(config.log_file.as_str());
    init_logger(config.level, config.file_output, log_file)
}

/// 图形层日志 - Debug 级别
#[macro_export]
macro_rules! gfx_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "voksel::gfx", $($arg)*)
    };
}

/// 图形层日志 - Warn 级别
#[macro_export]
macro_rules! gfx_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "voksel::gfx", $($arg)*)
    };
}

/// 图形层日志 - Error 级别
#[macro_export]
macro_rules! gfx_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "voksel::gfx", $($arg)*)
    };
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
        assert_eq!(LevelFilter::from_level(Level::from(LogLevel::Debug)), LevelFilter::DEBUG);
    }

    #[test]
    fn test_second_init_is_reported() {
        // 第一次可能已被其他测试抢先初始化，两次调用中至少有一次失败
        let first = init_logger(LogLevel::Warn, false, None);
        let second = init_logger(LogLevel::Warn, false, None);
        assert!(first.is_err() || second.is_err());
        assert!(matches!(second, Err(VokselError::Log(_))));
    }
}
