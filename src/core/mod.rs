//! 核心功能模块
//!
//! 提供日志系统、配置管理和错误处理，这些模块不依赖具体的图形 API。
//!
//! # 模块组织
//!
//! - `log`：日志系统，基于 `tracing`
//! - `config`：配置管理，从 `config.toml` 加载
//! - `error`：错误处理，定义统一的错误类型

pub mod log;
pub mod config;
pub mod error;

pub use config::{Config, LogLevel, LoggingConfig, MeshConfig, ShaderConfig, TexCoordMode};
pub use error::{ConfigError, GraphicsError, MeshError, Result, VokselError};
