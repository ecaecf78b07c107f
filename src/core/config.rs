//! 配置管理模块
//!
//! 提供配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (config.toml)
//!
//! ```toml
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! log_file = "voksel.log"
//!
//! [shader]
//! vertex_path = "shaders/block.vert"
//! fragment_path = "shaders/block.frag"
//! info_log_limit = 1024
//! log_link_failures = true
//!
//! [mesh]
//! texcoord_mode = "bounds"   # 或 "zero"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};

/// 全局配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,

    /// 着色器配置
    #[serde(default)]
    pub shader: ShaderConfig,

    /// 网格构建配置
    #[serde(default)]
    pub mesh: MeshConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// 着色器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaderConfig {
    /// 顶点着色器源文件
    #[serde(default = "default_vertex_path")]
    pub vertex_path: String,

    /// 片段着色器源文件
    #[serde(default = "default_fragment_path")]
    pub fragment_path: String,

    /// 编译/链接日志的最大字节数
    #[serde(default = "default_info_log_limit")]
    pub info_log_limit: usize,

    /// 链接失败时是否输出链接日志
    #[serde(default = "default_log_link_failures")]
    pub log_link_failures: bool,
}

/// 网格构建配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshConfig {
    /// 平面四个角的纹理坐标生成方式
    #[serde(default)]
    pub texcoord_mode: TexCoordMode,
}

/// 平面纹理坐标生成方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TexCoordMode {
    /// 所有角的纹理坐标均为 (0, 0)，忽略 uv 参数
    Zero,
    /// 按 uv 边界 (u0, v0, u1, v1) 为四个角插值
    #[default]
    Bounds,
}

// 默认值函数
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "voksel.log".to_string() }
fn default_vertex_path() -> String { "shaders/block.vert".to_string() }
fn default_fragment_path() -> String { "shaders/block.frag".to_string() }
fn default_info_log_limit() -> usize { 1024 }
fn default_log_link_failures() -> bool { true }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            vertex_path: default_vertex_path(),
            fragment_path: default_fragment_path(),
            info_log_limit: default_info_log_limit(),
            log_link_failures: default_log_link_failures(),
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// ```no_run
    /// use voksel::core::Config;
    ///
    /// let config = Config::from_file("config.toml")?;
    /// # Ok::<(), voksel::core::VokselError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 文本解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在或无法解析则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--log-level <level>`: 设置日志级别
    /// - `--zero-uv`: 平面纹理坐标全部置零
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        if args.iter().any(|a| a == "--zero-uv") {
            self.mesh.texcoord_mode = TexCoordMode::Zero;
        }

        if let Some(idx) = args.iter().position(|a| a == "--log-level") {
            if let Some(level) = args.get(idx + 1).and_then(|s| LogLevel::parse(s)) {
                self.logging.level = level;
            }
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.shader.info_log_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "shader.info_log_limit".to_string(),
                reason: "Info log limit must be greater than 0".to_string(),
            }.into());
        }

        if self.shader.vertex_path.is_empty() || self.shader.fragment_path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "shader.vertex_path/fragment_path".to_string(),
                reason: "Shader paths must not be empty".to_string(),
            }.into());
        }

        Ok(())
    }
}

impl LogLevel {
    /// 从字符串解析日志级别（不区分大小写）
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.shader.info_log_limit, 1024);
        assert!(config.shader.log_link_failures);
        assert_eq!(config.mesh.texcoord_mode, TexCoordMode::Bounds);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.shader.info_log_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [mesh]
            texcoord_mode = "zero"
            "#,
        )
        .unwrap();

        assert_eq!(config.mesh.texcoord_mode, TexCoordMode::Zero);
        assert_eq!(config.shader.vertex_path, "shaders/block.vert");
        assert_eq!(config.logging.log_file, "voksel.log");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = Config::from_toml_str("[mesh]\ntexcoord_mode = \"sideways\"\n");
        assert!(matches!(
            result,
            Err(crate::core::VokselError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = Config::from_file_or_default("definitely/not/here.toml");
        assert_eq!(config.shader.info_log_limit, 1024);
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!("voksel-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.shader.info_log_limit = 256;
        config.mesh.texcoord_mode = TexCoordMode::Zero;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.shader.info_log_limit, 256);
        assert_eq!(loaded.mesh.texcoord_mode, TexCoordMode::Zero);
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        config.apply_args(["voksel", "--log-level", "DEBUG", "--zero-uv"]);

        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.mesh.texcoord_mode, TexCoordMode::Zero);
    }

    #[test]
    fn test_apply_args_ignores_bad_level() {
        let mut config = Config::default();
        config.apply_args(["voksel", "--log-level", "loud"]);
        assert_eq!(config.logging.level, LogLevel::Info);
    }
}
