//! 错误处理模块
//!
//! 定义了渲染资源层使用的统一错误类型。
//!
//! 注意：着色器编译/链接失败不会通过 `Err` 传播，`ShaderProgram` 会退化为无效程序，
//! 并通过 [`GraphicsError`] 记录诊断信息供调用方查询。

use std::fmt;

use crate::gfx::ShaderStage;

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, VokselError>;

/// Voksel 的错误类型
#[derive(Debug)]
pub enum VokselError {
    /// 配置错误
    Config(ConfigError),

    /// 图形 API 错误
    Graphics(GraphicsError),

    /// 网格数据错误
    Mesh(MeshError),

    /// IO 错误
    Io(std::io::Error),

    /// 日志系统错误
    Log(String),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 图形 API 相关的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// 驱动拒绝创建对象（着色器或程序）
    ResourceCreation(String),

    /// 着色器阶段编译失败，附带编译器输出（已按配置截断）
    ShaderCompilation { stage: ShaderStage, log: String },

    /// 程序链接失败，附带链接器输出
    ProgramLink(String),
}

/// 网格数据相关的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// 索引数量不是 3 的倍数
    IncompleteTriangle { index_count: usize },

    /// 索引引用了不存在的顶点
    IndexOutOfRange { position: usize, index: u32, vertex_count: usize },
}

impl fmt::Display for VokselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VokselError::Config(e) => write!(f, "Configuration error: {}", e),
            VokselError::Graphics(e) => write!(f, "Graphics error: {}", e),
            VokselError::Mesh(e) => write!(f, "Mesh error: {}", e),
            VokselError::Io(e) => write!(f, "IO error: {}", e),
            VokselError::Log(msg) => write!(f, "Log error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::ResourceCreation(msg) => write!(f, "Resource creation failed: {}", msg),
            GraphicsError::ShaderCompilation { stage, log } => {
                write!(f, "{} shader compilation failed: {}", stage.name(), log)
            }
            GraphicsError::ProgramLink(log) => write!(f, "Program link failed: {}", log),
        }
    }
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::IncompleteTriangle { index_count } => {
                write!(f, "Index count {} is not a multiple of 3", index_count)
            }
            MeshError::IndexOutOfRange { position, index, vertex_count } => write!(
                f,
                "Index {} at position {} is out of range (vertex count {})",
                index, position, vertex_count
            ),
        }
    }
}

impl std::error::Error for VokselError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VokselError::Io(e) => Some(e),
            VokselError::Config(e) => Some(e),
            VokselError::Graphics(e) => Some(e),
            VokselError::Mesh(e) => Some(e),
            VokselError::Log(_) => None,
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for GraphicsError {}
impl std::error::Error for MeshError {}

impl From<std::io::Error> for VokselError {
    fn from(err: std::io::Error) -> Self {
        VokselError::Io(err)
    }
}

impl From<ConfigError> for VokselError {
    fn from(err: ConfigError) -> Self {
        VokselError::Config(err)
    }
}

impl From<GraphicsError> for VokselError {
    fn from(err: GraphicsError) -> Self {
        VokselError::Graphics(err)
    }
}

impl From<MeshError> for VokselError {
    fn from(err: MeshError) -> Self {
        VokselError::Mesh(err)
    }
}
