//! 渲染资源模块
//!
//! - `shader`：着色器程序的编译、链接与 uniform 缓存

pub mod shader;

pub use shader::ShaderProgram;
