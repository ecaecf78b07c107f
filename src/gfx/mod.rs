//! 图形设备模块
//!
//! 把图形上下文建模为显式传入的能力（[`GraphicsDevice`]），而不是隐式的全局状态。
//!
//! - `device`：设备接口、对象句柄、uniform 位置
//! - `gl`：基于 `glow` 的 OpenGL 实现

pub mod device;
#[cfg(not(target_arch = "wasm32"))]
pub mod gl;

#[cfg(test)]
pub(crate) mod recording;

pub use device::{GraphicsDevice, ProgramHandle, ShaderHandle, ShaderStage, UniformLocation};
#[cfg(not(target_arch = "wasm32"))]
pub use gl::GlowDevice;
