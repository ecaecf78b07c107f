//! Voksel - 体素渲染资源层
//!
//! 把着色器源码变成带 uniform 缓存的 GPU 程序，把轴对齐平面（方块面）变成
//! 可上传的顶点/索引数组。窗口、事件循环和上下文创建由外部应用负责。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（日志、配置、错误处理）
//! - `math`: 数学类型别名
//! - `gfx`: 图形设备抽象与 OpenGL 实现
//! - `renderer`: 着色器程序
//! - `geometry`: 顶点定义与网格构建
//!
//! # 使用示例
//!
//! ```ignore
//! use std::rc::Rc;
//! use voksel::gfx::{GlowDevice, GraphicsDevice};
//! use voksel::renderer::ShaderProgram;
//!
//! // `gl` 由外部窗口库创建
//! let device: Rc<dyn GraphicsDevice> = Rc::new(GlowDevice::new(gl));
//! let mut shader = ShaderProgram::new(device, VERT_SRC, FRAG_SRC);
//! if shader.is_valid() {
//!     shader.bind();
//!     shader.set_float("u_ambient", 0.2);
//! }
//! ```

pub mod core;
pub mod math;
pub mod gfx;
pub mod renderer;
pub mod geometry;
