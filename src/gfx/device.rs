//! 图形设备的统一抽象接口
//!
//! `ShaderProgram` 不直接调用全局的 OpenGL 函数，而是通过 [`GraphicsDevice`]
//! 访问当前的图形上下文。真实运行时由 [`GlowDevice`](super::GlowDevice) 实现，
//! 测试中可以替换为记录调用的假设备。
//!
//! 所有方法都必须在持有图形上下文的线程上调用。

use std::fmt;
use std::num::NonZeroU32;

/// 着色器阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// 顶点着色器
    Vertex,
    /// 片段着色器
    Fragment,
}

impl ShaderStage {
    /// 阶段名称，用于日志输出
    pub fn name(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "Vertex",
            ShaderStage::Fragment => "Fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 着色器对象句柄（驱动分配的非零名字）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub NonZeroU32);

/// 程序对象句柄（驱动分配的非零名字）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub NonZeroU32);

impl ShaderHandle {
    #[inline]
    pub fn raw(self) -> u32 {
        self.0.get()
    }
}

impl ProgramHandle {
    #[inline]
    pub fn raw(self) -> u32 {
        self.0.get()
    }
}

/// Uniform 变量位置
///
/// `-1` 是哨兵值，表示程序中不存在该名字。以哨兵位置上传数据是合法的空操作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub i32);

impl UniformLocation {
    /// "未找到" 哨兵
    pub const NOT_FOUND: UniformLocation = UniformLocation(-1);

    #[inline]
    pub fn is_found(self) -> bool {
        self.0 >= 0
    }
}

/// 图形设备能力
///
/// 方法一一对应 OpenGL 的对象管理与 uniform 上传调用。
/// 方法使用 `&self`：底层上下文本身就是隐式可变的全局状态。
pub trait GraphicsDevice {
    /// 创建一个着色器对象，驱动拒绝时返回 `None`
    fn create_shader(&self, stage: ShaderStage) -> Option<ShaderHandle>;

    /// 设置源码并编译，返回编译状态
    fn compile_shader(&self, shader: ShaderHandle, source: &str) -> bool;

    /// 着色器编译日志
    fn shader_info_log(&self, shader: ShaderHandle) -> String;

    fn delete_shader(&self, shader: ShaderHandle);

    /// 创建一个程序对象，驱动拒绝时返回 `None`
    fn create_program(&self) -> Option<ProgramHandle>;

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle);

    fn detach_shader(&self, program: ProgramHandle, shader: ShaderHandle);

    /// 链接程序，返回链接状态
    fn link_program(&self, program: ProgramHandle) -> bool;

    /// 程序链接日志
    fn program_info_log(&self, program: ProgramHandle) -> String;

    fn delete_program(&self, program: ProgramHandle);

    /// 绑定程序，`None` 解除绑定
    fn use_program(&self, program: Option<ProgramHandle>);

    /// 查询 uniform 位置，不存在时返回 [`UniformLocation::NOT_FOUND`]
    fn uniform_location(&self, program: ProgramHandle, name: &str) -> UniformLocation;

    fn uniform_1i(&self, location: UniformLocation, v: i32);

    fn uniform_1f(&self, location: UniformLocation, v: f32);

    fn uniform_2f(&self, location: UniformLocation, x: f32, y: f32);

    fn uniform_3f(&self, location: UniformLocation, x: f32, y: f32, z: f32);

    fn uniform_4f(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32);

    /// 上传 4x4 矩阵；`transpose` 为真时 `m` 按行主序排列
    fn uniform_matrix4(&self, location: UniformLocation, transpose: bool, m: &[f32; 16]);
}
