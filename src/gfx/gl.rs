//! OpenGL 设备实现
//!
//! 使用 `glow` 包装一个已经创建并设为当前的 OpenGL 3.3 Core 上下文。
//! 上下文的创建（窗口、像素格式、函数加载）由外部应用负责。

use glow::HasContext;
use tracing::info;

use crate::gfx_warn;

use super::device::{
    GraphicsDevice, ProgramHandle, ShaderHandle, ShaderStage, UniformLocation,
};

/// 基于 glow 的图形设备
pub struct GlowDevice {
    gl: glow::Context,
}

impl GlowDevice {
    /// 包装一个现成的 glow 上下文
    pub fn new(gl: glow::Context) -> Self {
        // SAFETY: 调用方保证上下文在当前线程有效
        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        info!(version = %version, "OpenGL device created");
        Self { gl }
    }

    /// 通过函数加载器创建设备
    ///
    /// # Safety
    ///
    /// 调用时必须已经有一个当前的 OpenGL 上下文，`loader` 返回的指针必须属于该上下文。
    pub unsafe fn from_loader_function<F>(loader: F) -> Self
    where
        F: FnMut(&str) -> *const std::ffi::c_void,
    {
        Self::new(glow::Context::from_loader_function(loader))
    }

    /// 访问底层 glow 上下文，供外部上传顶点/索引缓冲使用
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    #[inline]
    fn native_shader(shader: ShaderHandle) -> glow::NativeShader {
        glow::NativeShader(shader.0)
    }

    #[inline]
    fn native_program(program: ProgramHandle) -> glow::NativeProgram {
        glow::NativeProgram(program.0)
    }

    /// 哨兵位置映射为 `None`，驱动对 `None` 的上传不做任何事
    #[inline]
    fn native_location(location: UniformLocation) -> Option<glow::NativeUniformLocation> {
        location
            .is_found()
            .then(|| glow::NativeUniformLocation(location.0 as u32))
    }
}

impl GraphicsDevice for GlowDevice {
    fn create_shader(&self, stage: ShaderStage) -> Option<ShaderHandle> {
        let kind = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        match unsafe { self.gl.create_shader(kind) } {
            Ok(shader) => Some(ShaderHandle(shader.0)),
            Err(e) => {
                gfx_warn!(stage = %stage, error = %e, "glCreateShader failed");
                None
            }
        }
    }

    fn compile_shader(&self, shader: ShaderHandle, source: &str) -> bool {
        let shader = Self::native_shader(shader);
        unsafe {
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);
            self.gl.get_shader_compile_status(shader)
        }
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        unsafe { self.gl.get_shader_info_log(Self::native_shader(shader)) }
    }

    fn delete_shader(&self, shader: ShaderHandle) {
        unsafe { self.gl.delete_shader(Self::native_shader(shader)) }
    }

    fn create_program(&self) -> Option<ProgramHandle> {
        match unsafe { self.gl.create_program() } {
            Ok(program) => Some(ProgramHandle(program.0)),
            Err(e) => {
                gfx_warn!(error = %e, "glCreateProgram failed");
                None
            }
        }
    }

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        unsafe {
            self.gl
                .attach_shader(Self::native_program(program), Self::native_shader(shader))
        }
    }

    fn detach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        unsafe {
            self.gl
                .detach_shader(Self::native_program(program), Self::native_shader(shader))
        }
    }

    fn link_program(&self, program: ProgramHandle) -> bool {
        let program = Self::native_program(program);
        unsafe {
            self.gl.link_program(program);
            self.gl.get_program_link_status(program)
        }
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        unsafe { self.gl.get_program_info_log(Self::native_program(program)) }
    }

    fn delete_program(&self, program: ProgramHandle) {
        unsafe { self.gl.delete_program(Self::native_program(program)) }
    }

    fn use_program(&self, program: Option<ProgramHandle>) {
        unsafe { self.gl.use_program(program.map(Self::native_program)) }
    }

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> UniformLocation {
        unsafe { self.gl.get_uniform_location(Self::native_program(program), name) }
            .map_or(UniformLocation::NOT_FOUND, |loc| UniformLocation(loc.0 as i32))
    }

    fn uniform_1i(&self, location: UniformLocation, v: i32) {
        let loc = Self::native_location(location);
        unsafe { self.gl.uniform_1_i32(loc.as_ref(), v) }
    }

    fn uniform_1f(&self, location: UniformLocation, v: f32) {
        let loc = Self::native_location(location);
        unsafe { self.gl.uniform_1_f32(loc.as_ref(), v) }
    }

    fn uniform_2f(&self, location: UniformLocation, x: f32, y: f32) {
        let loc = Self::native_location(location);
        unsafe { self.gl.uniform_2_f32(loc.as_ref(), x, y) }
    }

    fn uniform_3f(&self, location: UniformLocation, x: f32, y: f32, z: f32) {
        let loc = Self::native_location(location);
        unsafe { self.gl.uniform_3_f32(loc.as_ref(), x, y, z) }
    }

    fn uniform_4f(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32) {
        let loc = Self::native_location(location);
        unsafe { self.gl.uniform_4_f32(loc.as_ref(), x, y, z, w) }
    }

    fn uniform_matrix4(&self, location: UniformLocation, transpose: bool, m: &[f32; 16]) {
        // GLES 2 不支持 transpose = true，这里只面向桌面 Core Profile
        let loc = Self::native_location(location);
        unsafe { self.gl.uniform_matrix_4_f32_slice(loc.as_ref(), transpose, m) }
    }
}
