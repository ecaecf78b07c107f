//! 着色器程序
//!
//! 把顶点/片段两段 GLSL 源码编译、链接成一个程序对象，并缓存 uniform 位置。
//!
//! # 失败策略
//!
//! 编译或链接失败不会返回错误，也不会 panic：程序退化为无效状态，
//! 诊断信息写入日志（标准错误流）并保存在 [`ShaderProgram::failure`] 中。
//! 调用方在使用前应检查 [`ShaderProgram::is_valid`]。无效程序上的 uniform
//! 设置全部是空操作。
//!
//! # 资源释放
//!
//! 中间的着色器对象由 `StageGuard` 持有，无论成功还是失败都会在作用域结束时删除；
//! 程序对象由 `ProgramGuard` 持有，只有链接成功后才解除守卫并转交给 `ShaderProgram`，
//! 最终在 `Drop` 中释放一次。

use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use crate::core::config::ShaderConfig;
use crate::core::error::{GraphicsError, Result};
use crate::gfx::{GraphicsDevice, ProgramHandle, ShaderHandle, ShaderStage, UniformLocation};
use crate::math::{self, Matrix4, Vector2, Vector3, Vector4};
use crate::{gfx_debug, gfx_error};

/// 链接完成的着色器程序
pub struct ShaderProgram {
    device: Rc<dyn GraphicsDevice>,
    program: Option<ProgramHandle>,
    uniforms: HashMap<String, UniformLocation>,
    failure: Option<GraphicsError>,
}

/// 着色器对象守卫，离开作用域时删除
struct StageGuard<'a> {
    device: &'a dyn GraphicsDevice,
    stage: ShaderStage,
    handle: ShaderHandle,
}

impl Drop for StageGuard<'_> {
    fn drop(&mut self) {
        self.device.delete_shader(self.handle);
    }
}

/// 程序对象守卫，未解除时离开作用域会删除程序
struct ProgramGuard<'a> {
    device: &'a dyn GraphicsDevice,
    handle: ProgramHandle,
    armed: bool,
}

impl<'a> ProgramGuard<'a> {
    fn create(device: &'a dyn GraphicsDevice) -> std::result::Result<Self, GraphicsError> {
        let handle = device.create_program().ok_or_else(|| {
            GraphicsError::ResourceCreation("driver returned no program object".to_string())
        })?;
        Ok(Self { device, handle, armed: true })
    }

    /// 解除守卫，把程序所有权交给调用方
    fn disarm(mut self) -> ProgramHandle {
        self.armed = false;
        self.handle
    }
}

impl Drop for ProgramGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.device.delete_program(self.handle);
        }
    }
}

impl ShaderProgram {
    /// 使用默认配置编译并链接程序
    ///
    /// ```ignore
    /// let device: Rc<dyn GraphicsDevice> = Rc::new(GlowDevice::new(gl));
    /// let mut shader = ShaderProgram::new(device, VERT_SRC, FRAG_SRC);
    /// if shader.is_valid() {
    ///     shader.bind();
    ///     shader.set_float("u_time", 0.5);
    /// }
    /// ```
    pub fn new(device: Rc<dyn GraphicsDevice>, vertex_source: &str, fragment_source: &str) -> Self {
        Self::with_config(device, vertex_source, fragment_source, &ShaderConfig::default())
    }

    /// 按配置编译并链接程序
    pub fn with_config(
        device: Rc<dyn GraphicsDevice>,
        vertex_source: &str,
        fragment_source: &str,
        config: &ShaderConfig,
    ) -> Self {
        let (program, failure) =
            match Self::build(device.as_ref(), vertex_source, fragment_source, config) {
                Ok(handle) => {
                    gfx_debug!(program = handle.raw(), "Shader program linked");
                    (Some(handle), None)
                }
                Err(e) => (None, Some(e)),
            };

        Self {
            device,
            program,
            uniforms: HashMap::new(),
            failure,
        }
    }

    /// 从配置中的文件路径读取源码并构建
    ///
    /// 读取文件失败返回 `Err`；编译/链接失败仍然得到一个无效程序。
    pub fn from_files(device: Rc<dyn GraphicsDevice>, config: &ShaderConfig) -> Result<Self> {
        let vertex_source = read_source(&config.vertex_path)?;
        let fragment_source = read_source(&config.fragment_path)?;
        Ok(Self::with_config(device, &vertex_source, &fragment_source, config))
    }

    fn build(
        device: &dyn GraphicsDevice,
        vertex_source: &str,
        fragment_source: &str,
        config: &ShaderConfig,
    ) -> std::result::Result<ProgramHandle, GraphicsError> {
        // 两个阶段都先编译，这样两份编译日志都能输出
        let vertex = compile_stage(device, ShaderStage::Vertex, vertex_source, config.info_log_limit);
        let fragment =
            compile_stage(device, ShaderStage::Fragment, fragment_source, config.info_log_limit);
        let (vertex, fragment) = (vertex?, fragment?);

        let program = ProgramGuard::create(device)?;
        device.attach_shader(program.handle, vertex.handle);
        device.attach_shader(program.handle, fragment.handle);

        if !device.link_program(program.handle) {
            let log = truncate_log(device.program_info_log(program.handle), config.info_log_limit);
            if config.log_link_failures {
                gfx_error!(program = program.handle.raw(), "Program link failed:\n{}", log);
            }
            return Err(GraphicsError::ProgramLink(log));
        }

        device.detach_shader(program.handle, vertex.handle);
        device.detach_shader(program.handle, fragment.handle);

        Ok(program.disarm())
    }

    /// 程序是否链接成功
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.program.is_some()
    }

    /// 程序对象句柄，无效程序返回 `None`
    #[inline]
    pub fn handle(&self) -> Option<ProgramHandle> {
        self.program
    }

    /// 构建失败的原因
    pub fn failure(&self) -> Option<&GraphicsError> {
        self.failure.as_ref()
    }

    /// 绑定为当前程序；无效程序不做任何事
    pub fn bind(&self) {
        if let Some(program) = self.program {
            self.device.use_program(Some(program));
        }
    }

    /// 解除当前程序绑定
    pub fn unbind(&self) {
        self.device.use_program(None);
    }

    /// 已缓存的 uniform 名字数量（包含未找到的名字）
    pub fn cached_uniform_count(&self) -> usize {
        self.uniforms.len()
    }

    /// 查询 uniform 位置
    ///
    /// 每个名字只向设备查询一次，结果（包括 "未找到" 哨兵）都会进入缓存，
    /// 之后的查询直接返回缓存值。
    pub fn uniform_location(&mut self, name: &str) -> UniformLocation {
        if let Some(&location) = self.uniforms.get(name) {
            return location;
        }

        let device = &self.device;
        let program = self.program;

        *self.uniforms.entry(name.to_owned()).or_insert_with(|| {
            let Some(program) = program else {
                return UniformLocation::NOT_FOUND;
            };
            let location = device.uniform_location(program, name);
            if !location.is_found() {
                gfx_debug!(program = program.raw(), uniform = name, "Uniform not found in program");
            }
            location
        })
    }

    pub fn set_int(&mut self, name: &str, v: i32) {
        let location = self.uniform_location(name);
        self.device.uniform_1i(location, v);
    }

    pub fn set_float(&mut self, name: &str, v: f32) {
        let location = self.uniform_location(name);
        self.device.uniform_1f(location, v);
    }

    pub fn set_vector2(&mut self, name: &str, v: Vector2) {
        let location = self.uniform_location(name);
        self.device.uniform_2f(location, v.x, v.y);
    }

    pub fn set_vector3(&mut self, name: &str, v: Vector3) {
        let location = self.uniform_location(name);
        self.device.uniform_3f(location, v.x, v.y, v.z);
    }

    pub fn set_vector4(&mut self, name: &str, v: Vector4) {
        let location = self.uniform_location(name);
        self.device.uniform_4f(location, v.x, v.y, v.z, v.w);
    }

    /// 上传 4x4 矩阵
    ///
    /// 数据按行主序发送并要求驱动转置（OpenGL 以列主序解释矩阵）。
    pub fn set_matrix4(&mut self, name: &str, m: &Matrix4) {
        let location = self.uniform_location(name);
        self.device.uniform_matrix4(location, true, &math::to_row_major(m));
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        if let Some(program) = self.program.take() {
            self.device.delete_program(program);
        }
    }
}

impl std::fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("program", &self.program)
            .field("uniforms", &self.uniforms)
            .field("failure", &self.failure)
            .finish()
    }
}

/// 编译单个阶段，失败时输出日志并删除着色器对象
fn compile_stage<'a>(
    device: &'a dyn GraphicsDevice,
    stage: ShaderStage,
    source: &str,
    log_limit: usize,
) -> std::result::Result<StageGuard<'a>, GraphicsError> {
    let handle = device.create_shader(stage).ok_or_else(|| {
        GraphicsError::ResourceCreation(format!("driver returned no {} shader object", stage))
    })?;
    let guard = StageGuard { device, stage, handle };

    if !device.compile_shader(guard.handle, source) {
        let log = truncate_log(device.shader_info_log(guard.handle), log_limit);
        gfx_error!(stage = %guard.stage, "Shader compilation failed:\n{}", log);
        return Err(GraphicsError::ShaderCompilation { stage, log });
    }

    Ok(guard)
}

fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        gfx_error!(path = %path.display(), error = %e, "Failed to read shader source");
        e.into()
    })
}

/// 截断驱动日志到 `limit` 字节以内（保持 UTF-8 边界），空日志替换为占位文本
fn truncate_log(log: String, limit: usize) -> String {
    let mut log = log.trim_end().to_string();
    if log.len() > limit {
        let mut end = limit;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    if log.is_empty() {
        return "(driver returned an empty info log)".to_string();
    }
    log
}
