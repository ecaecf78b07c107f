//! 测试用的记录设备
//!
//! 模拟驱动的对象分配与 uniform 查询，并记录每一次调用，
//! 用于验证缓存命中次数以及各条路径上的资源释放。

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::num::NonZeroU32;

use super::device::{
    GraphicsDevice, ProgramHandle, ShaderHandle, ShaderStage, UniformLocation,
};

/// 记录下来的设备调用
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    UniformLocation(String),
    Uniform1i(i32, i32),
    Uniform1f(i32, f32),
    Uniform2f(i32, [f32; 2]),
    Uniform3f(i32, [f32; 3]),
    Uniform4f(i32, [f32; 4]),
    UniformMatrix4(i32, bool, [f32; 16]),
}

#[derive(Default)]
pub struct RecordingDevice {
    next_name: Cell<u32>,
    calls: RefCell<Vec<Call>>,
    /// 源码包含此标记的着色器编译失败
    pub fail_marker: String,
    pub fail_link: bool,
    /// 模拟 glCreateProgram 返回 0
    pub fail_program_create: bool,
    pub compile_log: String,
    pub link_log: String,
    pub uniforms: HashMap<String, i32>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self {
            fail_marker: "#error".to_string(),
            compile_log: "0:1(1): error: syntax error, unexpected token".to_string(),
            link_log: "error: vertex output `v_color` not consumed".to_string(),
            ..Default::default()
        }
    }

    pub fn with_uniforms(mut self, uniforms: &[(&str, i32)]) -> Self {
        self.uniforms = uniforms.iter().map(|(n, l)| (n.to_string(), *l)).collect();
        self
    }

    pub fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub fn failing_program_create(mut self) -> Self {
        self.fail_program_create = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn location_queries(&self, name: &str) -> usize {
        self.count(|c| matches!(c, Call::UniformLocation(n) if n == name))
    }

    /// 已创建但尚未删除的着色器数量
    pub fn live_shaders(&self) -> usize {
        let created = self.count(|c| matches!(c, Call::CreateShader(..)));
        let deleted = self.count(|c| matches!(c, Call::DeleteShader(_)));
        created - deleted
    }

    /// 已创建但尚未删除的程序数量
    pub fn live_programs(&self) -> usize {
        let created = self.count(|c| matches!(c, Call::CreateProgram(_)));
        let deleted = self.count(|c| matches!(c, Call::DeleteProgram(_)));
        created - deleted
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self) -> NonZeroU32 {
        let name = self.next_name.get() + 1;
        self.next_name.set(name);
        NonZeroU32::new(name).unwrap()
    }
}

impl GraphicsDevice for RecordingDevice {
    fn create_shader(&self, stage: ShaderStage) -> Option<ShaderHandle> {
        let name = self.allocate();
        self.record(Call::CreateShader(stage, name.get()));
        Some(ShaderHandle(name))
    }

    fn compile_shader(&self, shader: ShaderHandle, source: &str) -> bool {
        self.record(Call::CompileShader(shader.raw()));
        !source.contains(&self.fail_marker)
    }

    fn shader_info_log(&self, _shader: ShaderHandle) -> String {
        self.compile_log.clone()
    }

    fn delete_shader(&self, shader: ShaderHandle) {
        self.record(Call::DeleteShader(shader.raw()));
    }

    fn create_program(&self) -> Option<ProgramHandle> {
        if self.fail_program_create {
            return None;
        }
        let name = self.allocate();
        self.record(Call::CreateProgram(name.get()));
        Some(ProgramHandle(name))
    }

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        self.record(Call::AttachShader(program.raw(), shader.raw()));
    }

    fn detach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        self.record(Call::DetachShader(program.raw(), shader.raw()));
    }

    fn link_program(&self, program: ProgramHandle) -> bool {
        self.record(Call::LinkProgram(program.raw()));
        !self.fail_link
    }

    fn program_info_log(&self, _program: ProgramHandle) -> String {
        self.link_log.clone()
    }

    fn delete_program(&self, program: ProgramHandle) {
        self.record(Call::DeleteProgram(program.raw()));
    }

    fn use_program(&self, program: Option<ProgramHandle>) {
        self.record(Call::UseProgram(program.map(ProgramHandle::raw)));
    }

    fn uniform_location(&self, _program: ProgramHandle, name: &str) -> UniformLocation {
        self.record(Call::UniformLocation(name.to_string()));
        self.uniforms
            .get(name)
            .map_or(UniformLocation::NOT_FOUND, |&loc| UniformLocation(loc))
    }

    fn uniform_1i(&self, location: UniformLocation, v: i32) {
        self.record(Call::Uniform1i(location.0, v));
    }

    fn uniform_1f(&self, location: UniformLocation, v: f32) {
        self.record(Call::Uniform1f(location.0, v));
    }

    fn uniform_2f(&self, location: UniformLocation, x: f32, y: f32) {
        self.record(Call::Uniform2f(location.0, [x, y]));
    }

    fn uniform_3f(&self, location: UniformLocation, x: f32, y: f32, z: f32) {
        self.record(Call::Uniform3f(location.0, [x, y, z]));
    }

    fn uniform_4f(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32) {
        self.record(Call::Uniform4f(location.0, [x, y, z, w]));
    }

    fn uniform_matrix4(&self, location: UniformLocation, transpose: bool, m: &[f32; 16]) {
        self.record(Call::UniformMatrix4(location.0, transpose, *m));
    }
}
