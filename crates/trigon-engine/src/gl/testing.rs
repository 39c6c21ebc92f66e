//! Recording `GlApi` fake for unit tests.

use std::cell::{Cell, RefCell};

use crate::coords::{ColorRgba, Viewport};

use super::{GlApi, ShaderStage};

/// One observed GL call. Object handles are plain ids starting at 1.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    BufferDataStatic(Vec<u8>),
    DeleteBuffer(u32),
    VertexAttribPointer { location: u32, components: i32, stride: i32, offset: i32 },
    EnableVertexAttribArray(u32),
    Viewport(Viewport),
    ClearColor(ColorRgba),
    Clear,
    DrawTriangles { first: i32, count: i32 },
}

/// Records every call and hands out sequential ids.
///
/// Failure knobs let tests drive the error paths of the real driver.
#[derive(Default)]
pub(crate) struct RecordingGl {
    pub calls: RefCell<Vec<Call>>,
    pub next_id: Cell<u32>,
    pub stages: RefCell<Vec<(u32, ShaderStage)>>,

    pub fail_compile: Option<ShaderStage>,
    pub fail_link: bool,
    pub refuse_buffers: bool,
    pub pending_errors: RefCell<Vec<u32>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    /// Index of the first call equal to `call`.
    pub fn position(&self, call: &Call) -> Option<usize> {
        self.calls.borrow().iter().position(|c| c == call)
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn alloc(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn stage_of(&self, shader: u32) -> Option<ShaderStage> {
        self.stages
            .borrow()
            .iter()
            .find(|(id, _)| *id == shader)
            .map(|(_, s)| *s)
    }
}

impl GlApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type VertexArray = u32;
    type Buffer = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.alloc();
        self.stages.borrow_mut().push((id, stage));
        self.record(Call::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, _source: &str) {
        self.record(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.fail_compile != self.stage_of(shader)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        format!("error in shader {shader}")
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.alloc();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, program: u32) -> String {
        format!("link error in program {program}")
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.alloc();
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vao: Option<u32>) {
        self.record(Call::BindVertexArray(vao));
    }

    fn delete_vertex_array(&self, vao: u32) {
        self.record(Call::DeleteVertexArray(vao));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        if self.refuse_buffers {
            return Err("out of memory".to_string());
        }
        let id = self.alloc();
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.record(Call::BindArrayBuffer(buffer));
    }

    fn array_buffer_data_static(&self, bytes: &[u8]) {
        self.record(Call::BufferDataStatic(bytes.to_vec()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32, stride: i32, offset: i32) {
        self.record(Call::VertexAttribPointer { location, components, stride, offset });
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(Call::EnableVertexAttribArray(location));
    }

    fn viewport(&self, viewport: Viewport) {
        self.record(Call::Viewport(viewport));
    }

    fn clear_color(&self, color: ColorRgba) {
        self.record(Call::ClearColor(color));
    }

    fn clear_color_buffer(&self) {
        self.record(Call::Clear);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles { first, count });
    }

    fn error(&self) -> Option<u32> {
        self.pending_errors.borrow_mut().pop()
    }

    fn version_string(&self) -> String {
        "3.3.0 recording".to_string()
    }

    fn renderer_string(&self) -> String {
        "recording".to_string()
    }
}
