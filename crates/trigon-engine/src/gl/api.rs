use std::fmt;

use crate::coords::{ColorRgba, Viewport};

/// Programmable pipeline stage of a shader object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// The subset of OpenGL 3.3 core the renderer uses.
///
/// Implementations may assume the context they wrap is current on the calling
/// thread; owners of an implementation must guarantee it. Object creation
/// reports driver refusals as `Err(message)`, every other call is
/// fire-and-forget like the underlying API. Status and log queries exist so
/// callers can check results explicitly.
pub trait GlApi {
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;
    type VertexArray: Copy + fmt::Debug;
    type Buffer: Copy + fmt::Debug;

    // ── shaders ───────────────────────────────────────────────────────────

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // ── programs ──────────────────────────────────────────────────────────

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    // ── vertex storage ────────────────────────────────────────────────────

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vao: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vao: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads to the bound `ARRAY_BUFFER` with `STATIC_DRAW` usage.
    fn array_buffer_data_static(&self, bytes: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Declares a non-normalized float attribute read from the bound buffer.
    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32, stride: i32, offset: i32);
    fn enable_vertex_attrib_array(&self, location: u32);

    // ── frame ─────────────────────────────────────────────────────────────

    fn viewport(&self, viewport: Viewport);
    fn clear_color(&self, color: ColorRgba);
    /// Clears `COLOR_BUFFER_BIT` only.
    fn clear_color_buffer(&self);
    /// `glDrawArrays(GL_TRIANGLES, first, count)`.
    fn draw_triangles(&self, first: i32, count: i32);

    // ── diagnostics ───────────────────────────────────────────────────────

    /// Pops one code from the driver error queue, `None` for `GL_NO_ERROR`.
    fn error(&self) -> Option<u32>;
    /// `GL_VERSION` string.
    fn version_string(&self) -> String;
    /// `GL_RENDERER` string.
    fn renderer_string(&self) -> String;
}
