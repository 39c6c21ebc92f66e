use std::rc::Rc;

use crate::error::{BootstrapError, Result};
use crate::gl::{GlApi, ShaderStage};

/// Linked vertex + fragment program.
///
/// Owns the program object; it is deleted when this value drops.
pub struct ShaderProgram<G: GlApi> {
    gl: Rc<G>,
    program: G::Program,
}

impl<G: GlApi> ShaderProgram<G> {
    /// Compiles both stages, links them and releases the stage objects.
    ///
    /// Link is only attempted once both stages compiled. Stage objects are
    /// deleted exactly once, right after the link call, whether or not the
    /// link succeeded. On any failure nothing created here survives.
    pub fn compile(gl: &Rc<G>, vertex_src: &str, fragment_src: &str) -> Result<Self> {
        let vertex = StageObject::compile(&**gl, ShaderStage::Vertex, vertex_src)?;
        let fragment = StageObject::compile(&**gl, ShaderStage::Fragment, fragment_src)?;

        let handle = gl
            .create_program()
            .map_err(|e| BootstrapError::object("shader program", e))?;
        let program = Self {
            gl: Rc::clone(gl),
            program: handle,
        };

        gl.attach_shader(handle, vertex.shader);
        gl.attach_shader(handle, fragment.shader);
        gl.link_program(handle);

        drop(vertex);
        drop(fragment);

        if !gl.program_link_status(handle) {
            let log = gl.program_info_log(handle);
            log::error!("shader program link failed: {log}");
            return Err(BootstrapError::ShaderLink { log });
        }

        log::debug!("shader program {handle:?} linked");
        Ok(program)
    }

    /// Makes this program current for subsequent draws.
    pub fn bind(&self) {
        self.gl.use_program(Some(self.program));
    }

    #[cfg(test)]
    pub(crate) fn handle(&self) -> G::Program {
        self.program
    }
}

impl<G: GlApi> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.program);
        log::debug!("shader program {:?} deleted", self.program);
    }
}

/// A compiled stage that lives only until its program is linked.
struct StageObject<'a, G: GlApi> {
    gl: &'a G,
    shader: G::Shader,
}

impl<'a, G: GlApi> StageObject<'a, G> {
    fn compile(gl: &'a G, stage: ShaderStage, source: &str) -> Result<Self> {
        let shader = gl
            .create_shader(stage)
            .map_err(|e| BootstrapError::object("shader", e))?;
        let obj = Self { gl, shader };

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.shader_compile_status(shader) {
            let log = gl.shader_info_log(shader);
            log::error!("{stage} shader compile failed: {log}");
            return Err(BootstrapError::ShaderCompile { stage, log });
        }

        Ok(obj)
    }
}

impl<G: GlApi> Drop for StageObject<'_, G> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.shader);
    }
}
