use std::rc::Rc;

use crate::coords::{ColorRgba, Viewport};
use crate::error::Result;
use crate::geometry::equilateral_triangle;
use crate::gl::GlApi;

use super::sources::{FRAGMENT_SHADER, VERTEX_SHADER};
use super::{Mesh, SceneConfig, ShaderProgram};

/// Upper bound on `glGetError` pops per frame; a lost context can report
/// errors forever.
const MAX_ERRORS_PER_FRAME: usize = 8;

/// Draws the triangle scene.
///
/// Field order is drop order: the mesh goes before the program, and both
/// before the last `Rc` to the GL table held here.
pub struct Renderer<G: GlApi> {
    mesh: Mesh<G>,
    program: ShaderProgram<G>,
    gl: Rc<G>,

    clear_color: ColorRgba,
    reported_errors: Vec<u32>,
}

impl<G: GlApi> Renderer<G> {
    /// Compiles the embedded program, then uploads the triangle.
    pub fn new(gl: Rc<G>, scene: &SceneConfig) -> Result<Self> {
        let program = ShaderProgram::compile(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        let mesh = Mesh::upload(&gl, &equilateral_triangle(scene.triangle_side))?;

        Ok(Self {
            mesh,
            program,
            gl,
            clear_color: scene.clear_color,
            reported_errors: Vec::new(),
        })
    }

    /// Sets the GL viewport; call on startup and whenever the drawable resizes.
    pub fn set_viewport(&self, viewport: Viewport) {
        self.gl.viewport(viewport);
    }

    /// Records one frame into the back buffer. Presenting is the surface's job.
    pub fn draw(&mut self) {
        self.gl.clear_color(self.clear_color);
        self.gl.clear_color_buffer();

        self.program.bind();
        self.mesh.bind();
        self.gl.draw_triangles(0, self.mesh.vertex_count());

        self.report_driver_errors();
    }

    fn report_driver_errors(&mut self) {
        for _ in 0..MAX_ERRORS_PER_FRAME {
            let Some(code) = self.gl.error() else { return };
            if !self.reported_errors.contains(&code) {
                log::warn!("GL error 0x{code:04X} after draw");
                self.reported_errors.push(code);
            }
        }
    }

    /// Distinct driver error codes seen so far.
    pub fn reported_errors(&self) -> &[u32] {
        &self.reported_errors
    }

    /// Releases the mesh, then the program.
    pub fn shutdown(self) {
        log::debug!("renderer shutting down");
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::testing::{Call, RecordingGl};

    fn renderer(gl: &Rc<RecordingGl>) -> Renderer<RecordingGl> {
        Renderer::new(Rc::clone(gl), &SceneConfig::default()).expect("renderer")
    }

    // ids: vertex = 1, fragment = 2, program = 3, vao = 4, vbo = 5

    #[test]
    fn program_is_linked_before_mesh_upload() {
        let gl = Rc::new(RecordingGl::new());
        let _r = renderer(&gl);

        let link = gl.position(&Call::LinkProgram(3)).unwrap();
        let vao = gl.position(&Call::CreateVertexArray(4)).unwrap();
        assert!(link < vao);
    }

    #[test]
    fn draw_issues_one_three_vertex_triangle_list() {
        let gl = Rc::new(RecordingGl::new());
        let mut r = renderer(&gl);
        gl.clear_calls();

        r.draw();

        assert_eq!(
            gl.calls(),
            vec![
                Call::ClearColor(ColorRgba::new(0.07, 0.13, 0.17, 1.0)),
                Call::Clear,
                Call::UseProgram(Some(3)),
                Call::BindVertexArray(Some(4)),
                Call::DrawTriangles { first: 0, count: 3 },
            ]
        );
        assert!(r.reported_errors().is_empty());
    }

    #[test]
    fn driver_errors_are_collected_once_per_code() {
        let gl = Rc::new(RecordingGl::new());
        let mut r = renderer(&gl);

        gl.pending_errors.borrow_mut().extend([0x0502, 0x0502]);
        r.draw();
        gl.pending_errors.borrow_mut().push(0x0502);
        r.draw();

        assert_eq!(r.reported_errors(), &[0x0502]);
    }

    #[test]
    fn shutdown_releases_each_object_once_in_order() {
        let gl = Rc::new(RecordingGl::new());
        let r = renderer(&gl);
        gl.clear_calls();

        r.shutdown();

        assert_eq!(
            gl.calls(),
            vec![
                Call::DeleteVertexArray(4),
                Call::DeleteBuffer(5),
                Call::DeleteProgram(3),
            ]
        );
    }

    #[test]
    fn failed_upload_still_releases_program() {
        let gl = Rc::new(RecordingGl {
            refuse_buffers: true,
            ..RecordingGl::new()
        });

        assert!(Renderer::new(Rc::clone(&gl), &SceneConfig::default()).is_err());
        assert_eq!(gl.count(|c| *c == Call::DeleteProgram(3)), 1);
    }
}
