use std::rc::Rc;

use crate::error::{BootstrapError, Result};
use crate::geometry::Vertex;
use crate::gl::GlApi;

/// Static vertex data on the GPU plus the vertex array describing it.
///
/// The buffer is written once at upload and never touched again. Both
/// objects are deleted on drop, vertex array first.
pub struct Mesh<G: GlApi> {
    gl: Rc<G>,
    vao: G::VertexArray,
    vbo: G::Buffer,
    vertex_count: i32,
}

impl<G: GlApi> Mesh<G> {
    /// Uploads `vertices` and records a slot-0 `vec3` position layout.
    ///
    /// Leaves no vertex array or array buffer bound, so later GL calls
    /// cannot modify this mesh through a stale binding.
    pub fn upload(gl: &Rc<G>, vertices: &[Vertex]) -> Result<Self> {
        let vertex_count = i32::try_from(vertices.len())
            .map_err(|_| BootstrapError::object("vertex buffer", "too many vertices"))?;

        let vao = gl
            .create_vertex_array()
            .map_err(|e| BootstrapError::object("vertex array", e))?;
        let vbo = match gl.create_buffer() {
            Ok(vbo) => vbo,
            Err(e) => {
                gl.delete_vertex_array(vao);
                return Err(BootstrapError::object("vertex buffer", e));
            }
        };

        gl.bind_vertex_array(Some(vao));
        gl.bind_array_buffer(Some(vbo));
        gl.array_buffer_data_static(bytemuck::cast_slice(vertices));

        gl.vertex_attrib_pointer_f32(
            Vertex::POSITION_LOCATION,
            Vertex::POSITION_COMPONENTS,
            Vertex::STRIDE,
            0,
        );
        gl.enable_vertex_attrib_array(Vertex::POSITION_LOCATION);

        gl.bind_array_buffer(None);
        gl.bind_vertex_array(None);

        log::debug!("mesh uploaded: {vertex_count} vertices (vao {vao:?}, vbo {vbo:?})");

        Ok(Self {
            gl: Rc::clone(gl),
            vao,
            vbo,
            vertex_count,
        })
    }

    /// Binds the vertex array for drawing.
    pub fn bind(&self) {
        self.gl.bind_vertex_array(Some(self.vao));
    }

    #[inline]
    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}

impl<G: GlApi> Drop for Mesh<G> {
    fn drop(&mut self) {
        self.gl.delete_vertex_array(self.vao);
        self.gl.delete_buffer(self.vbo);
        log::debug!("mesh deleted (vao {:?}, vbo {:?})", self.vao, self.vbo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::equilateral_triangle;
    use crate::gl::testing::{Call, RecordingGl};

    #[test]
    fn upload_records_layout_then_unbinds() {
        let gl = Rc::new(RecordingGl::new());
        let tri = equilateral_triangle(1.0);
        let mesh = Mesh::upload(&gl, &tri).expect("upload");
        assert_eq!(mesh.vertex_count(), 3);

        let expected_bytes = bytemuck::cast_slice::<Vertex, u8>(&tri).to_vec();
        assert_eq!(expected_bytes.len(), 36);

        assert_eq!(
            gl.calls(),
            vec![
                Call::CreateVertexArray(1),
                Call::CreateBuffer(2),
                Call::BindVertexArray(Some(1)),
                Call::BindArrayBuffer(Some(2)),
                Call::BufferDataStatic(expected_bytes),
                Call::VertexAttribPointer { location: 0, components: 3, stride: 12, offset: 0 },
                Call::EnableVertexAttribArray(0),
                Call::BindArrayBuffer(None),
                Call::BindVertexArray(None),
            ]
        );
    }

    #[test]
    fn drop_releases_array_then_buffer_once() {
        let gl = Rc::new(RecordingGl::new());
        let mesh = Mesh::upload(&gl, &equilateral_triangle(1.0)).expect("upload");
        gl.clear_calls();

        drop(mesh);

        assert_eq!(gl.calls(), vec![Call::DeleteVertexArray(1), Call::DeleteBuffer(2)]);
    }

    #[test]
    fn refused_buffer_releases_vertex_array() {
        let gl = Rc::new(RecordingGl {
            refuse_buffers: true,
            ..RecordingGl::new()
        });

        let err = Mesh::upload(&gl, &equilateral_triangle(1.0)).err().expect("must fail");
        assert!(matches!(err, BootstrapError::ObjectCreation { kind: "vertex buffer", .. }));
        assert_eq!(gl.calls(), vec![Call::CreateVertexArray(1), Call::DeleteVertexArray(1)]);
    }
}
