use bytemuck::{Pod, Zeroable};

/// One vertex as laid out in the GPU buffer: a bare `vec3` position.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    /// Shader input slot the position is bound to.
    pub const POSITION_LOCATION: u32 = 0;

    /// Number of `f32` components in the position attribute.
    pub const POSITION_COMPONENTS: i32 = 3;

    /// Byte distance between consecutive vertices.
    pub const STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}
