use super::Vertex;

/// Side length of the triangle the viewer draws, in clip-space units.
pub const TRIANGLE_SIDE: f32 = 1.0;

/// Equilateral triangle in the z = 0 plane with its centroid at the origin.
///
/// Vertices are bottom-left, bottom-right, top, in counter-clockwise order.
/// The base sits at `-side * sqrt(3) / 6` and the apex at `side * sqrt(3) / 3`.
pub fn equilateral_triangle(side: f32) -> [Vertex; 3] {
    let half = 0.5 * side;
    let sqrt3 = 3.0_f32.sqrt();

    let base_y = -half * sqrt3 / 3.0;
    let apex_y = half * sqrt3 * 2.0 / 3.0;

    [
        Vertex::new(-half, base_y, 0.0),
        Vertex::new(half, base_y, 0.0),
        Vertex::new(0.0, apex_y, 0.0),
    ]
}
