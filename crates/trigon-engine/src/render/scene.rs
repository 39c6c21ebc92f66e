use crate::coords::ColorRgba;
use crate::geometry::TRIANGLE_SIDE;

/// What the renderer draws each frame.
///
/// Defaults reproduce the classic dark-teal background with a unit triangle.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Color the back buffer is cleared to before drawing.
    pub clear_color: ColorRgba,

    /// Side length of the equilateral triangle, in clip-space units.
    pub triangle_side: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: ColorRgba::new(0.07, 0.13, 0.17, 1.0),
            triangle_side: TRIANGLE_SIDE,
        }
    }
}
