//! CPU-side vertex data.

mod triangle;
mod vertex;

pub use triangle::{equilateral_triangle, TRIANGLE_SIDE};
pub use vertex::Vertex;
