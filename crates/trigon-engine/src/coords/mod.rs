//! Plain value types shared by the surface and render layers.

mod color;
mod viewport;

pub use color::ColorRgba;
pub use viewport::Viewport;
