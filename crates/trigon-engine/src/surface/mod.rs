//! Window + GL context.
//!
//! `Surface` is what the rest of the engine needs from a window: the GL
//! function table bound to it, its drawable size, and buffer presentation.
//! `GlSurface` is the glutin/winit implementation.

mod config;
mod gl_surface;

#[cfg(test)]
pub(crate) mod testing;

use std::rc::Rc;

use crate::error::Result;
use crate::gl::GlApi;

pub use config::{GlProfile, SurfaceConfig};
pub use gl_surface::GlSurface;

/// A presentable drawable with a current GL context.
pub trait Surface {
    type Gl: GlApi;

    /// GL function table for the context current on this surface.
    fn gl(&self) -> &Rc<Self::Gl>;

    /// Drawable size in physical pixels.
    fn size(&self) -> (u32, u32);

    /// Resizes the drawable backing store. Zero dimensions are ignored.
    fn resize(&self, width: u32, height: u32);

    /// Swaps the back buffer to the screen.
    fn present(&self) -> Result<()>;

    /// Asks the windowing layer for another frame.
    fn request_redraw(&self);
}
