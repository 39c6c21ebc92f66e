use std::rc::Rc;

use crate::coords::Viewport;
use crate::error::Result;
use crate::gl::GlApi;
use crate::render::{Renderer, SceneConfig};
use crate::surface::Surface;

/// Everything created during startup, owned in teardown order.
///
/// The renderer (vertex array, buffer, program) is dropped before the
/// surface (context, window).
pub struct Session<S: Surface> {
    renderer: Renderer<S::Gl>,
    surface: S,
    viewport: Viewport,
}

impl<S: Surface> Session<S> {
    /// Sizes the viewport to the drawable, then builds the renderer.
    pub fn new(surface: S, scene: &SceneConfig) -> Result<Self> {
        let (width, height) = surface.size();
        let viewport = Viewport::from_size(width, height);
        surface.gl().viewport(viewport);

        let renderer = Renderer::new(Rc::clone(surface.gl()), scene)?;

        Ok(Self {
            renderer,
            surface,
            viewport,
        })
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn renderer(&self) -> &Renderer<S::Gl> {
        &self.renderer
    }

    /// Draws and presents one frame.
    pub fn frame(&mut self) -> Result<()> {
        self.renderer.draw();
        self.surface.present()
    }

    /// Matches the surface and viewport to a new drawable size.
    ///
    /// Zero-sized drawables (minimized windows) keep the previous viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::from_size(width, height);
        if !viewport.is_valid() || viewport == self.viewport {
            return;
        }

        self.surface.resize(width, height);
        self.renderer.set_viewport(viewport);
        self.viewport = viewport;
        log::debug!("viewport resized to {width}x{height}");
    }

    /// Releases GL objects, then the context and window.
    pub fn shutdown(self) {
        let Self { renderer, surface, .. } = self;
        renderer.shutdown();
        drop(surface);
        log::info!("session closed");
    }
}
