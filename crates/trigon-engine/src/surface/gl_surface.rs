use std::num::NonZeroU32;
use std::rc::Rc;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{
    GlSurface as _, Surface as GlutinSurface, SurfaceAttributesBuilder, SwapInterval,
    WindowSurface,
};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::error::{BootstrapError, Result};
use crate::gl::{GlApi, GlowApi};

use super::{GlProfile, Surface, SurfaceConfig};

/// A winit window with a current OpenGL context and its loaded functions.
///
/// Field order is drop order: function table, context, GL surface, window.
pub struct GlSurface {
    gl: Rc<GlowApi>,
    context: PossiblyCurrentContext,
    surface: GlutinSurface<WindowSurface>,
    window: Window,
}

impl GlSurface {
    /// Opens the window, creates a context of the requested version and
    /// profile, makes it current on this thread and loads GL.
    ///
    /// Returns [`BootstrapError::WindowCreation`] when the OS refuses the
    /// window and [`BootstrapError::Display`] when no display or framebuffer
    /// config is usable. Anything built before a failure is dropped before
    /// returning.
    pub fn create(event_loop: &ActiveEventLoop, config: &SurfaceConfig) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        // The display is opened without a window so an OS window failure is
        // reported on its own rather than folded into the display error.
        let (_, gl_config) = DisplayBuilder::new()
            .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
            .map_err(|e| BootstrapError::Display(e.to_string()))?;

        let window = glutin_winit::finalize_window(event_loop, attrs, &gl_config)
            .map_err(window_creation_error)?;

        let (major, minor) = config.gl_version;
        let profile = match config.profile {
            GlProfile::Core => glutin::context::GlProfile::Core,
            GlProfile::Compatibility => glutin::context::GlProfile::Compatibility,
        };
        let raw_handle = window.window_handle().ok().map(|h| h.as_raw());
        let context_attrs = ContextAttributesBuilder::new()
            .with_profile(profile)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(raw_handle);

        let display = gl_config.display();

        // SAFETY: `raw_handle` comes from `window`, which outlives the context
        // because it is dropped last.
        let not_current = unsafe { display.create_context(&gl_config, &context_attrs) }
            .map_err(|e| BootstrapError::Context(format!("GL {major}.{minor} {profile:?}: {e}")))?;

        let surface_attrs = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .map_err(|e| BootstrapError::Context(e.to_string()))?;

        // SAFETY: as above, the window outlives the surface.
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attrs) }
            .map_err(|e| BootstrapError::Context(e.to_string()))?;

        let context = not_current
            .make_current(&surface)
            .map_err(|e| BootstrapError::Context(e.to_string()))?;

        if config.vsync {
            let interval = SwapInterval::Wait(NonZeroU32::MIN);
            if let Err(e) = surface.set_swap_interval(&context, interval) {
                log::warn!("vsync unavailable: {e}");
            }
        }

        // SAFETY: `context` was just made current on this thread and stays
        // current for the lifetime of `GlSurface`, which is `!Send`.
        let gl = unsafe {
            let table =
                glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name));
            GlowApi::new(table)
        };
        let gl = Rc::new(gl);

        log::info!(
            "OpenGL context ready: {} on {}",
            gl.version_string(),
            gl.renderer_string()
        );

        Ok(Self {
            gl,
            context,
            surface,
            window,
        })
    }

    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }
}

impl Surface for GlSurface {
    type Gl = GlowApi;

    fn gl(&self) -> &Rc<GlowApi> {
        &self.gl
    }

    fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn resize(&self, width: u32, height: u32) {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        self.surface.resize(&self.context, w, h);
    }

    fn present(&self) -> Result<()> {
        self.window.pre_present_notify();
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| BootstrapError::Present(e.to_string()))
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Prefers hardware-accelerated configs, then the fewest samples, since the
/// scene needs neither multisampling nor depth.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, c| {
            let better_accel = c.hardware_accelerated() && !best.hardware_accelerated();
            let same_accel = c.hardware_accelerated() == best.hardware_accelerated();
            if better_accel || (same_accel && c.num_samples() < best.num_samples()) {
                c
            } else {
                best
            }
        })
        .unwrap_or_else(|| {
            log::error!("GL display offered no framebuffer configs");
            panic!("GL display offered no framebuffer configs")
        })
}

/// Maps an OS window failure to [`BootstrapError::WindowCreation`], keeping
/// the OS text in the log.
fn window_creation_error(err: impl std::fmt::Display) -> BootstrapError {
    log::error!("window creation failed: {err}");
    BootstrapError::WindowCreation
}
