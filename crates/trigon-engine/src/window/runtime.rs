use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{App, AppControl};
use crate::surface::{GlSurface, SurfaceConfig};

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` until it asks to exit and hands it back.
    ///
    /// Errors here are event-loop failures; application failures are kept by
    /// the app itself.
    pub fn run<A>(config: SurfaceConfig, app: A) -> Result<A>
    where
        A: App<Surface = GlSurface>,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(state.app)
    }
}

struct RuntimeState<A> {
    config: SurfaceConfig,
    app: A,

    window_id: Option<WindowId>,
    started: bool,
    exit_requested: bool,
}

impl<A> RuntimeState<A>
where
    A: App<Surface = GlSurface>,
{
    fn new(config: SurfaceConfig, app: A) -> Self {
        Self {
            config,
            app,
            window_id: None,
            started: false,
            exit_requested: false,
        }
    }

    fn apply(&mut self, event_loop: &ActiveEventLoop, control: AppControl) {
        if control == AppControl::Exit {
            self.exit_requested = true;
        }
        if self.exit_requested {
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App<Surface = GlSurface>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // The context is created exactly once; later resumes reuse it.
        if self.started {
            return;
        }
        self.started = true;

        let surface = GlSurface::create(event_loop, &self.config);
        self.window_id = surface.as_ref().ok().map(GlSurface::window_id);

        let control = self.app.on_start(surface);
        self.apply(event_loop, control);

        if !self.exit_requested {
            self.app.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Static scene, but redraw continuously: one frame per loop turn.
        event_loop.set_control_flow(ControlFlow::Poll);
        self.app.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        if self.window_id != Some(window_id) {
            return;
        }

        let control = match event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                self.app.on_close_requested()
            }
            WindowEvent::Resized(size) => self.app.on_resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.app.on_frame(),
            _ => AppControl::Continue,
        };

        self.apply(event_loop, control);
    }
}
