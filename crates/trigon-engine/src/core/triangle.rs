use crate::error::{BootstrapError, Result};
use crate::render::SceneConfig;
use crate::surface::Surface;

use super::{App, AppControl, Lifecycle, Session};

/// The hello-triangle viewer.
///
/// Builds a [`Session`] on start, draws one frame per redraw and tears the
/// session down when the window is closed. Any failure is fatal: it is
/// recorded, the app asks the runtime to exit and [`TriangleApp::finish`]
/// reports it.
pub struct TriangleApp<S: Surface> {
    scene: SceneConfig,
    lifecycle: Lifecycle,
    session: Option<Session<S>>,
    failure: Option<BootstrapError>,
    frames: u64,
}

impl<S: Surface> TriangleApp<S> {
    pub fn new(scene: SceneConfig) -> Self {
        Self {
            scene,
            lifecycle: Lifecycle::default(),
            session: None,
            failure: None,
            frames: 0,
        }
    }

    #[inline]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn session(&self) -> Option<&Session<S>> {
        self.session.as_ref()
    }

    /// Releases anything still alive and returns the first failure, if any.
    pub fn finish(mut self) -> Result<()> {
        self.close();
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, err: BootstrapError) -> AppControl {
        log::error!("{err}");
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        self.close();
        AppControl::Exit
    }

    fn close(&mut self) {
        let Some(session) = self.session.take() else { return };
        if let Err(e) = self.lifecycle.advance(Lifecycle::Closed) {
            log::warn!("{e}");
        }
        log::info!("closing after {} frames", self.frames);
        session.shutdown();
    }
}

impl<S: Surface> Default for TriangleApp<S> {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl<S: Surface> App for TriangleApp<S> {
    type Surface = S;

    fn on_start(&mut self, surface: Result<S>) -> AppControl {
        if self.lifecycle != Lifecycle::Uninitialized {
            log::warn!("start requested while {:?}; ignored", self.lifecycle);
            return AppControl::Continue;
        }

        let session = match surface.and_then(|s| Session::new(s, &self.scene)) {
            Ok(session) => session,
            Err(err) => return self.fail(err),
        };

        self.session = Some(session);
        if let Err(e) = self.lifecycle.advance(Lifecycle::Initialized) {
            log::warn!("{e}");
        }
        AppControl::Continue
    }

    fn on_resize(&mut self, width: u32, height: u32) -> AppControl {
        if let Some(session) = self.session.as_mut() {
            session.resize(width, height);
        }
        AppControl::Continue
    }

    fn on_frame(&mut self) -> AppControl {
        let Some(session) = self.session.as_mut() else {
            return AppControl::Exit;
        };

        if self.lifecycle == Lifecycle::Initialized {
            if let Err(e) = self.lifecycle.advance(Lifecycle::Running) {
                log::warn!("{e}");
            }
        }

        if let Err(err) = session.frame() {
            return self.fail(err);
        }
        self.frames += 1;
        AppControl::Continue
    }

    fn on_close_requested(&mut self) -> AppControl {
        self.close();
        AppControl::Exit
    }

    fn request_redraw(&self) {
        if let Some(session) = self.session.as_ref() {
            session.surface().request_redraw();
        }
    }
}
