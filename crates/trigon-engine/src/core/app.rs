use crate::error::Result;
use crate::surface::Surface;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Contract between the event-loop runtime and the application.
pub trait App {
    type Surface: Surface;

    /// Called once with the result of creating the window and context.
    fn on_start(&mut self, surface: Result<Self::Surface>) -> AppControl;

    /// Called when the drawable changes size.
    fn on_resize(&mut self, width: u32, height: u32) -> AppControl {
        let _ = (width, height);
        AppControl::Continue
    }

    /// Called once per frame.
    fn on_frame(&mut self) -> AppControl;

    /// Called when the user asks to close the window.
    fn on_close_requested(&mut self) -> AppControl;

    /// Schedules another frame, if the app still has a surface.
    fn request_redraw(&self);
}
