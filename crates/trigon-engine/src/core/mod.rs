//! Runtime-independent application logic.
//!
//! `window::Runtime` translates winit callbacks into [`App`] calls; everything
//! the triangle viewer decides (when it is running, when to stop, what failed)
//! lives here and is testable without a display.

mod app;
mod lifecycle;
mod session;
mod triangle;

pub use app::{App, AppControl};
pub use lifecycle::{Lifecycle, LifecycleError};
pub use session::Session;
pub use triangle::TriangleApp;
