//! Trigon engine crate.
//!
//! Opens an OpenGL 3.3 core window and draws one static triangle until the
//! window is closed. `core` holds the display-independent logic, `surface`
//! and `window` bind it to glutin and winit.

pub mod core;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod gl;
pub mod logging;
pub mod render;
pub mod surface;
pub mod window;

pub use error::{BootstrapError, Result};
