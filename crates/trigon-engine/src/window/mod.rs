//! Event-loop runtime.
//!
//! Owns the `winit` EventLoop, creates the `GlSurface` once the loop is
//! resumed, and forwards window events to a `core::App`.

mod runtime;

pub use runtime::Runtime;
