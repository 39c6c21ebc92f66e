//! OpenGL access.
//!
//! Components never call the driver directly. They receive an `Rc<G>` where
//! `G: GlApi`, which makes the thread-bound current context an explicit
//! dependency and lets tests swap in a recording fake.

mod api;
mod glow_backend;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{GlApi, ShaderStage};
pub use glow_backend::GlowApi;
