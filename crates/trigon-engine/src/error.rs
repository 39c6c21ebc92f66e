//! Startup error taxonomy.
//!
//! Every variant is fatal: the runtime logs it, leaves the event loop and the
//! process exits with a failure code.

use thiserror::Error;

use crate::gl::ShaderStage;

pub type Result<T> = std::result::Result<T, BootstrapError>;

#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The windowing layer produced no window.
    #[error("failed to create window")]
    WindowCreation,

    /// No usable display or framebuffer config.
    #[error("failed to open GL display: {0}")]
    Display(String),

    /// Context or window surface creation, or making the context current.
    #[error("failed to set up GL context: {0}")]
    Context(String),

    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("shader program failed to link: {log}")]
    ShaderLink { log: String },

    /// The driver refused to allocate a GL object.
    #[error("failed to create {kind}: {message}")]
    ObjectCreation { kind: &'static str, message: String },

    #[error("failed to present frame: {0}")]
    Present(String),
}

impl BootstrapError {
    pub(crate) fn object(kind: &'static str, message: impl Into<String>) -> Self {
        Self::ObjectCreation { kind, message: message.into() }
    }
}
