//! GL rendering.
//!
//! Each type here owns the GL objects it creates and deletes them on drop,
//! so every exit path (including early `?` returns during setup) releases
//! exactly what was acquired.
//!
//! Convention:
//! - vertex positions are already in clip space, no transforms are applied;
//! - the fragment color is a constant baked into the shader source.

mod mesh;
mod renderer;
mod scene;
mod shader;
pub mod sources;

pub use mesh::Mesh;
pub use renderer::Renderer;
pub use scene::SceneConfig;
pub use shader::ShaderProgram;

pub use crate::gl::ShaderStage;
