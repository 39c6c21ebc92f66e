//! Embedded GLSL 330 core sources.

/// Passes the slot-0 position through unchanged with `w = 1`.
pub const VERTEX_SHADER: &str = "\
#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

/// Writes one constant opaque orange.
pub const FRAGMENT_SHADER: &str = "\
#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(0.8f, 0.3f, 0.02f, 1.0f);
}
";
