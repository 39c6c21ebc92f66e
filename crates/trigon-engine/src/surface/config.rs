/// Which OpenGL context profile to request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlProfile {
    /// Modern functions only.
    Core,
    Compatibility,
}

/// Window and context parameters.
///
/// All values are compile-time defaults; nothing is read from the
/// environment or the command line.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub title: String,

    /// Window size in physical pixels; the viewport starts out equal to it.
    pub width: u32,
    pub height: u32,

    /// Requested OpenGL `(major, minor)` version.
    pub gl_version: (u8, u8),
    pub profile: GlProfile,

    /// Sync buffer swaps to the display refresh when the platform allows it.
    pub vsync: bool,

    pub resizable: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            width: 800,
            height: 800,
            gl_version: (3, 3),
            profile: GlProfile::Core,
            vsync: true,
            resizable: true,
        }
    }
}
