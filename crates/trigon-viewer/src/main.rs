use std::process::ExitCode;

use trigon_engine::core::TriangleApp;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::render::SceneConfig;
use trigon_engine::surface::{GlSurface, SurfaceConfig};
use trigon_engine::window::Runtime;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let app: TriangleApp<GlSurface> = TriangleApp::new(SceneConfig::default());

    let outcome = Runtime::run(SurfaceConfig::default(), app)
        .and_then(|app| app.finish().map_err(anyhow::Error::from));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("trigon stopped: {err:#}");
            ExitCode::FAILURE
        }
    }
}
