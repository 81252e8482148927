pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod import;
pub mod logging;
pub mod notification;
pub mod raster;
pub mod reel;
pub mod session;
pub mod storage;

pub use error::{AppError, AppResult};
pub use session::EditorSession;

/// Entrypoint used by frontends and CLI bindings: logging, on-disk
/// configuration, and a ready-to-draw session.
pub fn bootstrap() -> EditorSession {
    logging::init();
    tracing::info!("starting pixelreel");

    let config = config::load_editor_config();
    let session = EditorSession::new(&config);

    tracing::info!(
        grid_size = session.grid().width(),
        cell_scale = config.cell_scale(),
        "editor session ready"
    );
    session
}
