use cartograph_json::PrintError;
use cartograph_map::RenderError;
use thiserror::Error;

/// Everything that can go wrong between reading a request and writing a map.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid map request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Writing the response failed: {0}")]
    Print(#[from] PrintError),
}
