use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown map layer: {0}")]
    UnknownLayer(String),
    #[error("Route '{route}' passes through unknown stop '{stop}'")]
    UnknownStop { route: String, stop: String },
    #[error("Color palette is empty")]
    EmptyPalette,
}
