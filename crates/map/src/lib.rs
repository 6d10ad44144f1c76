//! Renders a network of stops and routes as an SVG map.
//!
//! Stop coordinates are projected onto the canvas described by
//! [`RenderSettings`], then drawn layer by layer in the order the settings
//! list them.

mod error;
mod projection;
mod renderer;
mod settings;

pub use error::RenderError;
pub use projection::Projection;
pub use renderer::MapRenderer;
pub use settings::{Layer, RenderSettings, Route};

pub use cartograph_types::Coordinates;
