//! Renders transit network maps as SVG.
//!
//! A [`MapRequest`] bundles render settings with the stops and routes to
//! draw. [`render_map`] turns it into a standalone SVG document and
//! [`write_response`] wraps that document in a compact JSON response.

mod error;
mod request;

pub use error::Error;
pub use request::{render_map, write_response, MapRequest};

pub use cartograph_json as json;
pub use cartograph_map as map;
pub use cartograph_svg as svg;
pub use cartograph_types as types;
