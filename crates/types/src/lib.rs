pub mod color;
pub mod geometry;

pub use color::{Color, Rgb, Rgba};
pub use geometry::{Coordinates, Point};
