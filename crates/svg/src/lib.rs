//! A small, append-only SVG document model.
//!
//! Shapes are configured with chained setters and handed to a [`Document`],
//! which renders each one immediately into its internal buffer. The finished
//! document is a single `<svg>` element whose attribute order and number
//! formatting are stable, so two renders of the same shapes always produce
//! the same bytes.
//!
//! ```
//! use cartograph_svg::{Circle, Document, Point, Polyline, Rgb, LineCap};
//!
//! let mut doc = Document::new();
//! doc.add(
//!     Polyline::new()
//!         .add_point(Point::new(50.0, 50.0))
//!         .add_point(Point::new(250.0, 250.0))
//!         .set_stroke_color(Rgb::new(140, 198, 63))
//!         .set_stroke_width(16.0)
//!         .set_stroke_line_cap(LineCap::Round),
//! )
//! .add(Circle::new().set_center(Point::new(50.0, 50.0)).set_fill_color("white"));
//!
//! let svg = doc.to_string();
//! assert!(svg.ends_with("</svg>"));
//! ```

mod attrs;
mod circle;
mod document;
mod polyline;
mod shape;
mod text;

pub use attrs::{write_presentation, AttributeWriter, LineCap, LineJoin, Presentation};
pub use circle::Circle;
pub use document::{Document, SVG_CLOSE, SVG_OPEN, XML_HEADER};
pub use polyline::Polyline;
pub use shape::Shape;
pub use text::Text;

pub use cartograph_types::{Color, Point, Rgb, Rgba};
