use crate::shape::Shape;
use std::fmt;
use std::io;

pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
pub const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
pub const SVG_CLOSE: &str = "</svg>";

/// An SVG document built from shapes.
///
/// Shapes are rendered into the document's buffer as soon as they are added
/// and are not kept around, so a shape cannot be changed once it has been
/// added. Rendering the document does not consume it and always yields the
/// same bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    content: String,
    shapes: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `shape` at the end of the document.
    ///
    /// A shape whose rendering fails part way is dropped entirely so the
    /// buffer never holds a truncated element.
    pub fn add(&mut self, shape: impl Shape) -> &mut Self {
        let start = self.content.len();
        match shape.render(&mut self.content) {
            Ok(()) => self.shapes += 1,
            Err(_) => {
                log::warn!("Discarding a shape that failed to render.");
                self.content.truncate(start);
            }
        }
        self
    }

    /// The number of shapes added so far.
    pub fn len(&self) -> usize {
        self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes == 0
    }

    /// Writes the complete document: XML declaration, `<svg>` root, shapes.
    pub fn render<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(XML_HEADER.as_bytes())?;
        out.write_all(SVG_OPEN.as_bytes())?;
        out.write_all(self.content.as_bytes())?;
        out.write_all(SVG_CLOSE.as_bytes())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(XML_HEADER)?;
        f.write_str(SVG_OPEN)?;
        f.write_str(&self.content)?;
        f.write_str(SVG_CLOSE)
    }
}
