use crate::attrs::Presentation;
use crate::shape::{Shape, impl_presentation, render_element};
use cartograph_types::Point;
use itertools::Itertools;
use std::fmt::{self, Write};

/// Builder for a `<polyline>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    presentation: Presentation,
    points: Vec<Point>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex to `points`.
    pub fn add_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }
}

impl Shape for Polyline {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        let points = self
            .points
            .iter()
            .format_with(" ", |p, f| f(&format_args!("{},{}", p.x, p.y)));
        render_element(out, "polyline", &self.presentation, None, |attrs| {
            attrs.add("points", points)?;
            Ok(())
        })
    }
}

impl_presentation!(Polyline);
