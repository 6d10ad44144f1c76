use crate::attrs::Presentation;
use crate::shape::{Shape, impl_presentation, render_element};
use cartograph_types::Point;
use std::fmt::{self, Write};

/// Builder for a `<circle>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    presentation: Presentation,
    center: Point,
    radius: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            presentation: Presentation::default(),
            center: Point::ZERO,
            radius: 1.0,
        }
    }
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `cx` and `cy`. Defaults to the origin.
    pub fn set_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Sets `r`. Defaults to `1`.
    pub fn set_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

impl Shape for Circle {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        render_element(out, "circle", &self.presentation, None, |attrs| {
            attrs
                .add("cx", self.center.x)?
                .add("cy", self.center.y)?
                .add("r", self.radius)?;
            Ok(())
        })
    }
}

impl_presentation!(Circle);
