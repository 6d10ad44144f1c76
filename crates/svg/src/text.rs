use crate::attrs::Presentation;
use crate::shape::{Shape, impl_presentation, render_element};
use cartograph_types::Point;
use std::fmt::{self, Write};

/// Builder for a `<text>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    presentation: Presentation,
    point: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    data: String,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            presentation: Presentation::default(),
            point: Point::ZERO,
            offset: Point::ZERO,
            font_size: 1,
            font_family: None,
            font_weight: None,
            data: String::new(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the anchor (`x`, `y`).
    pub fn set_point(mut self, point: Point) -> Self {
        self.point = point;
        self
    }

    /// Sets the shift from the anchor (`dx`, `dy`).
    pub fn set_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn set_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn set_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    pub fn set_font_weight(mut self, font_weight: impl Into<String>) -> Self {
        self.font_weight = Some(font_weight.into());
        self
    }

    /// Sets the element content.
    pub fn set_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }
}

impl Shape for Text {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        render_element(out, "text", &self.presentation, Some(&self.data), |attrs| {
            attrs
                .add("x", self.point.x)?
                .add("y", self.point.y)?
                .add("dx", self.offset.x)?
                .add("dy", self.offset.y)?
                .add("font-size", self.font_size)?
                .add_optional("font-family", self.font_family.as_deref())?
                .add_optional("font-weight", self.font_weight.as_deref())?;
            Ok(())
        })
    }
}

impl_presentation!(Text);

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &Text) -> String {
        let mut out = String::new();
        text.render(&mut out).unwrap();
        out
    }

    #[test]
    fn test_defaults_omit_font_family_and_weight() {
        assert_eq!(
            render(&Text::new()),
            r#"<text fill="none" stroke="none" stroke-width="1" x="0" y="0" dx="0" dy="0" font-size="1" ></text>"#
        );
    }

    #[test]
    fn test_stop_label() {
        let text = Text::new()
            .set_point(Point::new(50.0, 50.0))
            .set_offset(Point::new(10.0, -10.0))
            .set_font_size(20)
            .set_font_family("Verdana")
            .set_fill_color("black")
            .set_data("C");
        assert_eq!(
            render(&text),
            r#"<text fill="black" stroke="none" stroke-width="1" x="50" y="50" dx="10" dy="-10" font-size="20" font-family="Verdana" >C</text>"#
        );
    }

    #[test]
    fn test_font_weight_comes_after_family() {
        let text = Text::new()
            .set_font_weight("bold")
            .set_font_family("Verdana")
            .set_data("14");
        let out = render(&text);
        assert!(
            out.contains(r#"font-size="1" font-family="Verdana" font-weight="bold" >14</text>"#),
            "unexpected: {out}"
        );
    }

    #[test]
    fn test_unicode_data_is_kept() {
        let text = Text::new().set_data("Морской вокзал");
        assert!(render(&text).ends_with(">Морской вокзал</text>"));
    }

    #[test]
    fn test_markup_in_data_is_escaped() {
        let text = Text::new().set_data("A & B <C>");
        assert!(render(&text).ends_with(">A &amp; B &lt;C&gt;</text>"));
    }
}
