use cartograph_types::Color;
use std::fmt::{self, Display, Write};

/// Shape used at the open ends of a stroked line (`stroke-linecap`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

/// Shape used where two stroked segments meet (`stroke-linejoin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Arcs => "arcs",
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
            LineJoin::MiterClip => "miter-clip",
            LineJoin::Round => "round",
        })
    }
}

/// Presentation attributes shared by every shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub line_cap: Option<LineCap>,
    pub line_join: Option<LineJoin>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            fill: Color::None,
            stroke: Color::None,
            stroke_width: 1.0,
            line_cap: None,
            line_join: None,
        }
    }
}

/// Writes the shared attributes in their fixed order.
///
/// `fill`, `stroke` and `stroke-width` are always present; the line cap and
/// join only appear once they have been set.
pub fn write_presentation(
    presentation: &Presentation,
    attrs: &mut AttributeWriter<'_>,
) -> fmt::Result {
    attrs
        .add("fill", &presentation.fill)?
        .add("stroke", &presentation.stroke)?
        .add("stroke-width", presentation.stroke_width)?
        .add_optional("stroke-linecap", presentation.line_cap.as_ref())?
        .add_optional("stroke-linejoin", presentation.line_join.as_ref())?;
    Ok(())
}

/// Appends `name="value" ` pairs to an element's open tag.
pub struct AttributeWriter<'a> {
    out: &'a mut dyn Write,
}

impl<'a> AttributeWriter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }

    pub fn add(&mut self, name: &str, value: impl Display) -> Result<&mut Self, fmt::Error> {
        write!(self.out, "{name}=\"")?;
        write!(Escaper::attribute(&mut *self.out), "{value}")?;
        self.out.write_str("\" ")?;
        Ok(self)
    }

    pub fn add_optional(
        &mut self,
        name: &str,
        value: Option<impl Display>,
    ) -> Result<&mut Self, fmt::Error> {
        match value {
            Some(value) => self.add(name, value),
            None => Ok(self),
        }
    }
}

/// A `fmt::Write` adapter replacing markup-significant characters with
/// entity references.
pub(crate) struct Escaper<'a> {
    out: &'a mut dyn Write,
    quote: bool,
}

impl<'a> Escaper<'a> {
    /// Escapes `&`, `<` and `"`.
    pub(crate) fn attribute(out: &'a mut dyn Write) -> Self {
        Self { out, quote: true }
    }

    /// Escapes `&`, `<` and `>`.
    pub(crate) fn text(out: &'a mut dyn Write) -> Self {
        Self { out, quote: false }
    }
}

impl Write for Escaper<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut rest = s;
        while let Some(pos) = rest.find(|c: char| self.needs_escape(c)) {
            self.out.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => "&quot;",
            };
            self.out.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        self.out.write_str(rest)
    }
}

impl Escaper<'_> {
    fn needs_escape(&self, c: char) -> bool {
        match c {
            '&' | '<' => true,
            '>' => !self.quote,
            '"' => self.quote,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(presentation: &Presentation) -> String {
        let mut out = String::new();
        write_presentation(presentation, &mut AttributeWriter::new(&mut out)).unwrap();
        out
    }

    #[test]
    fn test_defaults_render_fixed_triplet() {
        assert_eq!(
            render(&Presentation::default()),
            r#"fill="none" stroke="none" stroke-width="1" "#
        );
    }

    #[test]
    fn test_optional_attributes_follow_in_order() {
        let presentation = Presentation {
            fill: Color::from("white"),
            stroke: Color::from((1, 2, 3)),
            stroke_width: 2.5,
            line_cap: Some(LineCap::Round),
            line_join: Some(LineJoin::MiterClip),
        };
        assert_eq!(
            render(&presentation),
            r#"fill="white" stroke="rgb(1,2,3)" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="miter-clip" "#
        );
    }

    #[test]
    fn test_join_without_cap() {
        let presentation = Presentation {
            line_join: Some(LineJoin::Bevel),
            ..Presentation::default()
        };
        assert_eq!(
            render(&presentation),
            r#"fill="none" stroke="none" stroke-width="1" stroke-linejoin="bevel" "#
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut out = String::new();
        AttributeWriter::new(&mut out)
            .add("font-family", "A \"B\" & <C>")
            .unwrap();
        assert_eq!(out, r#"font-family="A &quot;B&quot; &amp; &lt;C>" "#);
    }

    #[test]
    fn test_named_colors_are_escaped() {
        let presentation = Presentation {
            fill: Color::from("a&b\"c"),
            stroke: Color::from("<red>"),
            ..Presentation::default()
        };
        assert_eq!(
            render(&presentation),
            r#"fill="a&amp;b&quot;c" stroke="&lt;red>" stroke-width="1" "#
        );
    }

    #[test]
    fn test_text_escaper_keeps_quotes() {
        let mut out = String::new();
        write!(Escaper::text(&mut out), "a\"b <c> & d").unwrap();
        assert_eq!(out, "a\"b &lt;c&gt; &amp; d");
    }
}
