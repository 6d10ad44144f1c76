use crate::attrs::{write_presentation, AttributeWriter, Escaper, Presentation};
use std::fmt::{self, Write};

/// Anything that can render itself as one SVG element.
pub trait Shape {
    fn render(&self, out: &mut dyn Write) -> fmt::Result;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).render(out)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).render(out)
    }
}

/// Renders `<tag attrs... />`, or `<tag attrs... >content</tag>` when the
/// element carries text content.
pub(crate) fn render_element(
    out: &mut dyn Write,
    tag: &str,
    presentation: &Presentation,
    content: Option<&str>,
    own_attributes: impl FnOnce(&mut AttributeWriter<'_>) -> fmt::Result,
) -> fmt::Result {
    write!(out, "<{tag} ")?;
    {
        let mut attrs = AttributeWriter::new(&mut *out);
        write_presentation(presentation, &mut attrs)?;
        own_attributes(&mut attrs)?;
    }
    match content {
        Some(content) => {
            out.write_char('>')?;
            Escaper::text(&mut *out).write_str(content)?;
            write!(out, "</{tag}>")
        }
        None => out.write_str("/>"),
    }
}

/// Generates the chained presentation setters for each listed shape.
///
/// Every shape struct is expected to have a `presentation: Presentation` field.
macro_rules! impl_presentation {
    ($($shape:ty),+ $(,)?) => {
        $(
            impl $shape {
                /// Sets `fill`. Defaults to `none`.
                pub fn set_fill_color(mut self, color: impl Into<cartograph_types::Color>) -> Self {
                    self.presentation.fill = color.into();
                    self
                }

                /// Sets `stroke`. Defaults to `none`.
                pub fn set_stroke_color(mut self, color: impl Into<cartograph_types::Color>) -> Self {
                    self.presentation.stroke = color.into();
                    self
                }

                /// Sets `stroke-width`. Defaults to `1`.
                pub fn set_stroke_width(mut self, width: f64) -> Self {
                    self.presentation.stroke_width = width;
                    self
                }

                /// Sets `stroke-linecap`, which is omitted until set.
                pub fn set_stroke_line_cap(mut self, cap: $crate::attrs::LineCap) -> Self {
                    self.presentation.line_cap = Some(cap);
                    self
                }

                /// Sets `stroke-linejoin`, which is omitted until set.
                pub fn set_stroke_line_join(mut self, join: $crate::attrs::LineJoin) -> Self {
                    self.presentation.line_join = Some(join);
                    self
                }
            }
        )+
    };
}

pub(crate) use impl_presentation;
