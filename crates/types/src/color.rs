use serde::{Deserialize, Deserializer};
use std::fmt;

/// An opaque color given by its red, green and blue channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// An [`Rgb`] color with an alpha channel, usually in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// A paint value as written into presentation attributes.
///
/// The default color is [`Color::None`], which renders as the `none` keyword.
/// Plain strings are passed through untouched, so named colors (`"white"`)
/// and any other token the consumer understands can be used directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Color {
    #[default]
    None,
    Rgb(Rgb),
    Rgba(Rgba),
    Named(String),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(Rgb { red, green, blue }) => write!(f, "rgb({red},{green},{blue})"),
            Color::Rgba(Rgba {
                red,
                green,
                blue,
                alpha,
            }) => write!(f, "rgba({red},{green},{blue},{alpha})"),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::Named(name)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Rgba(rgba)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::Rgb(Rgb::new(red, green, blue))
    }
}

impl From<(u8, u8, u8, f64)> for Color {
    fn from((red, green, blue, alpha): (u8, u8, u8, f64)) -> Self {
        Color::Rgba(Rgba::new(red, green, blue, alpha))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Rgb(u8, u8, u8),
            Rgba(u8, u8, u8, f64),
        }

        Ok(match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) if s == "none" => Color::None,
            ColorDef::Str(s) => Color::Named(s),
            ColorDef::Rgb(r, g, b) => Color::Rgb(Rgb::new(r, g, b)),
            ColorDef::Rgba(r, g, b, a) => Color::Rgba(Rgba::new(r, g, b, a)),
        })
    }
}
