use crate::error::RenderError;
use cartograph_types::{Color, Point};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// One drawing pass over the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Layer {
    BusLines,
    BusLabels,
    StopPoints,
    StopLabels,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::BusLines => "bus_lines",
            Layer::BusLabels => "bus_labels",
            Layer::StopPoints => "stop_points",
            Layer::StopLabels => "stop_labels",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bus_lines" => Ok(Layer::BusLines),
            "bus_labels" => Ok(Layer::BusLabels),
            "stop_points" => Ok(Layer::StopPoints),
            "stop_labels" => Ok(Layer::StopLabels),
            other => Err(RenderError::UnknownLayer(other.to_string())),
        }
    }
}

impl TryFrom<String> for Layer {
    type Error = RenderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Canvas geometry and styling for a map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub stop_radius: f64,
    pub line_width: f64,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Point,
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
    pub bus_label_font_size: u32,
    pub bus_label_offset: Point,
    pub layers: Vec<Layer>,
}

/// A route through named stops.
///
/// `stops` is the full drawn path: a route that returns to its start lists
/// the way back as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Route {
    pub stops: Vec<String>,
    #[serde(default)]
    pub is_roundtrip: bool,
}
