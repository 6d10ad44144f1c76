use crate::error::Error;
use cartograph_json::print_array;
use cartograph_map::{MapRenderer, RenderSettings, Route};
use cartograph_types::Coordinates;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;

/// A map to draw: the canvas settings plus the network on it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapRequest {
    pub render_settings: RenderSettings,
    #[serde(default)]
    pub stops: BTreeMap<String, Coordinates>,
    #[serde(default)]
    pub buses: BTreeMap<String, Route>,
    #[serde(default)]
    pub request_id: Option<i64>,
}

impl MapRequest {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl io::Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Renders the requested map as a complete SVG document.
pub fn render_map(request: &MapRequest) -> Result<String, Error> {
    log::debug!(
        "Rendering {} stops and {} routes.",
        request.stops.len(),
        request.buses.len()
    );
    let document =
        MapRenderer::new(&request.render_settings).render(&request.stops, &request.buses)?;
    Ok(document.to_string())
}

/// Writes `[{"map":"<svg...>","request_id":N}]` to `out`.
///
/// `request_id` is `null` when the request carries none.
pub fn write_response<W: io::Write + ?Sized>(
    request: &MapRequest,
    out: &mut W,
) -> Result<(), Error> {
    let map = render_map(request)?;

    let mut response = print_array(out);
    {
        let mut entry = response.begin_object();
        entry.key("map").string(&map);
        match request.request_id {
            Some(id) => entry.key("request_id").number(id),
            None => entry.key("request_id").null(),
        };
    }
    response.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r#"{
        "render_settings": {
            "width": 200, "height": 200, "padding": 50,
            "stop_radius": 5, "line_width": 14,
            "stop_label_font_size": 20, "stop_label_offset": [7, -3],
            "underlayer_color": "white", "underlayer_width": 3,
            "color_palette": ["green"],
            "bus_label_font_size": 20, "bus_label_offset": [7, 15],
            "layers": ["stop_points"]
        },
        "stops": {
            "A": { "latitude": 0, "longitude": 0 },
            "B": { "latitude": 1, "longitude": 1 }
        },
        "request_id": 7
    }"#;

    #[test]
    fn test_missing_network_defaults_to_empty() {
        let request = MapRequest::from_json(REQUEST).unwrap();
        assert!(request.buses.is_empty());
        assert_eq!(request.stops.len(), 2);
        assert_eq!(request.request_id, Some(7));
    }

    #[test]
    fn test_render_map() {
        let request = MapRequest::from_json(REQUEST).unwrap();
        let svg = render_map(&request).unwrap();
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8" ?><svg"#));
        assert!(svg.contains(r#"<circle fill="white" stroke="none" stroke-width="1" cx="50" cy="150" r="5" />"#));
        assert!(svg.ends_with(r#"cx="150" cy="50" r="5" /></svg>"#));
    }

    #[test]
    fn test_response_escapes_the_document() {
        let request = MapRequest::from_json(REQUEST).unwrap();
        let mut out = Vec::new();
        write_response(&request, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with(r#"[{"map":"<?xml version=\"1.0\""#));
        assert!(out.ends_with(r#"</svg>","request_id":7}]"#));
    }

    #[test]
    fn test_response_without_request_id() {
        let mut request = MapRequest::from_json(REQUEST).unwrap();
        request.request_id = None;
        let mut out = Vec::new();
        write_response(&request, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with(r#""request_id":null}]"#));
    }

    #[test]
    fn test_unknown_layer_is_a_request_error() {
        let json = REQUEST.replace("stop_points", "rivers");
        let err = MapRequest::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("Unknown map layer: rivers"));
    }
}
