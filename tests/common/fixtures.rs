use serde_json::{Value, json};

/// The map the reference request is expected to produce.
pub const SOCHI_MAP: &str = include_str!("../data/sochi_map.svg");

/// Ten stops and three routes across Sochi, with a request id.
pub fn sochi_request() -> Value {
    serde_json::from_str(include_str!("../data/sochi_request.json"))
        .expect("sochi_request.json should be valid JSON")
}

/// A 200x200 canvas with 50px padding drawing every layer.
pub fn render_settings() -> Value {
    json!({
        "width": 200,
        "height": 200,
        "padding": 50,
        "stop_radius": 5,
        "line_width": 14,
        "stop_label_font_size": 20,
        "stop_label_offset": [7, -3],
        "underlayer_color": [255, 255, 255, 0.85],
        "underlayer_width": 3,
        "color_palette": ["green", [255, 160, 0], "red"],
        "bus_label_font_size": 20,
        "bus_label_offset": [7, 15],
        "layers": ["bus_lines", "bus_labels", "stop_points", "stop_labels"]
    })
}

/// Same as [`render_settings`] with a different layer list.
pub fn render_settings_with_layers(layers: &[&str]) -> Value {
    let mut settings = render_settings();
    settings["layers"] = json!(layers);
    settings
}

/// Two stops at opposite corners of a unit square joined by one route.
pub fn two_stop_request(settings: Value) -> Value {
    json!({
        "render_settings": settings,
        "stops": {
            "Harbour": { "latitude": 0.0, "longitude": 0.0 },
            "Station": { "latitude": 1.0, "longitude": 1.0 }
        },
        "buses": {
            "14": { "stops": ["Harbour", "Station", "Harbour"], "is_roundtrip": false }
        },
        "request_id": 42
    })
}
