use crate::error::RenderError;
use crate::projection::Projection;
use crate::settings::{Layer, RenderSettings, Route};
use cartograph_svg::{Circle, Document, LineCap, LineJoin, Polyline, Text};
use cartograph_types::{Color, Coordinates, Point};
use std::collections::BTreeMap;

const FONT_FAMILY: &str = "Verdana";

/// A route resolved against the projected stops.
struct RouteLine<'a> {
    name: &'a str,
    color: &'a Color,
    path: Vec<Point>,
    label_anchors: Vec<Point>,
}

/// Draws stops and routes onto a [`Document`] following [`RenderSettings`].
pub struct MapRenderer<'a> {
    settings: &'a RenderSettings,
}

impl<'a> MapRenderer<'a> {
    pub fn new(settings: &'a RenderSettings) -> Self {
        Self { settings }
    }

    /// Renders the map. Routes are colored from the palette in name order.
    pub fn render(
        &self,
        stops: &BTreeMap<String, Coordinates>,
        routes: &BTreeMap<String, Route>,
    ) -> Result<Document, RenderError> {
        let coordinates: Vec<Coordinates> = stops.values().copied().collect();
        let projection = Projection::fit(
            &coordinates,
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );
        let points: BTreeMap<&str, Point> = stops
            .iter()
            .map(|(name, c)| (name.as_str(), projection.project(*c)))
            .collect();
        let lines = self.resolve_routes(&points, routes)?;

        let mut document = Document::new();
        for layer in &self.settings.layers {
            log::debug!("Rendering layer {layer}.");
            match layer {
                Layer::BusLines => self.render_bus_lines(&lines, &mut document),
                Layer::BusLabels => self.render_bus_labels(&lines, &mut document),
                Layer::StopPoints => self.render_stop_points(&points, &mut document),
                Layer::StopLabels => self.render_stop_labels(&points, &mut document),
            }
        }
        log::debug!("Rendered map with {} shapes.", document.len());
        Ok(document)
    }

    fn resolve_routes<'r>(
        &'r self,
        points: &BTreeMap<&str, Point>,
        routes: &'r BTreeMap<String, Route>,
    ) -> Result<Vec<RouteLine<'r>>, RenderError> {
        let palette = &self.settings.color_palette;
        if palette.is_empty() && !routes.is_empty() {
            return Err(RenderError::EmptyPalette);
        }

        routes
            .iter()
            .zip(palette.iter().cycle())
            .map(|((name, route), color)| -> Result<RouteLine<'r>, RenderError> {
                let path = route
                    .stops
                    .iter()
                    .map(|stop| {
                        points.get(stop.as_str()).copied().ok_or_else(|| {
                            RenderError::UnknownStop {
                                route: name.clone(),
                                stop: stop.clone(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(RouteLine {
                    name: name.as_str(),
                    color,
                    label_anchors: label_anchors(route, &path),
                    path,
                })
            })
            .collect()
    }

    fn render_bus_lines(&self, lines: &[RouteLine<'_>], document: &mut Document) {
        for line in lines {
            let polyline = line
                .path
                .iter()
                .fold(Polyline::new(), |polyline, point| polyline.add_point(*point));
            document.add(
                polyline
                    .set_stroke_color(line.color.clone())
                    .set_stroke_width(self.settings.line_width)
                    .set_stroke_line_cap(LineCap::Round)
                    .set_stroke_line_join(LineJoin::Round),
            );
        }
    }

    fn render_bus_labels(&self, lines: &[RouteLine<'_>], document: &mut Document) {
        for line in lines {
            for anchor in &line.label_anchors {
                let label = Text::new()
                    .set_point(*anchor)
                    .set_offset(self.settings.bus_label_offset)
                    .set_font_size(self.settings.bus_label_font_size)
                    .set_font_family(FONT_FAMILY)
                    .set_font_weight("bold")
                    .set_data(line.name);
                document.add(self.underlayer(label.clone()));
                document.add(label.set_fill_color(line.color.clone()));
            }
        }
    }

    fn render_stop_points(&self, points: &BTreeMap<&str, Point>, document: &mut Document) {
        for point in points.values() {
            document.add(
                Circle::new()
                    .set_center(*point)
                    .set_radius(self.settings.stop_radius)
                    .set_fill_color("white"),
            );
        }
    }

    fn render_stop_labels(&self, points: &BTreeMap<&str, Point>, document: &mut Document) {
        for (name, point) in points {
            let label = Text::new()
                .set_point(*point)
                .set_offset(self.settings.stop_label_offset)
                .set_font_size(self.settings.stop_label_font_size)
                .set_font_family(FONT_FAMILY)
                .set_data(*name);
            document.add(self.underlayer(label.clone()));
            document.add(label.set_fill_color("black"));
        }
    }

    /// The halo drawn under a label so it stays readable over route lines.
    fn underlayer(&self, label: Text) -> Text {
        label
            .set_fill_color(self.settings.underlayer_color.clone())
            .set_stroke_color(self.settings.underlayer_color.clone())
            .set_stroke_width(self.settings.underlayer_width)
            .set_stroke_line_cap(LineCap::Round)
            .set_stroke_line_join(LineJoin::Round)
    }
}

/// Where a route's name is printed: at its first stop and, for a route that
/// does not loop, at the turnaround stop in the middle of its path.
fn label_anchors(route: &Route, path: &[Point]) -> Vec<Point> {
    let Some((first_stop, first_point)) = route.stops.first().zip(path.first()) else {
        return Vec::new();
    };
    let mut anchors = vec![*first_point];

    let middle = route.stops.len() / 2;
    if !route.is_roundtrip && route.stops[middle] != *first_stop {
        anchors.push(path[middle]);
    }
    anchors
}
