use cartograph_types::{Coordinates, Point};
use itertools::Itertools;

const EPSILON: f64 = 1e-9;

/// Linear projection of geographic coordinates onto a padded canvas.
///
/// Longitude grows to the right and latitude grows upwards, so `y` is
/// measured down from the northernmost stop. Both axes share one zoom factor
/// so the map keeps its proportions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    min_lon: f64,
    max_lat: f64,
    zoom: f64,
    padding: f64,
}

impl Projection {
    /// Fits every coordinate in `coordinates` into `width` x `height`,
    /// leaving `padding` on each side.
    ///
    /// An axis with no spread does not constrain the zoom. When neither axis
    /// has any spread the zoom is zero and everything lands on the padding
    /// corner.
    pub fn fit(coordinates: &[Coordinates], width: f64, height: f64, padding: f64) -> Self {
        let (min_lat, max_lat) = coordinates
            .iter()
            .map(|c| c.latitude)
            .minmax_by(f64::total_cmp)
            .into_option()
            .unwrap_or_default();
        let (min_lon, max_lon) = coordinates
            .iter()
            .map(|c| c.longitude)
            .minmax_by(f64::total_cmp)
            .into_option()
            .unwrap_or_default();

        let width_zoom = Some(max_lon - min_lon)
            .filter(|delta| delta.abs() > EPSILON)
            .map(|delta| (width - 2.0 * padding) / delta);
        let height_zoom = Some(max_lat - min_lat)
            .filter(|delta| delta.abs() > EPSILON)
            .map(|delta| (height - 2.0 * padding) / delta);

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(z), None) | (None, Some(z)) => z,
            (None, None) => 0.0,
        };
        log::debug!(
            "Projecting {} stops with zoom {zoom}.",
            coordinates.len()
        );

        Self {
            min_lon,
            max_lat,
            zoom,
            padding,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn project(&self, coordinates: Coordinates) -> Point {
        Point::new(
            (coordinates.longitude - self.min_lon) * self.zoom + self.padding,
            (self.max_lat - coordinates.latitude) * self.zoom + self.padding,
        )
    }
}
