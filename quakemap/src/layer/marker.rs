use std::fmt;

use crate::feed::EarthquakeFeature;
use crate::geo::{LatLon, Point2};
use crate::style::MarkerStyle;
use crate::view::Viewport;

/// Radius in pixels within which tiny markers still react to clicks.
const MIN_HIT_RADIUS: f64 = 3.0;
const UNKNOWN_PLACE: &str = "Unknown location";

/// Text shown when a marker is clicked: a title and a few lines under it.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    title: String,
    lines: Vec<String>,
}

impl Popup {
    /// Creates a popup with the given title and lines.
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    /// Popup of an earthquake: the place, the magnitude and the depth. Values missing from the
    /// feed are shown as unknown.
    pub fn for_earthquake(feature: &EarthquakeFeature) -> Self {
        let magnitude = match feature.magnitude {
            Some(magnitude) => magnitude.to_string(),
            None => "unknown".to_owned(),
        };

        Self::new(
            feature.place.as_deref().unwrap_or(UNKNOWN_PLACE),
            vec![
                format!("Magnitude: {magnitude}"),
                format!("Depth: {} km", feature.depth),
            ],
        )
    }

    /// Title of the popup.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lines of the popup body.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }

        Ok(())
    }
}

/// Circle of a fixed pixel radius drawn at a geographic point.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    position: LatLon,
    style: MarkerStyle,
    popup: Popup,
}

impl CircleMarker {
    /// Creates a new marker.
    pub fn new(position: LatLon, style: MarkerStyle, popup: Popup) -> Self {
        Self {
            position,
            style,
            popup,
        }
    }

    /// Marker of an earthquake, styled by its magnitude and depth. An earthquake without a
    /// magnitude gets a zero radius.
    pub fn for_earthquake(feature: &EarthquakeFeature) -> Self {
        Self::new(
            feature.position,
            MarkerStyle::for_earthquake(feature.magnitude.unwrap_or(0.0), feature.depth),
            Popup::for_earthquake(feature),
        )
    }

    /// Center of the marker.
    pub fn position(&self) -> LatLon {
        self.position
    }

    /// Appearance of the marker.
    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    /// Popup bound to the marker.
    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    /// Returns true if the screen point is inside the circle as drawn in the viewport.
    pub fn contains(&self, view: &Viewport, point: Point2) -> bool {
        let center = view.latlon_to_screen(self.position);
        center.distance(&point) <= self.style.radius.max(MIN_HIT_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::latlon;
    use crate::view::Size;

    fn feature(magnitude: f64, depth: f64) -> EarthquakeFeature {
        EarthquakeFeature {
            place: Some("10 km NE of Nowhere, Alaska".into()),
            magnitude: Some(magnitude),
            position: latlon!(61.0, -150.0),
            depth,
        }
    }

    #[test]
    fn earthquake_popup_text() {
        let popup = Popup::for_earthquake(&feature(5.2, 45.0));
        assert_snapshot!(popup.to_string(), @r"
        10 km NE of Nowhere, Alaska
        Magnitude: 5.2
        Depth: 45 km
        ");
    }

    #[test]
    fn popup_keeps_fractional_depth() {
        let popup = Popup::for_earthquake(&feature(0.85, 7.3));
        assert_eq!(popup.lines(), ["Magnitude: 0.85", "Depth: 7.3 km"]);
    }

    #[test]
    fn unknown_values_in_popup() {
        let unknown = EarthquakeFeature {
            place: None,
            magnitude: None,
            ..feature(1.0, 12.5)
        };

        assert_snapshot!(Popup::for_earthquake(&unknown).to_string(), @r"
        Unknown location
        Magnitude: unknown
        Depth: 12.5 km
        ");
        assert_eq!(CircleMarker::for_earthquake(&unknown).style().radius, 0.0);
    }

    #[test]
    fn hit_test_uses_radius() {
        let view = Viewport::new(latlon!(61.0, -150.0), 4.0).with_size(Size::new(400.0, 400.0));
        let marker = CircleMarker::for_earthquake(&feature(5.0, 20.0));

        assert!(marker.contains(&view, Point2::new(200.0, 200.0)));
        assert!(marker.contains(&view, Point2::new(219.0, 200.0)));
        assert!(!marker.contains(&view, Point2::new(221.0, 200.0)));
    }

    #[test]
    fn zero_magnitude_is_still_clickable() {
        let view = Viewport::new(latlon!(61.0, -150.0), 4.0).with_size(Size::new(400.0, 400.0));
        let marker = CircleMarker::for_earthquake(&feature(0.0, 20.0));

        assert_eq!(marker.style().radius, 0.0);
        assert!(marker.contains(&view, Point2::new(202.0, 200.0)));
    }
}
