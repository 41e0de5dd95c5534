use geojson::{Feature, Value};

use super::parse_feature_collection;
use crate::error::QuakeMapError;
use crate::geo::LatLon;

/// Earthquake record of the USGS feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    /// Description of the location, e.g. `10 km NE of Nowhere, Alaska`. The feed leaves it
    /// null for some events.
    pub place: Option<String>,
    /// Magnitude. The feed leaves it null for events that are not reviewed yet.
    pub magnitude: Option<f64>,
    /// Epicenter.
    pub position: LatLon,
    /// Depth of the hypocenter in km, third component of the point geometry.
    pub depth: f64,
}

impl EarthquakeFeature {
    /// Reads the earthquake from a GeoJSON feature. `index` is only used for error reporting.
    pub fn from_geojson(index: usize, feature: &Feature) -> Result<Self, QuakeMapError> {
        let malformed = |reason: &str| QuakeMapError::MalformedFeature {
            index,
            reason: reason.to_owned(),
        };

        let magnitude = match feature.property("mag") {
            Some(value) if !value.is_null() => Some(
                value
                    .as_f64()
                    .ok_or_else(|| malformed("`mag` is not a number"))?,
            ),
            _ => None,
        };
        let place = match feature.property("place") {
            Some(value) if !value.is_null() => Some(
                value
                    .as_str()
                    .ok_or_else(|| malformed("`place` is not a string"))?
                    .to_owned(),
            ),
            _ => None,
        };

        let Some(geometry) = &feature.geometry else {
            return Err(malformed("geometry is missing"));
        };
        let Value::Point(coordinates) = &geometry.value else {
            return Err(malformed("geometry is not a point"));
        };
        let (Some(position), Some(&depth)) =
            (LatLon::from_position(coordinates), coordinates.get(2))
        else {
            return Err(malformed("point must have longitude, latitude and depth"));
        };

        Ok(Self {
            place,
            magnitude,
            position,
            depth,
        })
    }
}

/// Parses an earthquake feed payload. Null `mag` and `place` are accepted, any other malformed
/// feature fails the whole payload.
pub fn parse_earthquakes(payload: &[u8]) -> Result<Vec<EarthquakeFeature>, QuakeMapError> {
    parse_feature_collection(payload)?
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| EarthquakeFeature::from_geojson(index, feature))
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::latlon;
    use crate::tests::{collection, earthquake, earthquakes_payload};

    #[test]
    fn parses_usgs_features() {
        let quakes = parse_earthquakes(&earthquakes_payload()).expect("valid payload");

        assert_eq!(quakes.len(), 3);
        assert_eq!(
            quakes[0],
            EarthquakeFeature {
                place: Some("10 km NE of Nowhere, Alaska".into()),
                magnitude: Some(5.2),
                position: latlon!(61.0, -150.0),
                depth: 45.0,
            }
        );
        assert_eq!(quakes[2].depth, -0.5);
    }

    #[test]
    fn empty_collection_is_not_an_error() {
        let quakes = parse_earthquakes(&collection(vec![])).expect("valid payload");
        assert!(quakes.is_empty());
    }

    #[test]
    fn null_magnitude_and_place_are_kept() {
        let mut unreviewed = earthquake("Somewhere", 1.0, [0.0, 0.0, 5.0]);
        unreviewed["properties"]["mag"] = serde_json::Value::Null;
        let mut unnamed = earthquake("Nowhere", 1.5, [2.0, 2.0, 7.0]);
        unnamed["properties"]
            .as_object_mut()
            .expect("properties object")
            .remove("place");
        let payload = collection(vec![
            earthquake("Fine", 2.0, [1.0, 1.0, 1.0]),
            unreviewed,
            unnamed,
        ]);

        let quakes = parse_earthquakes(&payload).expect("valid payload");
        assert_eq!(quakes.len(), 3);
        assert_eq!(quakes[1].magnitude, None);
        assert_eq!(quakes[1].place.as_deref(), Some("Somewhere"));
        assert_eq!(quakes[2].magnitude, Some(1.5));
        assert_eq!(quakes[2].place, None);
    }

    #[test]
    fn non_numeric_magnitude_fails_the_payload() {
        let mut broken = earthquake("Somewhere", 1.0, [0.0, 0.0, 5.0]);
        broken["properties"]["mag"] = json!("strong");
        let payload = collection(vec![earthquake("Fine", 2.0, [1.0, 1.0, 1.0]), broken]);

        assert_matches!(
            parse_earthquakes(&payload),
            Err(QuakeMapError::MalformedFeature { index: 1, .. })
        );
    }

    #[test]
    fn depth_is_required() {
        let mut flat = earthquake("Flat", 3.0, [0.0, 0.0, 0.0]);
        flat["geometry"] = json!({ "type": "Point", "coordinates": [10.0, 20.0] });

        assert_matches!(
            parse_earthquakes(&collection(vec![flat])),
            Err(QuakeMapError::MalformedFeature { index: 0, .. })
        );
    }

    #[test]
    fn non_point_geometry_is_rejected() {
        let mut line = earthquake("Line", 3.0, [0.0, 0.0, 0.0]);
        line["geometry"] = json!({ "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] });

        let error = parse_earthquakes(&collection(vec![line])).expect_err("must fail");
        assert_eq!(
            error.to_string(),
            "feature #0 is malformed: geometry is not a point"
        );
    }
}
