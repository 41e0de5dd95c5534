use geojson::{Feature, Geometry, Value};

use super::parse_feature_collection;
use crate::error::QuakeMapError;
use crate::geo::LatLon;

/// Plate boundary record. Only the geometry is used: every line string and every polygon ring
/// becomes one polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateBoundaryFeature {
    /// Polylines of the boundary.
    pub lines: Vec<Vec<LatLon>>,
}

impl PlateBoundaryFeature {
    /// Reads the boundary from a GeoJSON feature. `index` is only used for error reporting.
    pub fn from_geojson(index: usize, feature: &Feature) -> Result<Self, QuakeMapError> {
        let Some(geometry) = &feature.geometry else {
            return Err(QuakeMapError::MalformedFeature {
                index,
                reason: "geometry is missing".into(),
            });
        };

        let mut lines = vec![];
        collect_lines(index, geometry, &mut lines)?;

        Ok(Self { lines })
    }
}

fn collect_lines(
    index: usize,
    geometry: &Geometry,
    lines: &mut Vec<Vec<LatLon>>,
) -> Result<(), QuakeMapError> {
    match &geometry.value {
        Value::LineString(positions) => lines.push(to_line(index, positions)?),
        Value::MultiLineString(parts) | Value::Polygon(parts) => {
            for positions in parts {
                lines.push(to_line(index, positions)?);
            }
        }
        Value::MultiPolygon(polygons) => {
            for positions in polygons.iter().flatten() {
                lines.push(to_line(index, positions)?);
            }
        }
        Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_lines(index, geometry, lines)?;
            }
        }
        Value::Point(_) => return Err(QuakeMapError::UnsupportedGeometry("Point")),
        Value::MultiPoint(_) => return Err(QuakeMapError::UnsupportedGeometry("MultiPoint")),
    }

    Ok(())
}

fn to_line(index: usize, positions: &[Vec<f64>]) -> Result<Vec<LatLon>, QuakeMapError> {
    positions
        .iter()
        .map(|position| {
            LatLon::from_position(position).ok_or_else(|| QuakeMapError::MalformedFeature {
                index,
                reason: "position must have longitude and latitude".into(),
            })
        })
        .collect()
}

/// Parses a plate boundaries feed payload. Any malformed feature fails the whole payload.
pub fn parse_plate_boundaries(payload: &[u8]) -> Result<Vec<PlateBoundaryFeature>, QuakeMapError> {
    parse_feature_collection(payload)?
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| PlateBoundaryFeature::from_geojson(index, feature))
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::latlon;
    use crate::tests::{collection, plates_payload};

    #[test]
    fn parses_line_strings() {
        let plates = parse_plate_boundaries(&plates_payload()).expect("valid payload");

        assert_eq!(plates.len(), 2);
        assert_eq!(plates[0].lines.len(), 1);
        assert_eq!(plates[0].lines[0][0], latlon!(-54.8518, -0.4379));
        assert_eq!(plates[1].lines.len(), 2);
        assert_eq!(plates[1].lines[1].len(), 3);
    }

    #[test]
    fn polygon_rings_become_lines() {
        let payload = collection(vec![json!({
            "type": "Feature",
            "properties": null,
            "geometry": {
                "type": "Polygon",
                "coordinates": [
                    [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]],
                    [[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 2.0]]
                ]
            }
        })]);

        let plates = parse_plate_boundaries(&payload).expect("valid payload");
        assert_eq!(plates[0].lines.len(), 2);
        assert_eq!(plates[0].lines[0].len(), 4);
    }

    #[test]
    fn points_are_not_boundaries() {
        let payload = collection(vec![json!({
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
        })]);

        assert_matches!(
            parse_plate_boundaries(&payload),
            Err(QuakeMapError::UnsupportedGeometry("Point"))
        );
    }
}
