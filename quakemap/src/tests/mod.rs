//! GeoJSON payloads shared by the unit tests.

use serde_json::json;

/// Feature of the earthquake feed in the USGS format.
pub fn earthquake(place: &str, mag: f64, coordinates: [f64; 3]) -> serde_json::Value {
    json!({
        "type": "Feature",
        "properties": {
            "mag": mag,
            "place": place,
            "time": 1_700_000_000_000_i64,
            "type": "earthquake"
        },
        "geometry": {
            "type": "Point",
            "coordinates": coordinates
        },
        "id": format!("us{}", place.len())
    })
}

/// Feature collection payload with the given features.
pub fn collection(features: Vec<serde_json::Value>) -> Vec<u8> {
    json!({
        "type": "FeatureCollection",
        "metadata": { "title": "USGS All Earthquakes, Past Week" },
        "features": features
    })
    .to_string()
    .into_bytes()
}

/// Three earthquakes at different depths.
pub fn earthquakes_payload() -> Vec<u8> {
    collection(vec![
        earthquake("10 km NE of Nowhere, Alaska", 5.2, [-150.0, 61.0, 45.0]),
        earthquake("Off the coast of Honshu, Japan", 6.1, [142.4, 38.3, 95.5]),
        earthquake("3 km W of Cobb, CA", 0.8, [-122.76, 38.82, -0.5]),
    ])
}

/// Plate boundaries in the PB2002 format: one line string and one multi line string.
pub fn plates_payload() -> Vec<u8> {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "Name": "AF-AN", "PlateA": "AF", "PlateB": "AN" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-0.4379, -54.8518], [-0.038826, -54.6772], [0.443182, -54.4512]]
                }
            },
            {
                "type": "Feature",
                "properties": { "Name": "PA-NA" },
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [
                        [[-125.0, 40.0], [-124.0, 40.5]],
                        [[-123.0, 41.0], [-122.5, 41.2], [-122.0, 41.5]]
                    ]
                }
            }
        ]
    })
    .to_string()
    .into_bytes()
}
