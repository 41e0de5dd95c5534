use crate::feed::PlateBoundaryFeature;
use crate::geo::LatLon;
use crate::style::{PathStyle, PLATE_BOUNDARY_STYLE};

/// Set of polylines drawn with the same style.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatePath {
    lines: Vec<Vec<LatLon>>,
    style: PathStyle,
}

impl PlatePath {
    /// Creates a new path.
    pub fn new(lines: Vec<Vec<LatLon>>, style: PathStyle) -> Self {
        Self { lines, style }
    }

    /// Path of a plate boundary in the [plate boundary style](PLATE_BOUNDARY_STYLE).
    pub fn for_boundary(feature: &PlateBoundaryFeature) -> Self {
        Self::new(feature.lines.clone(), PLATE_BOUNDARY_STYLE)
    }

    /// Polylines of the path.
    pub fn lines(&self) -> &[Vec<LatLon>] {
        &self.lines
    }

    /// Appearance of the path.
    pub fn style(&self) -> &PathStyle {
        &self.style
    }
}
