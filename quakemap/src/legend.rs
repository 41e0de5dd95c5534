use crate::color::Color;
use crate::style::DEPTH_BANDS;

/// Corner of the map a control is anchored to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlPosition {
    /// Top left corner.
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom right corner.
    BottomRight,
}

/// Row of the legend: a color swatch with a label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    color: Color,
    label: String,
}

impl LegendEntry {
    /// Swatch color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Label next to the swatch.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Static panel explaining the marker colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    position: ControlPosition,
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// Legend of the depth color scale, one entry per [depth band](DEPTH_BANDS), anchored to
    /// the bottom right corner.
    pub fn depth() -> Self {
        let entries = DEPTH_BANDS
            .iter()
            .enumerate()
            .map(|(i, band)| {
                let label = match DEPTH_BANDS.get(i + 1) {
                    Some(next) => format!("{}–{} km", band.floor(), next.floor()),
                    None => format!("{}+ km", band.floor()),
                };

                LegendEntry {
                    color: band.color(),
                    label,
                }
            })
            .collect();

        Self {
            position: ControlPosition::BottomRight,
            entries,
        }
    }

    /// Corner the legend is anchored to.
    pub fn position(&self) -> ControlPosition {
        self.position
    }

    /// Entries from the shallowest to the deepest band.
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}
