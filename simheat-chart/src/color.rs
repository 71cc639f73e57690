//! Palette and linear value-to-color mapping for heatmap cells.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// 9-step yellow-orange-red sequential palette, darkest first.
pub const YL_OR_RD_9: [&str; 9] = [
    "#800026", "#bd0026", "#e31a1c", "#fc4e2a", "#fd8d3c", "#feb24c", "#fed976", "#ffeda0",
    "#ffffcc",
];

/// `YL_OR_RD_9` reversed, so the lightest color is first and the darkest last.
pub fn reversed_yl_or_rd_9() -> Vec<String> {
    YL_OR_RD_9.iter().rev().map(|c| c.to_string()).collect()
}

/// Maps a scalar linearly onto a palette between `low` and `high`.
///
/// The range is split into `palette.len()` equal bins. Values below `low` take the
/// first color, values at or above `high` the last one. When `low == high` every
/// value maps to the last color.
///
/// Invariants: non-empty palette, finite bounds with `low <= high`. Deserialization
/// goes through the same checks as [`LinearColorMapper::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColorMapper")]
pub struct LinearColorMapper {
    palette: Vec<String>,
    low: f32,
    high: f32,
}

/// Unchecked wire form of [`LinearColorMapper`].
#[derive(Deserialize)]
struct RawColorMapper {
    palette: Vec<String>,
    low: f32,
    high: f32,
}

impl TryFrom<RawColorMapper> for LinearColorMapper {
    type Error = ChartError;

    fn try_from(raw: RawColorMapper) -> ChartResult<Self> {
        LinearColorMapper::new(raw.palette, raw.low, raw.high)
    }
}

impl LinearColorMapper {
    pub fn new(palette: Vec<String>, low: f32, high: f32) -> ChartResult<Self> {
        if palette.is_empty() {
            return Err(ChartError::Configuration("palette must not be empty".to_string()));
        }
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(ChartError::Configuration(format!(
                "color scale bounds must be finite with low <= high, got [{}, {}]",
                low, high
            )));
        }
        Ok(LinearColorMapper { palette, low, high })
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn low(&self) -> f32 {
        self.low
    }

    pub fn high(&self) -> f32 {
        self.high
    }

    /// Palette index for `value`.
    pub fn index_of(&self, value: f32) -> usize {
        let last = self.palette.len() - 1;
        if value.is_nan() || value < self.low {
            return 0;
        }
        if value >= self.high {
            return last;
        }
        let normalized = (value - self.low) / (self.high - self.low);
        ((normalized * self.palette.len() as f32).floor() as usize).min(last)
    }

    pub fn map(&self, value: f32) -> &str {
        &self.palette[self.index_of(value)]
    }
}
