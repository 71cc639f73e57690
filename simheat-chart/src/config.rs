//! Plot configuration: caller-tunable sizes plus the fixed styling constants.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const FONT_SIZE_UNITS: [&str; 3] = ["pt", "px", "em"];

/// Caller-tunable plot parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// CSS-style font size for x-axis labels, e.g. `"8pt"`.
    pub xaxis_font_size: String,
    /// CSS-style font size for y-axis labels.
    pub yaxis_font_size: String,
}

impl PlotConfig {
    pub fn new(
        width: u32,
        height: u32,
        xaxis_font_size: impl Into<String>,
        yaxis_font_size: impl Into<String>,
    ) -> Self {
        PlotConfig {
            width,
            height,
            xaxis_font_size: xaxis_font_size.into(),
            yaxis_font_size: yaxis_font_size.into(),
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> ChartResult<()> {
        if self.width == 0 {
            return Err(ChartError::Configuration("width must be greater than 0".to_string()));
        }
        if self.height == 0 {
            return Err(ChartError::Configuration("height must be greater than 0".to_string()));
        }
        validate_font_size("xaxis_font_size", &self.xaxis_font_size)?;
        validate_font_size("yaxis_font_size", &self.yaxis_font_size)?;
        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: 1200,
            height: 600,
            xaxis_font_size: "8pt".to_string(),
            yaxis_font_size: "8pt".to_string(),
        }
    }
}

/// Accepts `<positive number><unit>` with a unit from `FONT_SIZE_UNITS`.
fn validate_font_size(field: &str, value: &str) -> ChartResult<()> {
    let number = FONT_SIZE_UNITS
        .iter()
        .find_map(|unit| value.strip_suffix(unit))
        .ok_or_else(|| {
            ChartError::Configuration(format!(
                "{} must end in one of {:?}, got {:?}",
                field, FONT_SIZE_UNITS, value
            ))
        })?;
    match number.parse::<f32>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(()),
        _ => Err(ChartError::Configuration(format!(
            "{} must be a positive size, got {:?}",
            field, value
        ))),
    }
}

/// Styling that is not exposed as a parameter of `visualize_similarity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub title_font_size: String,
    pub axis_line_visible: bool,
    pub major_ticks_visible: bool,
    pub label_standoff: u32,
    /// Rotation of x-axis labels, in radians.
    pub xaxis_label_orientation: f64,
    /// Extra room on the right for long labels.
    pub min_border_right: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            title_font_size: "12pt".to_string(),
            axis_line_visible: false,
            major_ticks_visible: false,
            label_standoff: 16,
            xaxis_label_orientation: std::f64::consts::FRAC_PI_4,
            min_border_right: 300,
        }
    }
}
