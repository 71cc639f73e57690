//! Defines the heatmap chart model handed to an external renderer.

use serde::Serialize;
use simheat_core::{FilteredSimilarity, Label};
use tracing::{debug, info};

use crate::color::{reversed_yl_or_rd_9, LinearColorMapper};
use crate::config::{PlotConfig, PlotStyle};
use crate::error::{ChartError, ChartResult};

/// Field name of the first label in cells and tooltip templates.
pub const LABEL_1_FIELD: &str = "label_1";
/// Field name of the second label in cells and tooltip templates.
pub const LABEL_2_FIELD: &str = "label_2";
/// Field name of the similarity score in cells and tooltip templates.
pub const SCORE_FIELD: &str = "sim";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font_size: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisLocation {
    Above,
    Below,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub location: AxisLocation,
    /// Category order along the axis.
    pub factors: Vec<Label>,
    pub axis_line_visible: bool,
    pub major_ticks_visible: bool,
    pub label_standoff: u32,
    pub label_font_size: String,
    /// Label rotation in radians.
    pub label_orientation: f64,
}

/// One unit-sized rectangle of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectCell {
    pub label_1: Label,
    pub label_2: Label,
    pub sim: f32,
    pub width: f32,
    pub height: f32,
    pub fill_color: String,
}

/// A `(name, template)` tooltip row; `@field` placeholders refer to cell fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipField {
    pub name: String,
    pub template: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Save,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toolbar {
    pub tools: Vec<Tool>,
    pub location: AxisLocation,
}

/// Rectangular heatmap of pairwise similarity scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapChart {
    pub title: Title,
    pub width: u32,
    pub height: u32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub color_mapper: LinearColorMapper,
    pub cells: Vec<RectCell>,
    pub tooltips: Vec<TooltipField>,
    pub toolbar: Toolbar,
    pub min_border_right: u32,
}

impl HeatmapChart {
    /// Builds the chart for an already filtered similarity result.
    ///
    /// Returns `ChartError::EmptyTable` when nothing survived filtering, since the
    /// color scale would have no bounds.
    pub fn build(
        title: &str,
        filtered: &FilteredSimilarity,
        config: &PlotConfig,
        style: &PlotStyle,
    ) -> ChartResult<Self> {
        config.validate()?;
        let (low, high) = filtered.table.score_range().ok_or(ChartError::EmptyTable)?;
        let color_mapper = LinearColorMapper::new(reversed_yl_or_rd_9(), low, high)?;
        debug!(low, high, "Color scale bounds");

        let cells: Vec<RectCell> = filtered
            .table
            .iter()
            .map(|record| RectCell {
                label_1: record.label_1.clone(),
                label_2: record.label_2.clone(),
                sim: record.score,
                width: 1.0,
                height: 1.0,
                fill_color: color_mapper.map(record.score).to_string(),
            })
            .collect();

        let x_axis = Axis {
            location: AxisLocation::Above,
            factors: filtered.labels_1.clone(),
            axis_line_visible: style.axis_line_visible,
            major_ticks_visible: style.major_ticks_visible,
            label_standoff: style.label_standoff,
            label_font_size: config.xaxis_font_size.clone(),
            label_orientation: style.xaxis_label_orientation,
        };
        let y_axis = Axis {
            location: AxisLocation::Left,
            factors: filtered.labels_2.iter().rev().cloned().collect(),
            axis_line_visible: style.axis_line_visible,
            major_ticks_visible: style.major_ticks_visible,
            label_standoff: style.label_standoff,
            label_font_size: config.yaxis_font_size.clone(),
            label_orientation: 0.0,
        };

        let tooltips = vec![
            TooltipField {
                name: "pair".to_string(),
                template: format!("@{} ||| @{}", LABEL_1_FIELD, LABEL_2_FIELD),
            },
            TooltipField {
                name: SCORE_FIELD.to_string(),
                template: format!("@{}", SCORE_FIELD),
            },
        ];

        info!(title, cells = cells.len(), "Built similarity heatmap");
        Ok(HeatmapChart {
            title: Title {
                text: title.to_string(),
                font_size: style.title_font_size.clone(),
            },
            width: config.width,
            height: config.height,
            x_axis,
            y_axis,
            color_mapper,
            cells,
            tooltips,
            toolbar: Toolbar {
                tools: vec![Tool::Save],
                location: AxisLocation::Below,
            },
            min_border_right: style.min_border_right,
        })
    }

    /// Looks up the cell for a label pair.
    pub fn cell(&self, label_1: &str, label_2: &str) -> Option<&RectCell> {
        self.cells
            .iter()
            .find(|c| c.label_1 == label_1 && c.label_2 == label_2)
    }

    /// Renders the tooltip rows for one cell as `(name, text)` pairs.
    pub fn tooltip_for(&self, cell: &RectCell) -> Vec<(String, String)> {
        self.tooltips
            .iter()
            .map(|field| (field.name.clone(), render_template(&field.template, cell)))
            .collect()
    }

    /// Serializes the chart document for an external renderer.
    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Substitutes `@field` placeholders in a single left-to-right pass, so text
/// inserted from a cell is never scanned again. Unknown `@` tokens are kept as-is.
fn render_template(template: &str, cell: &RectCell) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('@') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        if let Some(tail) = after.strip_prefix(LABEL_1_FIELD) {
            out.push_str(&cell.label_1);
            rest = tail;
        } else if let Some(tail) = after.strip_prefix(LABEL_2_FIELD) {
            out.push_str(&cell.label_2);
            rest = tail;
        } else if let Some(tail) = after.strip_prefix(SCORE_FIELD) {
            out.push_str(&format!("{:.3}", cell.sim));
            rest = tail;
        } else {
            out.push('@');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use simheat_core::{similarity_filter, Embedding};

    fn filtered() -> FilteredSimilarity {
        let e: Vec<Embedding> = vec![
            vec![1.0f32, 0.0, 0.0].into(),
            vec![1.0f32, 1.0, 0.0].into(),
            vec![1.0f32, 1.0, 1.0].into(),
        ];
        let l: Vec<Label> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        similarity_filter(&e, &e, &l, &l, 0.0).unwrap()
    }

    #[test]
    fn test_axes_follow_filtered_labels() {
        let chart =
            HeatmapChart::build("t", &filtered(), &PlotConfig::default(), &PlotStyle::default()).unwrap();
        assert_eq!(chart.x_axis.factors, vec!["a", "b", "c"]);
        assert_eq!(chart.y_axis.factors, vec!["c", "b", "a"]);
        assert_eq!(chart.x_axis.location, AxisLocation::Above);
        assert!(!chart.x_axis.axis_line_visible);
        assert!(!chart.y_axis.major_ticks_visible);
        assert_eq!(chart.y_axis.label_standoff, 16);
    }

    #[test]
    fn test_cells_and_colors() {
        let chart =
            HeatmapChart::build("t", &filtered(), &PlotConfig::default(), &PlotStyle::default()).unwrap();
        assert_eq!(chart.cells.len(), 9);
        assert!(chart.cells.iter().all(|c| c.width == 1.0 && c.height == 1.0));
        // Diagonal holds the maximum score.
        assert_eq!(chart.cell("b", "b").unwrap().fill_color, "#800026");
        // cos(a, c) ~ 0.577 is the minimum.
        assert_eq!(chart.cell("a", "c").unwrap().fill_color, "#ffffcc");
        assert_eq!(chart.color_mapper.high(), 1.0);
    }

    #[test]
    fn test_tooltip_rendering() {
        let chart =
            HeatmapChart::build("t", &filtered(), &PlotConfig::default(), &PlotStyle::default()).unwrap();
        let cell = chart.cell("a", "b").unwrap();
        let rows = chart.tooltip_for(cell);
        assert_eq!(rows[0], ("pair".to_string(), "a ||| b".to_string()));
        assert_eq!(rows[1], ("sim".to_string(), "0.707".to_string()));
    }

    #[test]
    fn test_tooltip_keeps_at_signs_in_labels() {
        let e: Vec<Embedding> = vec![vec![1.0f32, 0.0].into(), vec![1.0f32, 1.0].into()];
        let l: Vec<Label> = vec!["user@sim.com".to_string(), "@label_2".to_string()];
        let filtered = similarity_filter(&e, &e, &l, &l, 0.0).unwrap();
        let chart =
            HeatmapChart::build("t", &filtered, &PlotConfig::default(), &PlotStyle::default()).unwrap();

        let cell = chart.cell("user@sim.com", "@label_2").unwrap();
        let rows = chart.tooltip_for(cell);
        assert_eq!(rows[0].1, "user@sim.com ||| @label_2");
        assert_eq!(rows[1].1, "0.707");
    }

    #[test]
    fn test_render_template_leaves_unknown_tokens() {
        let cell = RectCell {
            label_1: "x".to_string(),
            label_2: "y".to_string(),
            sim: 0.5,
            width: 1.0,
            height: 1.0,
            fill_color: "#ffffcc".to_string(),
        };
        assert_eq!(render_template("@other @label_1@", &cell), "@other x@");
        assert_eq!(render_template("@sim", &cell), "0.500");
    }

    #[test]
    fn test_toolbar_only_has_save() {
        let chart =
            HeatmapChart::build("t", &filtered(), &PlotConfig::default(), &PlotStyle::default()).unwrap();
        assert_eq!(chart.toolbar.tools, vec![Tool::Save]);
        assert_eq!(chart.toolbar.location, AxisLocation::Below);
        assert_eq!(chart.min_border_right, 300);
        assert_eq!(chart.title.font_size, "12pt");
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let e: Vec<Embedding> = vec![vec![1.0f32, 0.0].into(), vec![0.0f32, 1.0].into()];
        let l: Vec<Label> = vec!["a".to_string(), "b".to_string()];
        let empty = similarity_filter(&e, &e, &l, &l, 0.0).unwrap();
        assert!(matches!(
            HeatmapChart::build("t", &empty, &PlotConfig::default(), &PlotStyle::default()),
            Err(ChartError::EmptyTable)
        ));
    }

    #[test]
    fn test_json_document() {
        let chart =
            HeatmapChart::build("Scores", &filtered(), &PlotConfig::default(), &PlotStyle::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
        assert_eq!(value["title"]["text"], "Scores");
        assert_eq!(value["x_axis"]["location"], "above");
        assert_eq!(value["toolbar"]["tools"][0], "save");
        assert_eq!(value["cells"].as_array().unwrap().len(), 9);
        assert_eq!(value["width"], 1200);
    }
}
