pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod visualize;

pub use chart::HeatmapChart;
pub use color::LinearColorMapper;
pub use config::{PlotConfig, PlotStyle};
pub use error::{ChartError, ChartResult};
pub use visualize::{visualize_similarity, visualize_similarity_with};
