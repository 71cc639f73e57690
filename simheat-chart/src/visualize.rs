use simheat_core::{similarity_filter_with, Embedding, FilterConfig, Label};
use tracing::info;

use crate::chart::HeatmapChart;
use crate::config::{PlotConfig, PlotStyle};
use crate::error::{ChartError, ChartResult};

fn check_counts(set: &str, embeddings: &[Embedding], labels: &[Label]) -> ChartResult<()> {
    if embeddings.len() != labels.len() {
        return Err(ChartError::PreconditionViolation(format!(
            "{} has {} embeddings but {} labels",
            set,
            embeddings.len(),
            labels.len()
        )));
    }
    Ok(())
}

/// Filters the self-similarity of two embedding sets at `threshold` and builds a
/// heatmap of the surviving pairs.
///
/// Fails with `ChartError::PreconditionViolation` before any computation if a
/// set's embedding and label counts differ.
#[allow(clippy::too_many_arguments)]
pub fn visualize_similarity(
    embeddings_1: &[Embedding],
    embeddings_2: &[Embedding],
    labels_1: &[Label],
    labels_2: &[Label],
    plot_title: &str,
    threshold: f32,
    plot_width: u32,
    plot_height: u32,
    xaxis_font_size: &str,
    yaxis_font_size: &str,
) -> ChartResult<HeatmapChart> {
    visualize_similarity_with(
        embeddings_1,
        embeddings_2,
        labels_1,
        labels_2,
        plot_title,
        &FilterConfig::self_similarity(threshold),
        &PlotConfig::new(plot_width, plot_height, xaxis_font_size, yaxis_font_size),
    )
}

/// Same as [`visualize_similarity`] with explicit filter and plot configuration.
pub fn visualize_similarity_with(
    embeddings_1: &[Embedding],
    embeddings_2: &[Embedding],
    labels_1: &[Label],
    labels_2: &[Label],
    plot_title: &str,
    filter: &FilterConfig,
    plot: &PlotConfig,
) -> ChartResult<HeatmapChart> {
    check_counts("set 1", embeddings_1, labels_1)?;
    check_counts("set 2", embeddings_2, labels_2)?;
    plot.validate()?;

    info!(
        title = plot_title,
        set_1 = embeddings_1.len(),
        set_2 = embeddings_2.len(),
        "Visualizing similarity"
    );
    let filtered = similarity_filter_with(embeddings_1, embeddings_2, labels_1, labels_2, filter)?;
    HeatmapChart::build(plot_title, &filtered, plot, &PlotStyle::default())
}
