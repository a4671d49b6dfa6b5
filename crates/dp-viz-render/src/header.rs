use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

/// Vertical room reserved above the plot area for the title.
pub fn title_height(config: &VizConfig) -> f64 {
    if config.title.show { config.font.title_size * 1.2 + 10.0 } else { 0.0 }
}

/// Draw the chart title centered above the plot area.
pub fn draw_title(canvas: &mut Canvas, area: &PlotArea, title: &str, config: &VizConfig) {
    if !config.title.show || title.is_empty() {
        return;
    }
    let style = TextStyle {
        size: config.font.title_size,
        weight: if config.title.bold { FontWeight::Bold } else { FontWeight::Regular },
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Alphabetic,
        ..Default::default()
    };
    canvas.text(area.left + area.width / 2.0, area.top - 8.0, title, &style);
}
