use dp_viz::BarChartArtifact;

use crate::RenderError;
use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::header::draw_title;
use crate::layout::axes::Axis;
use crate::layout::legend::{self, LegendEntry};
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::{draw_axes, draw_panel};
use crate::primitives::*;

pub fn render(artifact: &BarChartArtifact, config: &VizConfig) -> crate::Result<String> {
    let n = artifact.len();
    if n == 0 {
        return Ok(empty_svg());
    }
    let values = &artifact.values[..n];
    let probs = &artifact.probabilities[..n];
    if let Some(bad) = values.iter().chain(probs).find(|v| !v.is_finite()) {
        return Err(RenderError::Layout(format!("cannot place non-finite value {bad}")));
    }

    let discrete = artifact.is_discrete();
    let spacing = if discrete { 1.0 } else { min_spacing(values).unwrap_or(1.0) };
    let bar_w = config.bar.width_fraction.clamp(0.05, 1.0) * spacing;

    let x_min = values.iter().copied().fold(f64::INFINITY, f64::min) - bar_w / 2.0;
    let x_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max) + bar_w / 2.0;
    let pad = (x_max - x_min) * 0.05;
    let x_axis = if discrete {
        Axis::integer(x_min - pad, x_max + pad, 8)
    } else {
        Axis::auto_linear(x_min - pad, x_max + pad, 6)
    }
    .with_label(&artifact.x_label);

    let y_top = probs.iter().copied().fold(0.0_f64, f64::max);
    let y_top = if y_top > 0.0 { y_top * 1.05 } else { 1.0 };
    let y_axis = Axis::auto_linear(0.0, y_top, 5).with_label(&artifact.y_label);

    let mut canvas = Canvas::new(config.figure.width, config.figure.height)?
        .with_background(config.panel.figure_background)
        .with_font_family(&config.font.family);

    let area = PlotArea::auto(&canvas, &y_axis, &x_axis, config);
    draw_title(&mut canvas, &area, &artifact.title, config);
    draw_panel(&mut canvas, &area, &x_axis, &y_axis, config);

    let color = config.bar_color();
    let bar_style = Style {
        fill: Some(color),
        stroke: config.bar.edge_color,
        stroke_width: config.bar.edge_width,
        opacity: config.bar.alpha.clamp(0.0, 1.0),
    };

    canvas.push_clip(area.left, area.top, area.width, area.height);
    let py_base = y_axis.data_to_pixel(0.0, area.bottom(), area.top);
    for (&x, &p) in values.iter().zip(probs) {
        let px_lo = x_axis.data_to_pixel(x - bar_w / 2.0, area.left, area.right());
        let px_hi = x_axis.data_to_pixel(x + bar_w / 2.0, area.left, area.right());
        let py_top = y_axis.data_to_pixel(p, area.bottom(), area.top);
        canvas.rect(px_lo, py_top, px_hi - px_lo, py_base - py_top, &bar_style);
    }
    canvas.pop_clip();

    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    if config.legend.show && !artifact.label.is_empty() {
        legend::draw_legend(
            &mut canvas,
            &area,
            &[LegendEntry { label: artifact.label.clone(), color, opacity: bar_style.opacity }],
            config.font.size,
            config.legend.frame,
        );
    }

    Ok(canvas.finish_svg())
}

/// Smallest gap between distinct values, if there are at least two.
fn min_spacing(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup_by(|a, b| (*a - *b).abs() < 1e-12);
    sorted.windows(2).map(|w| w[1] - w[0]).min_by(f64::total_cmp)
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="160" height="50"><text x="10" y="30">No values to plot</text></svg>"#.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_prob::{DistributionSpec, Evaluator, Method, ValuePolicy, inclusive_range};

    fn artifact(spec: DistributionSpec, values: &[f64], policy: ValuePolicy) -> BarChartArtifact {
        let result = Evaluator::new(policy).evaluate(&spec, values).unwrap();
        BarChartArtifact::new(&spec, &result, policy, Method::Statrs)
    }

    fn bars_in(svg: &str) -> usize {
        let start = svg.find("clip-path=").unwrap();
        let end = start + svg[start..].find("</g>").unwrap();
        svg[start..end].matches("<rect").count()
    }

    #[test]
    fn one_bar_per_value() {
        let art = artifact(
            DistributionSpec::binomial(5, 0.5).unwrap(),
            &inclusive_range(0, 5),
            ValuePolicy::Reject,
        );
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert_eq!(bars_in(&svg), 6);
        assert!(svg.contains("Binomial Distribution"));
        assert!(svg.contains("Binomial(n=5, p=0.5)"));
        assert!(svg.contains(">Values</text>"));
        assert!(svg.contains(">Probability</text>"));
        assert!(svg.contains("opacity=\"0.700\""));
    }

    #[test]
    fn filtered_values_are_not_drawn() {
        let art = artifact(
            DistributionSpec::geometric(0.3).unwrap(),
            &inclusive_range(-3, 4),
            ValuePolicy::Filter,
        );
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert_eq!(bars_in(&svg), 5);
    }

    #[test]
    fn uniform_uses_density_label() {
        let art = artifact(
            DistributionSpec::uniform(0.0, 1.0).unwrap(),
            &[0.0, 0.25, 0.5, 0.75, 1.0],
            ValuePolicy::Reject,
        );
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert!(svg.contains(">Density</text>"));
        assert_eq!(bars_in(&svg), 5);
    }

    #[test]
    fn empty_artifact_placeholder() {
        let art = artifact(DistributionSpec::poisson(2.0).unwrap(), &[], ValuePolicy::Reject);
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert!(svg.contains("No values to plot"));
    }

    #[test]
    fn non_finite_is_layout_error() {
        let mut art =
            artifact(DistributionSpec::poisson(2.0).unwrap(), &[0.0, 1.0], ValuePolicy::Reject);
        art.probabilities[1] = f64::NAN;
        assert!(matches!(render(&art, &VizConfig::default()), Err(RenderError::Layout(_))));
    }

    #[test]
    fn min_spacing_ignores_duplicates() {
        assert_eq!(min_spacing(&[0.5, 0.0, 0.5, 2.0]), Some(0.5));
        assert_eq!(min_spacing(&[1.0]), None);
    }

    #[test]
    fn themes_render() {
        let art = artifact(
            DistributionSpec::poisson(3.0).unwrap(),
            &inclusive_range(0, 10),
            ValuePolicy::Reject,
        );
        for name in crate::theme::BuiltinTheme::NAMES {
            let config = crate::theme::BuiltinTheme::parse(name).unwrap().base_config();
            let svg = render(&art, &config).unwrap();
            assert_eq!(bars_in(&svg), 11);
        }
    }
}
