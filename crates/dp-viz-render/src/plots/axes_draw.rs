use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::{PlotArea, y_tick_label_width};
use crate::primitives::*;

/// Panel background and grid; drawn before the data.
pub fn draw_panel(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    config: &VizConfig,
) {
    canvas.rect(area.left, area.top, area.width, area.height, &Style::filled(config.panel.background));

    if !config.grid.show {
        return;
    }
    let grid_style = LineStyle {
        color: config.grid.color.with_alpha(config.grid.alpha),
        width: config.grid.width,
        dash: config.grid.dash.clone(),
    };
    for &val in &x_axis.tick_positions {
        let px = x_axis.data_to_pixel(val, area.left, area.right());
        if px >= area.left - 0.5 && px <= area.right() + 0.5 {
            canvas.line(px, area.top, px, area.bottom(), &grid_style);
        }
    }
    for &val in &y_axis.tick_positions {
        let py = y_axis.data_to_pixel(val, area.bottom(), area.top);
        if py >= area.top - 0.5 && py <= area.bottom() + 0.5 {
            canvas.line(area.left, py, area.right(), py, &grid_style);
        }
    }
}

/// Frame, ticks, tick labels and axis labels; drawn after the data.
pub fn draw_axes(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    config: &VizConfig,
) {
    let frame_style = LineStyle::solid(config.axes.frame_color, 0.8);
    let tick_style_line = LineStyle::solid(config.axes.tick_color, 0.6);
    let minor_tick_style = LineStyle::solid(config.axes.tick_color, 0.4);

    let inward = config.axes.tick_direction == "in";
    let tl = config.axes.tick_length;
    let mtl = config.axes.minor_tick_length;

    if config.axes.show_frame {
        canvas.line(area.left, area.bottom(), area.right(), area.bottom(), &frame_style);
        canvas.line(area.left, area.top, area.left, area.bottom(), &frame_style);
        if config.axes.full_frame {
            canvas.line(area.left, area.top, area.right(), area.top, &frame_style);
            canvas.line(area.right(), area.top, area.right(), area.bottom(), &frame_style);
        }
    }

    let tick_label_style = TextStyle {
        size: config.font.tick_size,
        color: config.axes.tick_color,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };

    // --- X axis ticks ---
    for (i, &val) in x_axis.tick_positions.iter().enumerate() {
        let px = x_axis.data_to_pixel(val, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }

        if inward {
            canvas.line(px, area.bottom(), px, area.bottom() - tl, &tick_style_line);
        } else {
            canvas.line(px, area.bottom(), px, area.bottom() + tl, &tick_style_line);
        }
        if config.axes.show_top_ticks {
            if inward {
                canvas.line(px, area.top, px, area.top + tl, &tick_style_line);
            } else {
                canvas.line(px, area.top, px, area.top - tl, &tick_style_line);
            }
        }

        if let Some(label) = x_axis.tick_labels.get(i) {
            let label_y = if inward { area.bottom() + 3.0 } else { area.bottom() + tl + 3.0 };
            canvas.text(px, label_y, label, &tick_label_style);
        }
    }

    if config.axes.show_minor_ticks {
        for &val in &x_axis.minor_ticks {
            let px = x_axis.data_to_pixel(val, area.left, area.right());
            if px < area.left - 0.5 || px > area.right() + 0.5 {
                continue;
            }
            if inward {
                canvas.line(px, area.bottom(), px, area.bottom() - mtl, &minor_tick_style);
            } else {
                canvas.line(px, area.bottom(), px, area.bottom() + mtl, &minor_tick_style);
            }
        }
    }

    // --- Y axis ticks ---
    let y_tick_label_style = TextStyle {
        size: config.font.tick_size,
        color: config.axes.tick_color,
        anchor: TextAnchor::End,
        baseline: TextBaseline::Central,
        ..Default::default()
    };

    for (i, &val) in y_axis.tick_positions.iter().enumerate() {
        let py = y_axis.data_to_pixel(val, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }

        if inward {
            canvas.line(area.left, py, area.left + tl, py, &tick_style_line);
        } else {
            canvas.line(area.left, py, area.left - tl, py, &tick_style_line);
        }
        if config.axes.show_right_ticks {
            if inward {
                canvas.line(area.right(), py, area.right() - tl, py, &tick_style_line);
            } else {
                canvas.line(area.right(), py, area.right() + tl, py, &tick_style_line);
            }
        }

        if let Some(label) = y_axis.tick_labels.get(i) {
            let label_x = if inward { area.left - 4.0 } else { area.left - tl - 4.0 };
            canvas.text(label_x, py, label, &y_tick_label_style);
        }
    }

    if config.axes.show_minor_ticks {
        for &val in &y_axis.minor_ticks {
            let py = y_axis.data_to_pixel(val, area.bottom(), area.top);
            if py < area.top - 0.5 || py > area.bottom() + 0.5 {
                continue;
            }
            if inward {
                canvas.line(area.left, py, area.left + mtl, py, &minor_tick_style);
            } else {
                canvas.line(area.left, py, area.left - mtl, py, &minor_tick_style);
            }
        }
    }

    // --- Axis labels ---
    let label_style = TextStyle {
        size: config.font.label_size,
        anchor: TextAnchor::Middle,
        ..Default::default()
    };
    let outward = if inward { 0.0 } else { tl };

    if !x_axis.label.is_empty() {
        let label_y = area.bottom() + outward + config.font.tick_size + 16.0;
        canvas.text(area.left + area.width / 2.0, label_y, &x_axis.label, &label_style);
    }

    if !y_axis.label.is_empty() {
        let tick_w = y_tick_label_width(canvas, y_axis, config);
        let label_x = area.left - outward - tick_w - 12.0;
        let label_y = area.top + area.height / 2.0;
        canvas.text_rotated(label_x, label_y, &y_axis.label, &label_style, -90.0);
    }
}
