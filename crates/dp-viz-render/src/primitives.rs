//! Drawing styles shared by the canvas and the plot code.

use crate::color::Color;

/// Rectangle style: bars, panel background, legend box.
#[derive(Debug, Clone)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    /// Applied to the whole element (`opacity` attribute), not only the fill.
    pub opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self { fill: None, stroke: None, stroke_width: 1.0, opacity: 1.0 }
    }
}

impl Style {
    pub fn filled(color: Color) -> Self {
        Self { fill: Some(color), ..Self::default() }
    }
}

/// Stroke for axis frames, ticks and grid lines.
#[derive(Debug, Clone)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    /// SVG `stroke-dasharray`, e.g. `"4,2"`.
    pub dash: Option<String>,
}

impl LineStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }
}

#[derive(Debug, Clone)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub weight: FontWeight,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            color: Color::rgb(0, 0, 0),
            weight: FontWeight::default(),
            anchor: TextAnchor::default(),
            baseline: TextBaseline::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Horizontal alignment, written as `text-anchor`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical alignment, written as `dominant-baseline`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    /// Y-axis tick labels and legend entries.
    Central,
    /// X-axis tick labels, hung below the tick.
    Hanging,
}

impl TextBaseline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetic => "auto",
            Self::Central => "central",
            Self::Hanging => "hanging",
        }
    }
}
