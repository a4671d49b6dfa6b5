use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

use crate::RenderError;
use crate::color::Color;
use crate::theme::BuiltinTheme;

/// Top-level visualization configuration (YAML or programmatic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub theme: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub panel: PanelConfig,
    pub title: TitleConfig,
    pub palette: String,
    pub bar: BarConfig,
    pub legend: LegendConfig,
    pub output: OutputConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        BuiltinTheme::Ggplot.base_config()
    }
}

impl VizConfig {
    pub fn palette_colors(&self) -> Vec<Color> {
        crate::color::palette_colors(&self.palette)
    }

    /// Bar fill: explicit `bar.color`, else the first palette entry.
    pub fn bar_color(&self) -> Color {
        self.bar
            .color
            .or_else(|| self.palette_colors().first().copied())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 460.8,  // 6.4" * 72
            height: 345.6, // 4.8" * 72
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
    pub label_size: f64,
    pub tick_size: f64,
    pub title_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: crate::canvas::DEFAULT_FONT_FAMILY.into(),
            size: 10.0,
            label_size: 11.0,
            tick_size: 9.0,
            title_size: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_direction: String,
    pub show_top_ticks: bool,
    pub show_right_ticks: bool,
    pub show_minor_ticks: bool,
    pub tick_length: f64,
    pub minor_tick_length: f64,
    /// Draw the left and bottom axis lines.
    pub show_frame: bool,
    /// Also draw the top and right lines (requires `show_frame`).
    pub full_frame: bool,
    pub frame_color: Color,
    pub tick_color: Color,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            tick_direction: "out".into(),
            show_top_ticks: false,
            show_right_ticks: false,
            show_minor_ticks: false,
            tick_length: 3.5,
            minor_tick_length: 2.0,
            show_frame: true,
            full_frame: true,
            frame_color: Color::rgb(0, 0, 0),
            tick_color: Color::rgb(0, 0, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
    pub width: f64,
    /// SVG dash pattern, solid when absent.
    pub dash: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: true, color: Color::hex("#CBD5E1"), alpha: 0.55, width: 0.5, dash: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub background: Color,
    pub figure_background: Color,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { background: Color::rgb(255, 255, 255), figure_background: Color::rgb(255, 255, 255) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub show: bool,
    pub bold: bool,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self { show: true, bold: false }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Fill color; first palette color when absent.
    pub color: Option<Color>,
    pub alpha: f64,
    /// Bar width as a fraction of the spacing between neighbouring values.
    pub width_fraction: f64,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self { color: None, alpha: 0.7, width_fraction: 0.8, edge_color: None, edge_width: 0.5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub show: bool,
    pub frame: bool,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { show: true, frame: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dpi: 150 }
    }
}

/// Resolve a VizConfig from optional YAML string.
/// Priority: user YAML overrides → theme named in the YAML → default theme.
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<VizConfig> {
    resolve_config_with_theme(None, user_yaml)
}

/// Like [`resolve_config`], with an explicit theme taking precedence over
/// the YAML `theme` key.
pub fn resolve_config_with_theme(
    theme: Option<&str>,
    user_yaml: Option<&str>,
) -> crate::Result<VizConfig> {
    let overlay = match user_yaml {
        Some(yaml) => serde_yaml_ng::from_str::<Value>(yaml)
            .map_err(|e| RenderError::Config(e.to_string()))?,
        None => Value::Null,
    };
    if !matches!(overlay, Value::Null | Value::Mapping(_)) {
        return Err(RenderError::Config("config must be a YAML mapping".into()));
    }

    let theme_name = theme.or_else(|| overlay.get("theme").and_then(Value::as_str));
    let base = match theme_name {
        Some(name) => BuiltinTheme::parse(name)
            .ok_or_else(|| {
                RenderError::Config(format!(
                    "unknown theme '{}' (expected one of: {})",
                    name,
                    BuiltinTheme::NAMES.join(", ")
                ))
            })?
            .base_config(),
        None => VizConfig::default(),
    };

    let mut merged =
        serde_yaml_ng::to_value(&base).map_err(|e| RenderError::Config(e.to_string()))?;
    merge_yaml(&mut merged, overlay);
    let mut config: VizConfig =
        serde_yaml_ng::from_value(merged).map_err(|e| RenderError::Config(e.to_string()))?;
    config.theme = base.theme;
    Ok(config)
}

/// Recursive mapping merge; non-mapping values in `overlay` replace `base`.
fn merge_yaml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(b), Value::Mapping(o)) => {
            for (k, v) in o {
                match b.get_mut(&k) {
                    Some(slot) => merge_yaml(slot, v),
                    None => {
                        b.insert(k, v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}
