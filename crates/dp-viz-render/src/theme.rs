use crate::color::Color;
use crate::config::*;

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTheme {
    /// Gray panel, white grid (matplotlib `ggplot` style).
    Ggplot,
    /// White panel, boxed frame, inward ticks.
    Classic,
    /// White panel, left/bottom spines only, no grid.
    Minimal,
}

impl BuiltinTheme {
    pub const NAMES: &'static [&'static str] = &["ggplot", "classic", "minimal"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ggplot" | "default" => Some(Self::Ggplot),
            "classic" => Some(Self::Classic),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    pub fn base_config(self) -> VizConfig {
        match self {
            Self::Ggplot => ggplot(),
            Self::Classic => classic(),
            Self::Minimal => minimal(),
        }
    }
}

fn ggplot() -> VizConfig {
    let gray = Color::hex("#555555");
    VizConfig {
        theme: "ggplot".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        axes: AxesConfig {
            tick_direction: "out".into(),
            show_frame: false,
            full_frame: false,
            frame_color: gray,
            tick_color: gray,
            ..AxesConfig::default()
        },
        grid: GridConfig {
            show: true,
            color: Color::rgb(255, 255, 255),
            alpha: 1.0,
            width: 0.8,
            dash: None,
        },
        panel: PanelConfig {
            background: Color::hex("#E5E5E5"),
            figure_background: Color::rgb(255, 255, 255),
        },
        title: TitleConfig::default(),
        palette: "ggplot".into(),
        bar: BarConfig::default(),
        legend: LegendConfig { show: true, frame: false },
        output: OutputConfig::default(),
    }
}

fn classic() -> VizConfig {
    VizConfig {
        theme: "classic".into(),
        axes: AxesConfig {
            tick_direction: "in".into(),
            show_top_ticks: true,
            show_right_ticks: true,
            show_minor_ticks: true,
            tick_length: 5.0,
            minor_tick_length: 3.0,
            ..AxesConfig::default()
        },
        grid: GridConfig { show: false, ..GridConfig::default() },
        panel: PanelConfig::default(),
        title: TitleConfig { show: true, bold: true },
        palette: "tab10".into(),
        legend: LegendConfig { show: true, frame: true },
        ..ggplot()
    }
}

fn minimal() -> VizConfig {
    VizConfig {
        theme: "minimal".into(),
        font: FontConfig { size: 9.0, label_size: 10.0, tick_size: 8.0, ..FontConfig::default() },
        axes: AxesConfig {
            show_frame: true,
            full_frame: false,
            frame_color: Color::hex("#444444"),
            tick_color: Color::hex("#444444"),
            ..AxesConfig::default()
        },
        grid: GridConfig { show: false, ..GridConfig::default() },
        panel: PanelConfig::default(),
        palette: "tableau10".into(),
        legend: LegendConfig { show: true, frame: false },
        ..ggplot()
    }
}
