//! # dp-viz-render
//!
//! Renders `dp-viz` artifacts to SVG, and to PNG/PDF behind the `png` and
//! `pdf` cargo features.

pub mod canvas;
pub mod color;
pub mod config;
pub mod header;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod text;
pub mod theme;

use config::VizConfig;
use dp_viz::BarChartArtifact;
use thiserror::Error;

pub use config::{resolve_config, resolve_config_with_theme};
pub use theme::BuiltinTheme;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown artifact kind: {0}")]
    UnknownKind(String),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("layout error: {0}")]
    Layout(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    Png(String),
    #[cfg(feature = "pdf")]
    #[error("PDF conversion error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Output formats compiled into this build.
pub fn supported_formats() -> &'static [&'static str] {
    match (cfg!(feature = "png"), cfg!(feature = "pdf")) {
        (true, true) => &["svg", "png", "pdf"],
        (true, false) => &["svg", "png"],
        (false, true) => &["svg", "pdf"],
        (false, false) => &["svg"],
    }
}

/// Render a bar-chart artifact to an SVG string.
pub fn render(artifact: &BarChartArtifact, config: &VizConfig) -> Result<String> {
    plots::bar::render(artifact, config)
}

/// Render an artifact JSON to SVG string.
pub fn render_svg(artifact_json: &str, kind: &str, config: &VizConfig) -> Result<String> {
    let svg = match kind {
        "bar" | "bar_chart" => {
            let art: BarChartArtifact = serde_json::from_str(artifact_json)?;
            plots::bar::render(&art, config)?
        }
        other => return Err(RenderError::UnknownKind(other.to_string())),
    };
    Ok(svg)
}

/// Render an artifact JSON to bytes in the specified format.
pub fn render_to_bytes(
    artifact_json: &str,
    kind: &str,
    format: &str,
    config: &VizConfig,
) -> Result<Vec<u8>> {
    let format = format.to_ascii_lowercase();
    if !supported_formats().contains(&format.as_str()) {
        return Err(RenderError::UnknownKind(format!(
            "format: {format} (this build supports {})",
            supported_formats().join(", ")
        )));
    }
    let svg = render_svg(artifact_json, kind, config)?;
    match format.as_str() {
        #[cfg(feature = "png")]
        "png" => output::png::svg_to_png(&svg, config.output.dpi),
        #[cfg(feature = "pdf")]
        "pdf" => output::pdf::svg_to_pdf(&svg),
        _ => Ok(svg.into_bytes()),
    }
}

/// Render an artifact JSON to a file (format inferred from extension).
pub fn render_to_file(
    artifact_json: &str,
    kind: &str,
    path: &std::path::Path,
    config: &VizConfig,
) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("svg");
    let bytes = render_to_bytes(artifact_json, kind, ext, config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
