use std::fmt::Write as FmtWrite;

use crate::RenderError;
use crate::color::Color;
use crate::primitives::*;
use crate::text::{TextMetrics, measure_styled};

pub const DEFAULT_FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";

/// An SVG element stored for deferred rendering.
#[derive(Debug, Clone)]
enum SvgElement {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        style: Style,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: LineStyle,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        style: TextStyle,
        rotate: Option<f64>,
    },
    Group {
        clip_id: Option<String>,
        children: Vec<SvgElement>,
    },
}

/// Immediate-mode SVG canvas. Coordinates in points (1pt = 1/72").
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    background: Color,
    font_family: String,
    elements: Vec<SvgElement>,
    defs: Vec<String>,
    /// Open clip groups, innermost last.
    clip_stack: Vec<(String, Vec<SvgElement>)>,
    next_clip_id: usize,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> crate::Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RenderError::Layout(format!(
                "figure size must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            background: Color::rgb(255, 255, 255),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            elements: Vec::new(),
            defs: Vec::new(),
            clip_stack: Vec::new(),
            next_clip_id: 0,
        })
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        if !family.trim().is_empty() {
            self.font_family = family.to_string();
        }
        self
    }

    // --- Drawing primitives ---

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        self.push(SvgElement::Rect { x, y, w, h, style: style.clone() });
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        self.push(SvgElement::Line { x1, y1, x2, y2, style: style.clone() });
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.push(SvgElement::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
            rotate: None,
        });
    }

    pub fn text_rotated(&mut self, x: f64, y: f64, content: &str, style: &TextStyle, angle: f64) {
        self.push(SvgElement::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
            rotate: Some(angle),
        });
    }

    // --- Clip paths ---

    /// Start clipping subsequent elements to the given rectangle.
    pub fn push_clip(&mut self, x: f64, y: f64, w: f64, h: f64) -> String {
        let id = format!("clip{}", self.next_clip_id);
        self.next_clip_id += 1;
        self.defs.push(format!(
            r#"<clipPath id="{id}"><rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" /></clipPath>"#
        ));
        self.clip_stack.push((id.clone(), Vec::new()));
        id
    }

    /// Close the innermost clip group.
    pub fn pop_clip(&mut self) {
        if let Some((id, children)) = self.clip_stack.pop() {
            self.push(SvgElement::Group { clip_id: Some(id), children });
        }
    }

    // --- Text measurement ---

    pub fn measure_text(&self, content: &str, style: &TextStyle) -> TextMetrics {
        measure_styled(content, style)
    }

    // --- SVG output ---

    fn push(&mut self, elem: SvgElement) {
        match self.clip_stack.last_mut() {
            Some((_, children)) => children.push(elem),
            None => self.elements.push(elem),
        }
    }

    pub fn finish_svg(&self) -> String {
        let mut out = String::with_capacity(16 * 1024);
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )
        .unwrap();

        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            for d in &self.defs {
                out.push_str(d);
                out.push('\n');
            }
            out.push_str("</defs>\n");
        }

        writeln!(
            out,
            r#"<rect width="{}" height="{}" fill="{}" />"#,
            self.width,
            self.height,
            self.background.to_svg_fill()
        )
        .unwrap();

        for elem in &self.elements {
            render_element(&mut out, elem, &self.font_family);
        }
        // Groups left open are closed implicitly.
        for (id, children) in &self.clip_stack {
            let group = SvgElement::Group { clip_id: Some(id.clone()), children: children.clone() };
            render_element(&mut out, &group, &self.font_family);
        }

        out.push_str("</svg>\n");
        out
    }
}

pub(crate) fn escape_xml(out: &mut String, content: &str) {
    for ch in content.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

fn render_element(out: &mut String, elem: &SvgElement, font_family: &str) {
    match elem {
        SvgElement::Rect { x, y, w, h, style } => {
            write!(out, r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}""#).unwrap();
            write_style_attrs(out, style);
            out.push_str(" />\n");
        }
        SvgElement::Line { x1, y1, x2, y2, style } => {
            write!(out, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#).unwrap();
            write_line_attrs(out, style);
            out.push_str(" />\n");
        }
        SvgElement::Text { x, y, content, style, rotate } => {
            write!(out, r#"<text x="{x:.2}" y="{y:.2}""#).unwrap();
            out.push_str(r#" font-family=""#);
            escape_xml(out, font_family);
            write!(out, r#"" font-size="{:.1}""#, style.size).unwrap();
            write!(out, r#" fill="{}""#, style.color.to_svg_fill()).unwrap();
            write!(out, r#" text-anchor="{}""#, style.anchor.as_str()).unwrap();
            write!(out, r#" dominant-baseline="{}""#, style.baseline.as_str()).unwrap();
            if style.weight == FontWeight::Bold {
                write!(out, r#" font-weight="bold""#).unwrap();
            }
            if let Some(angle) = rotate {
                write!(out, r#" transform="rotate({angle:.1},{x:.2},{y:.2})""#).unwrap();
            }
            out.push('>');
            escape_xml(out, content);
            out.push_str("</text>\n");
        }
        SvgElement::Group { clip_id, children } => {
            out.push_str("<g");
            if let Some(id) = clip_id {
                write!(out, r#" clip-path="url(#{id})""#).unwrap();
            }
            out.push_str(">\n");
            for child in children {
                render_element(out, child, font_family);
            }
            out.push_str("</g>\n");
        }
    }
}

fn write_style_attrs(out: &mut String, style: &Style) {
    if let Some(fill) = &style.fill {
        write!(out, r#" fill="{}""#, fill.to_svg_fill()).unwrap();
    } else {
        write!(out, r#" fill="none""#).unwrap();
    }
    if let Some(stroke) = &style.stroke {
        write!(out, r#" stroke="{}""#, stroke.to_svg_fill()).unwrap();
        write!(out, r#" stroke-width="{:.2}""#, style.stroke_width).unwrap();
    }
    if (style.opacity - 1.0).abs() > 1e-4 {
        write!(out, r#" opacity="{:.3}""#, style.opacity).unwrap();
    }
}

fn write_line_attrs(out: &mut String, style: &LineStyle) {
    write!(out, r#" stroke="{}""#, style.color.to_svg_fill()).unwrap();
    write!(out, r#" stroke-width="{:.2}""#, style.width).unwrap();
    if let Some(dash) = &style.dash {
        write!(out, r#" stroke-dasharray="{dash}""#).unwrap();
    }
}
