// File: crates/accrue-core/src/svg.rs
// Summary: SVG backend; renders each frame to a standalone SVG document.

use std::fmt::Write as _;

use anyhow::Result;

use crate::axis::{Axis, Orient};
use crate::frame::Frame;
use crate::layout::Geometry;
use crate::surface::Surface;
use crate::text::{ApproxTextMeasure, TextMeasure};
use crate::theme::Theme;

const TICK_FONT_SIZE: f32 = 10.0;

/// Keeps the document for the last applied frame.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    theme: Theme,
    measure: ApproxTextMeasure,
    geometry: Option<Geometry>,
    document: String,
}

impl SvgSurface {
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Last rendered document; empty after a reset.
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }
}

impl TextMeasure for SvgSurface {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.measure.measure_text(text, font_size)
    }
}

impl Surface for SvgSurface {
    fn reset(&mut self, geometry: &Geometry) -> Result<()> {
        self.geometry = Some(*geometry);
        self.document.clear();
        Ok(())
    }

    fn apply(&mut self, frame: &Frame) -> Result<()> {
        self.document = render_document(frame, &self.theme)?;
        Ok(())
    }
}

/// Render a frame as a complete SVG document.
pub fn render_document(frame: &Frame, theme: &Theme) -> Result<String> {
    let g = &frame.geometry;
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = g.outer_width,
        h = g.outer_height
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, theme.background.to_css())?;
    writeln!(out, r#"<g transform="translate({},{})">"#, g.margin.left, g.margin.top)?;

    write_axis(&mut out, &frame.x_axis, "x axis", (0.0, g.height), theme)?;
    write_axis(&mut out, &frame.y_axis, "y axis", (0.0, 0.0), theme)?;

    let mut d = String::new();
    for (i, p) in frame.path.iter().enumerate() {
        write!(d, "{}{},{}", if i == 0 { 'M' } else { 'L' }, p.x, p.y)?;
    }
    writeln!(
        out,
        r#"<path class="line" d="{d}" fill="none" stroke="{}" stroke-width="2"/>"#,
        theme.line_stroke.to_css()
    )?;

    let m = &frame.marker;
    writeln!(
        out,
        r#"<circle class="shadow" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        m.center.x,
        m.center.y,
        m.shadow_radius,
        theme.shadow.to_css()
    )?;
    writeln!(
        out,
        r#"<circle class="dot" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        m.center.x,
        m.center.y,
        m.radius,
        theme.dot.to_css()
    )?;

    let l = &frame.label;
    writeln!(
        out,
        r#"<rect class="label-bg" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        l.plate.x,
        l.plate.y,
        l.plate.width,
        l.plate.height,
        theme.label_plate.to_css()
    )?;
    writeln!(
        out,
        r#"<text class="label" x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
        l.position.x,
        l.position.y,
        l.font_size,
        theme.label_text.to_css(),
        escape(&l.text)
    )?;

    out.push_str("</g>\n</svg>\n");
    Ok(out)
}

fn write_axis(out: &mut String, axis: &Axis, class: &str, origin: (f32, f32), theme: &Theme) -> std::fmt::Result {
    let stroke = theme.axis_line.to_css();
    let fill = theme.tick_label.to_css();
    writeln!(out, r#"<g class="{class}" transform="translate({},{})">"#, origin.0, origin.1)?;

    let [a, b, c, e] = axis.domain_points();
    writeln!(
        out,
        r#"<path class="domain" d="M{},{}L{},{}L{},{}L{},{}" fill="none" stroke="{stroke}"/>"#,
        a.x, a.y, b.x, b.y, c.x, c.y, e.x, e.y
    )?;

    for tick in &axis.ticks {
        let (start, end) = axis.tick_end(tick.offset);
        let anchor = axis.label_anchor(tick.offset);
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}"/>"#,
            start.x, start.y, end.x, end.y
        )?;
        let (dy, rotate) = match axis.orient {
            Orient::Bottom => ("0.71em", format!(" transform=\"rotate({} {} {})\"", axis.label_rotation, anchor.x, anchor.y)),
            Orient::Left => ("0.32em", String::new()),
        };
        writeln!(
            out,
            r#"<text x="{}" y="{}" dy="{dy}" font-size="{TICK_FONT_SIZE}" text-anchor="end" fill="{fill}"{rotate}>{}</text>"#,
            anchor.x,
            anchor.y,
            escape(&tick.label)
        )?;
    }
    out.push_str("</g>\n");
    Ok(())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("A&B <x>"), "A&amp;B &lt;x&gt;");
    }
}
