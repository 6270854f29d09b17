// File: crates/accrue-render-skia/src/surface.rs
// Summary: Skia CPU raster surface implementing accrue-core's Surface; PNG and RGBA export.

use std::path::Path;

use accrue_core::{Axis, Frame, Geometry, Orient, Rgba, Surface, TextMeasure, Theme};
use anyhow::{anyhow, Result};
use skia_safe as skia;
use tracing::trace;

use crate::text::TextShaper;

pub struct RenderOptions {
    pub theme: Theme,
    /// Text is platform-font dependent; snapshots turn it off.
    pub draw_text: bool,
    pub tick_font_size: f32,
    pub line_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::light(),
            draw_text: true,
            tick_font_size: 10.0,
            line_width: 2.0,
        }
    }
}

pub struct SkiaSurface {
    opts: RenderOptions,
    shaper: TextShaper,
    raster: Option<skia::Surface>,
}

impl SkiaSurface {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shaper: TextShaper::new(), raster: None }
    }

    /// Pixel size of the current raster, `(0, 0)` before the first reset.
    pub fn size(&self) -> (i32, i32) {
        self.raster.as_ref().map_or((0, 0), |s| (s.width(), s.height()))
    }

    /// Encode the current raster as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let raster = self.raster.as_mut().ok_or_else(|| anyhow!("surface has not been reset"))?;
        let image = raster.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read back the raster as unpremultiplied RGBA8: `(pixels, width, height, stride)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let raster = self.raster.as_mut().ok_or_else(|| anyhow!("surface has not been reset"))?;
        let (w, h) = (raster.width(), raster.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !raster.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(anyhow!("failed to read back raster pixels"));
        }
        Ok((px, w, h, stride))
    }
}

impl TextMeasure for SkiaSurface {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.shaper.measure_width(text, font_size)
    }
}

impl Surface for SkiaSurface {
    fn reset(&mut self, geometry: &Geometry) -> Result<()> {
        let w = (geometry.outer_width.ceil() as i32).max(1);
        let h = (geometry.outer_height.ceil() as i32).max(1);
        let mut raster = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        raster.canvas().clear(color(self.opts.theme.background));
        trace!(w, h, "raster surface reset");
        self.raster = Some(raster);
        Ok(())
    }

    fn apply(&mut self, frame: &Frame) -> Result<()> {
        let Self { opts, shaper, raster } = self;
        let raster = raster.as_mut().ok_or_else(|| anyhow!("surface has not been reset"))?;
        let canvas = raster.canvas();
        let g = &frame.geometry;

        canvas.clear(color(opts.theme.background));
        canvas.save();
        canvas.translate((g.margin.left, g.margin.top));

        draw_axis(canvas, shaper, opts, &frame.x_axis, (0.0, g.height));
        draw_axis(canvas, shaper, opts, &frame.y_axis, (0.0, 0.0));
        draw_line(canvas, opts, frame);
        draw_marker(canvas, opts, frame);
        draw_label(canvas, shaper, opts, frame);

        canvas.restore();
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

fn draw_axis(canvas: &skia::Canvas, shaper: &TextShaper, opts: &RenderOptions, axis: &Axis, origin: (f32, f32)) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(color(opts.theme.axis_line));

    canvas.save();
    canvas.translate(origin);

    let [a, b, c, d] = axis.domain_points();
    let mut domain = skia::Path::new();
    domain.move_to((a.x, a.y));
    domain.line_to((b.x, b.y));
    domain.line_to((c.x, c.y));
    domain.line_to((d.x, d.y));
    canvas.draw_path(&domain, &stroke);

    let text_color = color(opts.theme.tick_label);
    let size = opts.tick_font_size;
    for tick in &axis.ticks {
        let (start, end) = axis.tick_end(tick.offset);
        canvas.draw_line((start.x, start.y), (end.x, end.y), &stroke);

        if !opts.draw_text {
            continue;
        }
        let anchor = axis.label_anchor(tick.offset);
        match axis.orient {
            Orient::Bottom => {
                canvas.save();
                canvas.translate((anchor.x, anchor.y));
                canvas.rotate(axis.label_rotation, None);
                shaper.draw_right(canvas, &tick.label, 0.0, size * 0.71, size, text_color);
                canvas.restore();
            }
            Orient::Left => {
                shaper.draw_right(canvas, &tick.label, anchor.x, anchor.y + size * 0.32, size, text_color);
            }
        }
    }
    canvas.restore();
}

fn draw_line(canvas: &skia::Canvas, opts: &RenderOptions, frame: &Frame) {
    let Some((first, rest)) = frame.path.split_first() else {
        return;
    };
    let mut path = skia::Path::new();
    path.move_to((first.x, first.y));
    for p in rest {
        path.line_to((p.x, p.y));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(opts.line_width);
    stroke.set_color(color(opts.theme.line_stroke));
    canvas.draw_path(&path, &stroke);
}

fn draw_marker(canvas: &skia::Canvas, opts: &RenderOptions, frame: &Frame) {
    let m = &frame.marker;
    let center = (m.center.x, m.center.y);
    canvas.draw_circle(center, m.shadow_radius, &fill(opts.theme.shadow));
    canvas.draw_circle(center, m.radius, &fill(opts.theme.dot));
}

fn draw_label(canvas: &skia::Canvas, shaper: &TextShaper, opts: &RenderOptions, frame: &Frame) {
    let l = &frame.label;
    let plate = skia::Rect::from_xywh(l.plate.x, l.plate.y, l.plate.width, l.plate.height);
    canvas.draw_rect(plate, &fill(opts.theme.label_plate));
    if opts.draw_text {
        shaper.draw_left(canvas, &l.text, l.position.x, l.position.y, l.font_size, color(opts.theme.label_text));
    }
}
