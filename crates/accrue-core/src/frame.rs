// File: crates/accrue-core/src/frame.rs
// Summary: Pure composition of the full visual state for one animation tick.
// Notes:
// - All coordinates are in plot space: origin at the top-left of the inner
//   chart area, y growing downward. Backends translate by the margins.
// - A frame fully describes what is on screen; backends redraw it from
//   scratch instead of patching the previous one.

use crate::axis::Axis;
use crate::config::{LabelSettings, Settings};
use crate::data::Record;
use crate::format::format_currency;
use crate::layout::Geometry;
use crate::scale::Scales;
use crate::schedule::Generation;
use crate::text::TextMeasure;
use crate::types::{Point, Rect};

/// Current-position marker: a dot over a larger shadow dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f32,
    pub shadow_radius: f32,
}

/// Floating value label. `position` is the left end of the text baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point,
    pub width: f32,
    pub font_size: f32,
    /// True when the label was moved to the marker's left to stay inside the chart.
    pub flipped: bool,
    /// Background plate behind the text.
    pub plate: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub generation: Generation,
    /// Number of records drawn.
    pub visible: usize,
    pub geometry: Geometry,
    pub scales: Scales,
    pub path: Vec<Point>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub marker: Marker,
    pub label: Label,
}

/// Compose the frame for a visible prefix. Returns `None` for an empty prefix.
pub fn compose(
    generation: Generation,
    prefix: &[Record],
    scales: &Scales,
    geometry: &Geometry,
    settings: &Settings,
    measure: &dyn TextMeasure,
) -> Option<Frame> {
    let last = prefix.last()?;
    let project = |r: &Record| Point::new(scales.x.map(r.date), scales.y.map(r.accumulate));

    let path = prefix.iter().map(project).collect();
    let center = project(last);
    let marker = Marker {
        center,
        radius: settings.marker.radius,
        shadow_radius: settings.marker.shadow_radius,
    };

    let style = &settings.label;
    let text = format_currency(&settings.currency_prefix, last.accumulate);
    let width = measure.measure_text(&text, style.font_size);
    let (x, flipped) = place_label_x(center.x, width, geometry.width, geometry.margin.right, style.spacing);
    let y = center.y + style.height_offset;
    let label = Label {
        text,
        position: Point::new(x, y),
        width,
        font_size: style.font_size,
        flipped,
        plate: label_plate(x, y, width, style),
    };

    Some(Frame {
        generation,
        visible: prefix.len(),
        geometry: *geometry,
        scales: *scales,
        path,
        x_axis: Axis::bottom(&scales.x, settings.tick_count),
        y_axis: Axis::left(&scales.y, settings.tick_count),
        marker,
        label,
    })
}

/// Horizontal label position: right of the marker unless the label would
/// cross `chart_width - right_margin`, then left of it. Returns `(x, flipped)`.
pub fn place_label_x(marker_x: f32, label_width: f32, chart_width: f32, right_margin: f32, spacing: f32) -> (f32, bool) {
    let right = marker_x + spacing;
    if right + label_width > chart_width - right_margin {
        (marker_x - label_width - spacing, true)
    } else {
        (right, false)
    }
}

/// Plate around a label whose baseline starts at `(x, y)`.
pub fn label_plate(x: f32, y: f32, text_width: f32, style: &LabelSettings) -> Rect {
    let p = style.padding;
    Rect::from_xywh(x - p, y - style.ascent - p, text_width + 2.0 * p, style.text_height + 2.0 * p)
}
