// File: crates/accrue-core/src/axis.rs
// Summary: Axis model: tick positions, labels and domain line for the bottom (time) and left (value) axes.

use crate::format::format_tick;
use crate::scale::{LinearScale, TimeScale};
use crate::types::Point;

pub const TICK_SIZE: f32 = 6.0;
/// Gap between tick line end and its label.
pub const TICK_PADDING: f32 = 3.0;
pub const TIME_TICK_FORMAT: &str = "%Y-%m-%d";
/// Bottom axis labels are rotated for readability and anchored at their end.
pub const TIME_LABEL_ROTATION: f32 = -45.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis, in pixels.
    pub offset: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    pub range: (f32, f32),
    pub ticks: Vec<Tick>,
    pub tick_size_inner: f32,
    pub tick_size_outer: f32,
    /// Label rotation in degrees.
    pub label_rotation: f32,
}

impl Axis {
    /// Time axis, no outer ticks.
    pub fn bottom(scale: &TimeScale, count: usize) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|d| Tick { offset: scale.map(d), label: d.format(TIME_TICK_FORMAT).to_string() })
            .collect();
        Self {
            orient: Orient::Bottom,
            range: scale.range(),
            ticks,
            tick_size_inner: TICK_SIZE,
            tick_size_outer: 0.0,
            label_rotation: TIME_LABEL_ROTATION,
        }
    }

    pub fn left(scale: &LinearScale, count: usize) -> Self {
        let step = scale.tick_step(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { offset: scale.map(v), label: format_tick(v, step) })
            .collect();
        Self {
            orient: Orient::Left,
            range: scale.range(),
            ticks,
            tick_size_inner: TICK_SIZE,
            tick_size_outer: TICK_SIZE,
            label_rotation: 0.0,
        }
    }

    /// Domain line with outer ticks at both ends, in axis-local coordinates.
    pub fn domain_points(&self) -> [Point; 4] {
        let (r0, r1) = self.range;
        let k = self.tick_size_outer;
        match self.orient {
            Orient::Bottom => [Point::new(r0, k), Point::new(r0, 0.0), Point::new(r1, 0.0), Point::new(r1, k)],
            Orient::Left => [Point::new(-k, r0), Point::new(0.0, r0), Point::new(0.0, r1), Point::new(-k, r1)],
        }
    }

    /// Tick line (start, end) for a tick at `offset`, in axis-local coordinates.
    pub fn tick_end(&self, offset: f32) -> (Point, Point) {
        match self.orient {
            Orient::Bottom => (Point::new(offset, 0.0), Point::new(offset, self.tick_size_inner)),
            Orient::Left => (Point::new(0.0, offset), Point::new(-self.tick_size_inner, offset)),
        }
    }

    /// Anchor of a tick label, in axis-local coordinates. Labels are drawn
    /// end-anchored from this point.
    pub fn label_anchor(&self, offset: f32) -> Point {
        let gap = self.tick_size_inner.max(0.0) + TICK_PADDING;
        match self.orient {
            Orient::Bottom => Point::new(offset, gap),
            Orient::Left => Point::new(-gap, offset),
        }
    }
}
