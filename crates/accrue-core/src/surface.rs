// File: crates/accrue-core/src/surface.rs
// Summary: Rendering backend seam; backends apply composed frames.

use anyhow::Result;

use crate::frame::Frame;
use crate::layout::Geometry;
use crate::text::TextMeasure;

/// A drawing target. Measuring comes from the same backend that draws, so
/// label plates match the rendered text.
pub trait Surface: TextMeasure {
    /// Discard any previous rendering and prepare for `geometry`.
    fn reset(&mut self, geometry: &Geometry) -> Result<()>;
    /// Draw `frame`, replacing whatever was drawn before.
    fn apply(&mut self, frame: &Frame) -> Result<()>;
}

impl<T: Surface + ?Sized> Surface for Box<T> {
    fn reset(&mut self, geometry: &Geometry) -> Result<()> {
        (**self).reset(geometry)
    }

    fn apply(&mut self, frame: &Frame) -> Result<()> {
        (**self).apply(frame)
    }
}
