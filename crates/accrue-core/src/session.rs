// File: crates/accrue-core/src/session.rs
// Summary: One chart build: geometry, records, animator and current scales.

use crate::animator::Animator;
use crate::config::Settings;
use crate::data::Record;
use crate::frame::{compose, Frame};
use crate::layout::Geometry;
use crate::scale::Scales;
use crate::schedule::Generation;
use crate::text::TextMeasure;

/// Everything owned by a single build. A resize drops the session and
/// constructs a new one; nothing survives between builds.
#[derive(Clone, Debug)]
pub struct ChartSession {
    generation: Generation,
    geometry: Geometry,
    records: Vec<Record>,
    animator: Animator,
    scales: Option<Scales>,
}

impl ChartSession {
    /// `records` must be sorted by date.
    pub fn new(generation: Generation, geometry: Geometry, records: Vec<Record>) -> Self {
        let scales = Scales::initial(&records, &geometry);
        let animator = Animator::new(records.len());
        Self { generation, geometry, records, animator, scales }
    }

    pub fn generation(&self) -> Generation { self.generation }
    pub fn geometry(&self) -> &Geometry { &self.geometry }
    pub fn records(&self) -> &[Record] { &self.records }
    pub fn animator(&self) -> &Animator { &self.animator }
    pub fn scales(&self) -> Option<&Scales> { self.scales.as_ref() }
    pub fn is_complete(&self) -> bool { self.animator.is_complete() }

    pub fn visible_prefix(&self) -> &[Record] {
        &self.records[..self.animator.visible()]
    }

    /// Run one tick: extend the prefix, refit the scales, compose the frame.
    /// Returns `None` once the animation is complete.
    pub fn advance(&mut self, settings: &Settings, measure: &dyn TextMeasure) -> Option<Frame> {
        let visible = self.animator.tick()?;
        let prefix = &self.records[..visible];
        let scales = Scales::for_prefix(prefix, &self.geometry)?;
        self.scales = Some(scales);
        compose(self.generation, prefix, &scales, &self.geometry, settings, measure)
    }
}
