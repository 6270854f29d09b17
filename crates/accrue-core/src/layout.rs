// File: crates/accrue-core/src/layout.rs
// Summary: Chart geometry from the container width, and the controller that rebuilds the pipeline per build/resize.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, trace};

use crate::config::Settings;
use crate::data::DataSource;
use crate::schedule::{Generation, ScheduledTick, TickScheduler};
use crate::session::ChartSession;
use crate::surface::Surface;
use crate::types::Margin;

/// Outer surface size and the inner plot area derived from it.
/// Contract: `width` and `height` are never negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub outer_width: f32,
    pub outer_height: f32,
    pub margin: Margin,
    /// Inner plot width.
    pub width: f32,
    /// Inner plot height.
    pub height: f32,
}

impl Geometry {
    pub fn new(container_width: f32, outer_height: f32, margin: Margin) -> Self {
        let outer_width = container_width.max(0.0);
        let outer_height = outer_height.max(0.0);
        Self {
            outer_width,
            outer_height,
            margin,
            width: (outer_width - margin.hsum()).max(0.0),
            height: (outer_height - margin.vsum()).max(0.0),
        }
    }

    /// Width follows the container; height is fixed by the settings.
    pub fn from_settings(container_width: f32, settings: &Settings) -> Self {
        Self::new(container_width, settings.height, settings.margin)
    }
}

/// Result of firing one scheduled tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A frame was applied to the surface.
    Drawn { generation: Generation, visible: usize },
    /// The animation had nothing left to draw.
    Finished { generation: Generation },
    /// The tick belonged to a superseded build and was ignored.
    Stale { generation: Generation },
}

/// Owns the surface and the current session. Every build (initial or resize)
/// tears down the previous one and starts from scratch under a new generation.
pub struct LayoutController<D, S> {
    settings: Settings,
    source: D,
    surface: S,
    scheduler: TickScheduler,
    generation: Generation,
    session: Option<ChartSession>,
}

impl<D: DataSource, S: Surface> LayoutController<D, S> {
    pub fn new(settings: Settings, source: D, surface: S) -> Self {
        Self {
            settings,
            source,
            surface,
            scheduler: TickScheduler::new(),
            generation: Generation::default(),
            session: None,
        }
    }

    pub fn settings(&self) -> &Settings { &self.settings }
    pub fn generation(&self) -> Generation { self.generation }
    pub fn session(&self) -> Option<&ChartSession> { self.session.as_ref() }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn next_due(&self) -> Option<Duration> { self.scheduler.next_due() }

    /// True when the current build has drawn every record, or there is no build.
    pub fn is_idle(&self) -> bool {
        self.session.as_ref().map_or(true, ChartSession::is_complete)
    }

    /// Tear down and rebuild for `container_width` at host time `now`. The
    /// first tick is due immediately. On load failure no animation starts.
    pub fn build(&mut self, container_width: f32, now: Duration) -> Result<Generation> {
        self.generation = self.generation.next();
        self.session = None;
        self.scheduler.advance_clock(now);
        let generation = self.generation;

        let geometry = Geometry::from_settings(container_width, &self.settings);
        debug!(%generation, width = geometry.width, height = geometry.height, "building chart");
        self.surface.reset(&geometry).context("failed to reset rendering surface")?;

        let records = self.source.load().context("failed to load chart data")?;
        info!(%generation, records = records.len(), "chart built");
        self.session = Some(ChartSession::new(generation, geometry, records));
        self.scheduler.schedule_after(Duration::ZERO, generation, 0);
        Ok(generation)
    }

    /// Container resized: rebuild immediately, no debouncing.
    pub fn resize(&mut self, container_width: f32, now: Duration) -> Result<Generation> {
        debug!(container_width, "resize");
        self.build(container_width, now)
    }

    /// Fire every tick due at or before `now`, in order.
    pub fn run_until(&mut self, now: Duration) -> Result<Vec<TickOutcome>> {
        let mut outcomes = Vec::new();
        while let Some(tick) = self.scheduler.pop_due(now) {
            outcomes.push(self.fire(tick)?);
        }
        Ok(outcomes)
    }

    /// Fire one tick. Ticks from an older generation are no-ops.
    pub fn fire(&mut self, tick: ScheduledTick) -> Result<TickOutcome> {
        let generation = tick.generation;
        let session = match self.session.as_mut() {
            Some(session) if generation == self.generation => session,
            _ => {
                debug!(%generation, current = %self.generation, index = tick.index, "dropping stale tick");
                return Ok(TickOutcome::Stale { generation });
            }
        };

        let Some(frame) = session.advance(&self.settings, &self.surface) else {
            trace!(%generation, "animation finished");
            return Ok(TickOutcome::Finished { generation });
        };
        self.surface.apply(&frame).context("failed to draw frame")?;
        trace!(%generation, index = tick.index, visible = frame.visible, "frame drawn");

        if !session.is_complete() {
            self.scheduler.schedule_after(self.settings.tick_delay(), generation, frame.visible);
        }
        Ok(TickOutcome::Drawn { generation, visible: frame.visible })
    }
}
