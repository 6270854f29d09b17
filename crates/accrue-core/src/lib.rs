// File: crates/accrue-core/src/lib.rs
// Summary: Core library entry point; exports the public API for loading, scaling, animating and composing chart frames.

pub mod animator;
pub mod axis;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod frame;
pub mod layout;
pub mod scale;
pub mod schedule;
pub mod session;
pub mod surface;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use animator::{AnimationState, Animator};
pub use axis::{Axis, Orient, Tick};
pub use config::{LabelSettings, MarkerSettings, Settings};
pub use data::{load_csv, read_csv, CsvFile, DataSource, Record};
pub use error::{ConfigError, LoadError};
pub use format::format_currency;
pub use frame::{compose, place_label_x, Frame, Label, Marker};
pub use layout::{Geometry, LayoutController, TickOutcome};
pub use scale::{LinearScale, Scales, TimeScale};
pub use schedule::{Generation, ScheduledTick, TickScheduler};
pub use session::ChartSession;
pub use surface::Surface;
pub use svg::SvgSurface;
pub use text::{ApproxTextMeasure, TextMeasure};
pub use theme::{Rgba, Theme};
pub use types::{Margin, Point, Rect};
