// File: crates/accrue-render-skia/src/lib.rs
// Summary: Skia renderer crate; raster surface for accrue-core frames plus text shaping.

pub mod surface;
pub mod text;

pub use surface::{RenderOptions, SkiaSurface};
pub use text::TextShaper;
