// File: crates/accrue-render-skia/tests/smoke.rs
// Purpose: Drive a full animation onto the Skia surface and export PNG.

use std::time::Duration;

use accrue_core::{LayoutController, Record, Settings, TickOutcome};
use accrue_render_skia::{RenderOptions, SkiaSurface};
use chrono::NaiveDate;

fn records() -> Vec<Record> {
    let d = |day| NaiveDate::from_ymd_opt(2021, 3, day).unwrap();
    vec![
        Record::new(d(1), 100.0),
        Record::new(d(2), 140.5),
        Record::new(d(3), 120.0),
        Record::new(d(4), 180.25),
    ]
}

#[test]
fn render_smoke_png() {
    let mut ctl = LayoutController::new(Settings::default(), records(), SkiaSurface::new(RenderOptions::default()));
    ctl.build(640.0, Duration::ZERO).expect("build");
    let outcomes = ctl.run_until(Duration::from_secs(1)).expect("run");
    assert!(outcomes.iter().any(|o| matches!(o, TickOutcome::Drawn { visible: 4, .. })));
    assert!(ctl.is_idle());

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    ctl.surface_mut().write_png(&out).expect("write png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = ctl.surface_mut().png_bytes().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn export_before_reset_is_an_error() {
    let mut surface = SkiaSurface::new(RenderOptions::default());
    assert_eq!(surface.size(), (0, 0));
    assert!(surface.png_bytes().is_err());
    assert!(surface.rgba8().is_err());
}

#[test]
fn resize_reallocates_raster() {
    let mut ctl = LayoutController::new(Settings::default(), records(), SkiaSurface::new(RenderOptions::default()));
    ctl.build(640.0, Duration::ZERO).expect("build");
    assert_eq!(ctl.surface().size(), (640, 500));
    ctl.resize(320.0, Duration::from_millis(30)).expect("resize");
    assert_eq!(ctl.surface().size(), (320, 500));
}
