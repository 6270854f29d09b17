// File: crates/accrue-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Animates a deterministic small series to completion and encodes PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use std::time::Duration;

use accrue_core::{LayoutController, Record, Settings};
use accrue_render_skia::{RenderOptions, SkiaSurface};
use chrono::NaiveDate;

fn render_bytes() -> Vec<u8> {
    let d = |day| NaiveDate::from_ymd_opt(2022, 1, day).unwrap();
    let data = vec![
        Record::new(d(1), 0.0),
        Record::new(d(2), 1.0),
        Record::new(d(3), 0.0),
        Record::new(d(4), 1.5),
        Record::new(d(5), 1.0),
    ];
    let opts = RenderOptions { draw_text: false, ..RenderOptions::default() }; // avoid text nondeterminism across platforms
    let mut ctl = LayoutController::new(Settings::default(), data, SkiaSurface::new(opts));
    ctl.build(480.0, Duration::ZERO).expect("build");
    ctl.run_until(Duration::from_secs(1)).expect("run");
    ctl.surface_mut().png_bytes().expect("png bytes")
}

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

#[test]
fn golden_final_frame() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("final_frame.png");

    if bless_mode() {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes()).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode b").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
