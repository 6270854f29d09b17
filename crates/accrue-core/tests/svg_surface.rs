// File: crates/accrue-core/tests/svg_surface.rs
// Purpose: SVG backend renders the composed frame and resets between builds.

use std::time::Duration;

use accrue_core::{LayoutController, Record, Settings, SvgSurface, Theme};
use chrono::NaiveDate;

fn records() -> Vec<Record> {
    let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
    vec![Record::new(d(1), 100.0), Record::new(d(2), 1500.0), Record::new(d(3), 1200.0)]
}

#[test]
fn document_contains_every_visual_element() {
    let mut c = LayoutController::new(Settings::default(), records(), SvgSurface::new(Theme::light()));
    c.build(960.0, Duration::ZERO).unwrap();
    while let Some(due) = c.next_due() {
        c.run_until(due).unwrap();
    }

    let doc = c.surface().document();
    assert!(doc.starts_with("<svg"));
    assert!(doc.contains(r#"width="960""#));
    assert!(doc.contains(r#"height="500""#));
    assert!(doc.contains(r#"transform="translate(60,20)""#));
    assert!(doc.contains(r#"class="x axis""#));
    assert!(doc.contains(r#"class="y axis""#));
    assert!(doc.contains(r#"class="line""#));
    assert!(doc.contains(r#"class="shadow""#));
    assert!(doc.contains(r#"class="dot""#));
    assert!(doc.contains(r#"class="label-bg""#));
    assert!(doc.contains(">NT$ 1,200</text>"));
    assert!(doc.contains(">2020-01-03</text>"));
    assert!(doc.contains("rotate(-45"));
    assert!(doc.trim_end().ends_with("</svg>"));
}

#[test]
fn reset_clears_previous_document() {
    let mut c = LayoutController::new(Settings::default(), records(), SvgSurface::default());
    c.build(960.0, Duration::ZERO).unwrap();
    c.run_until(Duration::ZERO).unwrap();
    assert!(!c.surface().document().is_empty());

    c.resize(600.0, Duration::from_millis(5)).unwrap();
    assert!(c.surface().document().is_empty());
    assert_eq!(c.surface().geometry().unwrap().outer_width, 600.0);
}

#[test]
fn label_text_is_escaped() {
    let settings = Settings { currency_prefix: "<&> ".to_string(), ..Settings::default() };
    let mut c = LayoutController::new(settings, records(), SvgSurface::default());
    c.build(960.0, Duration::ZERO).unwrap();
    c.run_until(Duration::ZERO).unwrap();
    assert!(c.surface().document().contains(">&lt;&amp;&gt; 100</text>"));
}
