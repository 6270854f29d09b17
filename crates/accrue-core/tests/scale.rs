// File: crates/accrue-core/tests/scale.rs
// Purpose: Scale interpolation laws, degenerate domains, and tick generation.

use accrue_core::scale::TimeInterval;
use accrue_core::{Geometry, LinearScale, Margin, Record, Scales, TimeScale};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn linear_maps_endpoints_and_midpoint() {
    for &(a, b, r0, r1) in &[(0.0, 10.0, 0.0, 400.0), (100.0, 150.0, 430.0, 0.0), (-5.0, 5.0, 10.0, 20.0)] {
        let s = LinearScale::new((a, b), (r0, r1));
        assert!(close(s.map(a), r0));
        assert!(close(s.map(b), r1));
        assert!(close(s.map((a + b) / 2.0), (r0 + r1) / 2.0));
    }
}

#[test]
fn linear_clamps_to_range() {
    let s = LinearScale::new((0.0, 10.0), (430.0, 0.0));
    assert_eq!(s.map(-5.0), 430.0);
    assert_eq!(s.map(50.0), 0.0);
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let s = LinearScale::new((7.0, 7.0), (430.0, 0.0));
    for v in [7.0, 0.0, 1e9, f64::NAN] {
        let px = s.map(v);
        assert_eq!(px, 430.0);
        assert!(!px.is_nan());
    }
    let t = TimeScale::new((date(2020, 1, 1), date(2020, 1, 1)), (0.0, 850.0));
    assert_eq!(t.map(date(2020, 1, 1)), 0.0);
    assert_eq!(t.map(date(2030, 1, 1)), 0.0);
}

#[test]
fn invert_round_trips_inside_range() {
    let s = LinearScale::new((100.0, 200.0), (400.0, 0.0));
    assert!((s.invert(200.0) - 150.0).abs() < 1e-6);
}

#[test]
fn time_scale_interpolates_by_day() {
    let t = TimeScale::new((date(2020, 1, 1), date(2020, 1, 11)), (0.0, 100.0));
    assert!(close(t.map(date(2020, 1, 6)), 50.0));
    assert!(close(t.map(date(2020, 1, 11)), 100.0));
}

#[test]
fn linear_ticks_are_round() {
    let s = LinearScale::new((0.0, 1000.0), (430.0, 0.0));
    assert_eq!(s.ticks(10), (0..=10).map(|i| i as f64 * 100.0).collect::<Vec<_>>());

    let s = LinearScale::new((0.13, 0.92), (430.0, 0.0));
    assert_eq!(s.ticks(10), vec![0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]);

    let s = LinearScale::new((120.0, 120.0), (430.0, 0.0));
    assert_eq!(s.ticks(10), vec![120.0]);
}

#[test]
fn time_ticks_pick_calendar_intervals() {
    let short = TimeScale::new((date(2020, 1, 1), date(2020, 1, 8)), (0.0, 800.0));
    assert_eq!(short.tick_interval(10), TimeInterval::Days(1));
    assert_eq!(short.ticks(10).len(), 8);

    let months = TimeScale::new((date(2020, 1, 15), date(2020, 12, 31)), (0.0, 800.0));
    assert_eq!(months.tick_interval(10), TimeInterval::Months(1));
    let ticks = months.ticks(10);
    assert_eq!(ticks.first(), Some(&date(2020, 2, 1)));
    assert_eq!(ticks.last(), Some(&date(2020, 12, 1)));

    let long = TimeScale::new((date(2018, 3, 1), date(2020, 11, 25)), (0.0, 800.0));
    assert_eq!(long.tick_interval(10), TimeInterval::Months(3));
    assert!(long.ticks(10).iter().all(|d| d.format("%d").to_string() == "01"));

    let decades = TimeScale::new((date(1900, 1, 1), date(2000, 1, 1)), (0.0, 800.0));
    assert_eq!(decades.tick_interval(10), TimeInterval::Years(10));
    assert_eq!(decades.ticks(10).len(), 11);
}

#[test]
fn scales_fit_the_visible_prefix() {
    let geometry = Geometry::new(960.0, 500.0, Margin::default());
    let records = vec![
        Record::new(date(2020, 1, 1), 100.0),
        Record::new(date(2020, 1, 2), 150.0),
        Record::new(date(2020, 1, 3), 120.0),
    ];

    let initial = Scales::initial(&records, &geometry).unwrap();
    assert_eq!(initial.x.domain(), (date(2020, 1, 1), date(2020, 1, 1)));
    assert_eq!(initial.y.domain(), (100.0, 150.0));

    let two = Scales::for_prefix(&records[..2], &geometry).unwrap();
    assert_eq!(two.x.domain(), (date(2020, 1, 1), date(2020, 1, 2)));
    assert_eq!(two.y.domain(), (100.0, 150.0));
    assert_eq!(two.x.range(), (0.0, 850.0));
    assert_eq!(two.y.range(), (430.0, 0.0));

    assert!(Scales::for_prefix(&[], &geometry).is_none());
}
