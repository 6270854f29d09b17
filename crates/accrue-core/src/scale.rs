// File: crates/accrue-core/src/scale.rs
// Summary: Time (X) and value (Y) scale transforms with tick generation.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::data::{value_extent, Record};
use crate::layout::Geometry;

/// Linear map from a numeric domain onto a pixel range, clamped to the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f32, f32) { self.range }

    /// Map `value` into the range. A zero-width domain maps everything to the
    /// range start.
    #[inline]
    pub fn map(&self, value: f64) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return r0;
        }
        let t = (value - d0) / span;
        if t.is_nan() {
            return r0;
        }
        r0 + t.clamp(0.0, 1.0) as f32 * (r1 - r0)
    }

    /// Inverse of [`map`](Self::map) for pixels inside the range.
    pub fn invert(&self, px: f32) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return d0;
        }
        let t = ((px - r0) / span).clamp(0.0, 1.0) as f64;
        d0 + t * (d1 - d0)
    }

    /// Step between "nice" ticks (1, 2 or 5 times a power of ten).
    pub fn tick_step(&self, count: usize) -> f64 {
        let (lo, hi) = ordered(self.domain);
        tick_step(lo, hi, count)
    }

    /// Round-valued ticks inside the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain);
        if !lo.is_finite() || !hi.is_finite() || count == 0 {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }
        let step = tick_step(lo, hi, count);
        if step <= 0.0 || !step.is_finite() {
            return Vec::new();
        }
        // Integer multiples of `step` (or divisions by its inverse for small
        // steps) keep the values free of accumulated float error.
        if step < 1.0 {
            let inv = (1.0 / step).round();
            let i0 = (lo * inv).ceil() as i64;
            let i1 = (hi * inv).floor() as i64;
            (i0..=i1).map(|i| i as f64 / inv).collect()
        } else {
            let i0 = (lo / step).ceil() as i64;
            let i1 = (hi / step).floor() as i64;
            (i0..=i1).map(|i| i as f64 * step).collect()
        }
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

pub(crate) fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 0.0;
    }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    base * factor
}

/// Calendar-aligned tick interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Days(u32),
    /// Sundays.
    Weeks,
    Months(u32),
    Years(i32),
}

impl TimeInterval {
    fn approx_days(self) -> f64 {
        match self {
            TimeInterval::Days(n) => n as f64,
            TimeInterval::Weeks => 7.0,
            TimeInterval::Months(n) => 30.0 * n as f64,
            TimeInterval::Years(n) => 365.0 * n as f64,
        }
    }
}

const INTERVALS: [TimeInterval; 6] = [
    TimeInterval::Days(1),
    TimeInterval::Days(2),
    TimeInterval::Weeks,
    TimeInterval::Months(1),
    TimeInterval::Months(3),
    TimeInterval::Years(1),
];

/// Linear map from calendar dates onto a pixel range, by elapsed days.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f32, f32)) -> Self {
        let (start, end) = domain;
        let linear = LinearScale::new((day_number(start), day_number(end)), range);
        Self { start, end, linear }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) { (self.start, self.end) }
    pub fn range(&self) -> (f32, f32) { self.linear.range() }

    #[inline]
    pub fn map(&self, date: NaiveDate) -> f32 {
        self.linear.map(day_number(date))
    }

    /// Interval whose length is closest to span / count.
    pub fn tick_interval(&self, count: usize) -> TimeInterval {
        let (lo, hi) = if self.start <= self.end { (self.start, self.end) } else { (self.end, self.start) };
        let span = (hi - lo).num_days() as f64;
        let target = span / count.max(1) as f64;
        if target > TimeInterval::Years(1).approx_days() {
            let years = (hi.year() - lo.year()) as f64;
            let step = tick_step(0.0, years, count).max(1.0);
            return TimeInterval::Years(step as i32);
        }
        match INTERVALS.iter().position(|i| i.approx_days() > target) {
            Some(0) => INTERVALS[0],
            Some(i) => {
                let below = INTERVALS[i - 1].approx_days();
                let above = INTERVALS[i].approx_days();
                if target / below < above / target { INTERVALS[i - 1] } else { INTERVALS[i] }
            }
            None => TimeInterval::Years(1),
        }
    }

    /// Interval-aligned dates inside the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (lo, hi) = if self.start <= self.end { (self.start, self.end) } else { (self.end, self.start) };
        match self.tick_interval(count) {
            TimeInterval::Days(n) => days_between(lo, hi)
                .filter(|d| (d.day() - 1) % n == 0)
                .collect(),
            TimeInterval::Weeks => days_between(lo, hi)
                .filter(|d| d.weekday() == Weekday::Sun)
                .collect(),
            TimeInterval::Months(n) => months_between(lo, hi)
                .filter(|d| d.month0() % n == 0)
                .collect(),
            TimeInterval::Years(n) => (lo.year()..=hi.year())
                .filter(|y| y.rem_euclid(n.max(1)) == 0)
                .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
                .filter(|d| *d >= lo && *d <= hi)
                .collect(),
        }
    }
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn days_between(lo: NaiveDate, hi: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    lo.iter_days().take_while(move |d| *d <= hi)
}

/// First-of-month dates in `[lo, hi]`.
fn months_between(lo: NaiveDate, hi: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(lo.year(), lo.month(), 1)
        .and_then(|d| if d < lo { next_month(d) } else { Some(d) });
    std::iter::successors(first, |d| next_month(*d)).take_while(move |d| *d <= hi)
}

fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if date.month() == 12 { (date.year() + 1, 1) } else { (date.year(), date.month() + 1) };
    NaiveDate::from_ymd_opt(y, m, 1)
}

/// Both scales for one tick of the animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: LinearScale,
}

impl Scales {
    /// Scales before the first tick: first date only on X, full value range on Y.
    pub fn initial(records: &[Record], geometry: &Geometry) -> Option<Self> {
        let first = records.first()?.date;
        let extent = value_extent(records)?;
        Some(Self::with_domains((first, first), extent, geometry))
    }

    /// Scales fitted to a visible prefix: `[first, last]` dates and `[min, max]` values.
    pub fn for_prefix(prefix: &[Record], geometry: &Geometry) -> Option<Self> {
        let first = prefix.first()?.date;
        let last = prefix.last()?.date;
        let extent = value_extent(prefix)?;
        Some(Self::with_domains((first, last), extent, geometry))
    }

    fn with_domains(dates: (NaiveDate, NaiveDate), values: (f64, f64), geometry: &Geometry) -> Self {
        Self {
            x: TimeScale::new(dates, (0.0, geometry.width)),
            y: LinearScale::new(values, (geometry.height, 0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_one_two_five() {
        assert_eq!(tick_step(0.0, 10.0, 10), 1.0);
        assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
        assert_eq!(tick_step(0.0, 47.0, 10), 5.0);
        assert_eq!(tick_step(0.0, 2.0, 10), 0.2);
    }

    #[test]
    fn month_iteration_starts_at_next_first() {
        let lo = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        let hi = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
        let months: Vec<_> = months_between(lo, hi).collect();
        assert_eq!(
            months,
            vec![
                NaiveDate::from_ymd_opt(2020, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn month_iteration_includes_aligned_start() {
        let lo = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let hi = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
        assert_eq!(months_between(lo, hi).collect::<Vec<_>>(), vec![lo]);
    }
}
