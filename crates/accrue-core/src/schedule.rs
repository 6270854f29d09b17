// File: crates/accrue-core/src/schedule.rs
// Summary: Build generation token and the cooperative single-thread tick queue.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::time::Duration;

/// Identifies one chart build. Ticks carry the generation that scheduled them;
/// a tick whose generation is not current belongs to a discarded build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub const fn new(value: u64) -> Self { Self(value) }
    pub const fn get(self) -> u64 { self.0 }
    pub const fn next(self) -> Self { Self(self.0 + 1) }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTick {
    pub due: Duration,
    pub generation: Generation,
    /// Animation counter at scheduling time; the tick draws `index + 1` records.
    pub index: usize,
    seq: u64,
}

impl Ord for ScheduledTick {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ScheduledTick {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending ticks ordered by due time, then by scheduling order. The clock is
/// supplied by the host: virtual for headless runs, wall time for windows.
#[derive(Debug, Default)]
pub struct TickScheduler {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<ScheduledTick>>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest time the host reported.
    pub fn now(&self) -> Duration { self.now }
    pub fn len(&self) -> usize { self.queue.len() }
    pub fn is_empty(&self) -> bool { self.queue.is_empty() }

    /// Move the clock forward. Earlier times are ignored.
    pub fn advance_clock(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Queue a tick `delay` after the current clock. Returns its due time.
    pub fn schedule_after(&mut self, delay: Duration, generation: Generation, index: usize) -> Duration {
        let due = self.now + delay;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(ScheduledTick { due, generation, index, seq }));
        due
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(t)| t.due)
    }

    /// Advance the clock to `now` and pop the earliest tick if it is due.
    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledTick> {
        self.advance_clock(now);
        match self.queue.peek() {
            Some(Reverse(t)) if t.due <= self.now => self.queue.pop().map(|Reverse(t)| t),
            _ => None,
        }
    }
}
