// File: crates/accrue-core/src/animator.rs
// Summary: Animation state machine extending the visible prefix one record per tick.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Before the first tick.
    Idle,
    Running { visible: usize },
    /// Every record is drawn; no further ticks.
    Complete,
}

#[derive(Clone, Debug)]
pub struct Animator {
    total: usize,
    state: AnimationState,
}

impl Animator {
    pub fn new(total: usize) -> Self {
        Self { total, state: AnimationState::Idle }
    }

    pub fn state(&self) -> AnimationState { self.state }
    pub fn total(&self) -> usize { self.total }

    pub fn visible(&self) -> usize {
        match self.state {
            AnimationState::Idle => 0,
            AnimationState::Running { visible } => visible,
            AnimationState::Complete => self.total,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == AnimationState::Complete
    }

    /// Extend the prefix by one record. Returns the new visible count, or
    /// `None` once complete. An empty series completes on its first tick.
    pub fn tick(&mut self) -> Option<usize> {
        let next = match self.state {
            AnimationState::Complete => return None,
            AnimationState::Idle => 1,
            AnimationState::Running { visible } => visible + 1,
        };
        if next > self.total {
            self.state = AnimationState::Complete;
            return None;
        }
        self.state = if next == self.total {
            AnimationState::Complete
        } else {
            AnimationState::Running { visible: next }
        };
        Some(next)
    }
}
