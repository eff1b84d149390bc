//! Auto-advancing carousel state machine
//!
//! The machine is time-free: timer expiry arrives as [`CarouselEvent::AutoplayTick`]
//! and [`CarouselEvent::CooldownElapsed`], delivered by whoever owns the timers
//! (see `controller::carousel`). That keeps every transition synchronous and
//! testable without a clock.

use std::time::{Duration, Instant};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(6);
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(10);
/// Measured in whatever unit the host reports drag positions in (terminal columns here).
pub const DEFAULT_DRAG_THRESHOLD: u32 = 6;

/// Timing and gesture settings shared by every carousel instance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    pub interval: Duration,
    pub cooldown: Duration,
    pub drag_threshold: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            cooldown: DEFAULT_COOLDOWN,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    Autoplaying,
    /// Manual navigation or a drag just happened; autoplay waits for the cooldown.
    Suspended,
    Dragging,
}

/// Which way the last index change went. Only used to pick a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SlideDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    AutoplayTick,
    Next,
    Previous,
    Select(usize),
    DragStart { x: i32 },
    DragEnd { x: i32 },
    CooldownElapsed,
}

/// What a single event did to the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Outcome {
    pub index_changed: bool,
    pub phase_changed: bool,
    /// The event moved the carousel into (or kept it in) `Suspended` because of user input.
    pub user_suspended: bool,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    direction: SlideDirection,
    phase: CarouselPhase,
    drag_origin: Option<i32>,
    drag_threshold: u32,
    /// When the index last changed, recorded by the timer owner for slide transitions
    slid_at: Option<Instant>,
}

impl Carousel {
    pub fn new(len: usize, config: &CarouselConfig) -> Self {
        Self {
            len,
            index: 0,
            direction: SlideDirection::Forward,
            phase: CarouselPhase::Autoplaying,
            drag_origin: None,
            drag_threshold: config.drag_threshold,
            slid_at: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.phase == CarouselPhase::Autoplaying
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == CarouselPhase::Dragging
    }

    pub fn slid_at(&self) -> Option<Instant> {
        self.slid_at
    }

    pub fn note_slide(&mut self, at: Instant) {
        self.slid_at = Some(at);
    }

    /// Apply one event. Events that make no sense in the current phase are no-ops.
    pub fn handle(&mut self, event: CarouselEvent) -> Outcome {
        if self.is_empty() {
            return Outcome::default();
        }

        let before_index = self.index;
        let before_phase = self.phase;
        let mut user_suspended = false;

        match (self.phase, event) {
            (CarouselPhase::Autoplaying, CarouselEvent::AutoplayTick) => {
                self.step_forward();
            }
            (CarouselPhase::Autoplaying | CarouselPhase::Suspended, CarouselEvent::Next) => {
                self.step_forward();
                self.phase = CarouselPhase::Suspended;
                user_suspended = true;
            }
            (CarouselPhase::Autoplaying | CarouselPhase::Suspended, CarouselEvent::Previous) => {
                self.step_backward();
                self.phase = CarouselPhase::Suspended;
                user_suspended = true;
            }
            (CarouselPhase::Autoplaying | CarouselPhase::Suspended, CarouselEvent::Select(target)) => {
                if target >= self.len {
                    return Outcome::default();
                }
                if target != self.index {
                    self.direction = if target > self.index {
                        SlideDirection::Forward
                    } else {
                        SlideDirection::Backward
                    };
                    self.index = target;
                }
                self.phase = CarouselPhase::Suspended;
                user_suspended = true;
            }
            (_, CarouselEvent::DragStart { x }) => {
                self.drag_origin = Some(x);
                self.phase = CarouselPhase::Dragging;
            }
            (CarouselPhase::Dragging, CarouselEvent::DragEnd { x }) => {
                let origin = self.drag_origin.take().unwrap_or(x);
                let displacement = i64::from(x) - i64::from(origin);
                // A press and release in place is a click, whatever the threshold
                if displacement != 0 && displacement.unsigned_abs() >= u64::from(self.drag_threshold) {
                    if displacement < 0 {
                        self.step_forward();
                    } else {
                        self.step_backward();
                    }
                }
                self.phase = CarouselPhase::Suspended;
                user_suspended = true;
            }
            (CarouselPhase::Suspended, CarouselEvent::CooldownElapsed) => {
                self.phase = CarouselPhase::Autoplaying;
            }
            _ => {}
        }

        let outcome = Outcome {
            index_changed: self.index != before_index,
            phase_changed: self.phase != before_phase,
            user_suspended,
        };
        if outcome.index_changed || outcome.phase_changed {
            tracing::debug!(
                ?event,
                index = self.index,
                phase = ?self.phase,
                "Carousel transition"
            );
        }
        outcome
    }

    fn step_forward(&mut self) {
        self.index = (self.index + 1) % self.len;
        self.direction = SlideDirection::Forward;
    }

    fn step_backward(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
        self.direction = SlideDirection::Backward;
    }
}
