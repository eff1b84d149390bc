//! Swappable animation timing for the view
//!
//! Nothing in the model reads these values; they only decide how far along a
//! list reveal or a carousel slide is drawn on a given frame.

use std::time::Duration;

use crate::config::AnimationConfig;
use crate::model::SlideDirection;

pub trait AnimationDriver: Send + Sync {
    /// How visible row `index` is, from 0.0 (hidden) to 1.0 (fully shown),
    /// `elapsed` after the list was (re)revealed.
    fn reveal_progress(&self, index: usize, elapsed: Duration) -> f32;

    /// Horizontal offset in columns of an incoming slide `elapsed` after the
    /// carousel index changed. Positive values sit to the right.
    fn slide_offset(&self, direction: SlideDirection, elapsed: Duration, width: u16) -> i32;
}

/// Rows fade in one after another; slides come in from the side they were
/// navigated towards.
#[derive(Clone, Copy, Debug)]
pub struct Staggered {
    pub stagger: Duration,
    pub duration: Duration,
}

impl Staggered {
    fn fraction(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl AnimationDriver for Staggered {
    fn reveal_progress(&self, index: usize, elapsed: Duration) -> f32 {
        let delay = self.stagger.saturating_mul(index.min(u32::MAX as usize) as u32);
        match elapsed.checked_sub(delay) {
            Some(since_start) => self.fraction(since_start),
            None => 0.0,
        }
    }

    fn slide_offset(&self, direction: SlideDirection, elapsed: Duration, width: u16) -> i32 {
        let remaining = 1.0 - self.fraction(elapsed);
        let offset = (f32::from(width) * remaining).round() as i32;
        match direction {
            SlideDirection::Forward => offset,
            SlideDirection::Backward => -offset,
        }
    }
}

/// Everything is drawn in its final position immediately
#[derive(Clone, Copy, Debug, Default)]
pub struct Still;

impl AnimationDriver for Still {
    fn reveal_progress(&self, _index: usize, _elapsed: Duration) -> f32 {
        1.0
    }

    fn slide_offset(&self, _direction: SlideDirection, _elapsed: Duration, _width: u16) -> i32 {
        0
    }
}

pub fn driver_from_config(config: &AnimationConfig) -> Box<dyn AnimationDriver> {
    if config.enabled {
        Box::new(Staggered {
            stagger: config.stagger,
            duration: config.duration,
        })
    } else {
        Box::new(Still)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staggered() -> Staggered {
        Staggered {
            stagger: Duration::from_millis(50),
            duration: Duration::from_millis(500),
        }
    }

    #[test]
    fn test_rows_start_one_stagger_apart() {
        let driver = staggered();
        assert_eq!(driver.reveal_progress(0, Duration::ZERO), 0.0);
        assert_eq!(driver.reveal_progress(2, Duration::from_millis(99)), 0.0);
        assert!(driver.reveal_progress(2, Duration::from_millis(150)) > 0.0);
        assert_eq!(driver.reveal_progress(0, Duration::from_millis(500)), 1.0);
        assert_eq!(driver.reveal_progress(3, Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_slide_settles_at_zero_from_the_right_side() {
        let driver = staggered();
        assert_eq!(driver.slide_offset(SlideDirection::Forward, Duration::ZERO, 40), 40);
        assert_eq!(driver.slide_offset(SlideDirection::Backward, Duration::ZERO, 40), -40);
        assert_eq!(driver.slide_offset(SlideDirection::Forward, Duration::from_millis(250), 40), 20);
        assert_eq!(driver.slide_offset(SlideDirection::Backward, Duration::from_secs(1), 40), 0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let driver = Staggered { stagger: Duration::ZERO, duration: Duration::ZERO };
        assert_eq!(driver.reveal_progress(7, Duration::ZERO), 1.0);
        assert_eq!(driver.slide_offset(SlideDirection::Forward, Duration::ZERO, 80), 0);
    }

    #[test]
    fn test_disabled_config_yields_still_driver() {
        let config = AnimationConfig { enabled: false, ..AnimationConfig::default() };
        let driver = driver_from_config(&config);
        assert_eq!(driver.reveal_progress(10, Duration::ZERO), 1.0);
        assert_eq!(driver.slide_offset(SlideDirection::Backward, Duration::ZERO, 80), 0);
    }
}
