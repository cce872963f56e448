use std::time::Duration;

use crate::constants::{DEBOUNCE_DELAY, TRANSITION_DURATION};
use crate::error::ConfigError;
use crate::gesture::SwipeThresholds;
use crate::state::TransitionMode;

/// Runtime settings of the carousel and its input sources.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub mode: TransitionMode,
    pub transition: Duration,
    pub debounce: Duration,
    pub swipe: SwipeThresholds,
    /// Advance automatically after this long without navigation.
    pub autoplay: Option<Duration>,
    pub shuffle: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            mode: TransitionMode::Animated,
            transition: TRANSITION_DURATION,
            debounce: DEBOUNCE_DELAY,
            swipe: SwipeThresholds::default(),
            autoplay: None,
            shuffle: false,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == TransitionMode::Animated && self.transition.is_zero() {
            return Err(ConfigError::ZeroTransition);
        }
        if self.swipe.threshold.is_nan() || self.swipe.threshold <= 0.0 {
            return Err(ConfigError::SwipeThreshold(self.swipe.threshold));
        }
        if self.swipe.restraint.is_nan() || self.swipe.restraint < 0.0 {
            return Err(ConfigError::SwipeRestraint(self.swipe.restraint));
        }
        if self.autoplay.is_some_and(|d| d.is_zero()) {
            return Err(ConfigError::ZeroAutoplay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CarouselConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.debounce, Duration::from_millis(300));
        assert_eq!(config.swipe.allowed_time, Duration::from_millis(300));
        assert_eq!(config.swipe.threshold, 150.0);
        assert_eq!(config.swipe.restraint, 100.0);
    }

    #[test]
    fn zero_transition_only_matters_when_animated() {
        let mut config = CarouselConfig {
            transition: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTransition));
        config.mode = TransitionMode::Instant;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_swipe_thresholds() {
        let mut config = CarouselConfig::default();
        config.swipe.threshold = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::SwipeThreshold(0.0)));

        config.swipe.threshold = 150.0;
        config.swipe.restraint = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::SwipeRestraint(-1.0)));
    }

    #[test]
    fn rejects_zero_autoplay() {
        let config = CarouselConfig {
            autoplay: Some(Duration::ZERO),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroAutoplay));
    }
}
