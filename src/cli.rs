use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use theme_carousel::constants::{
    DEBOUNCE_DELAY, RENDER_HEIGHT, RENDER_WIDTH, SWIPE_ALLOWED_TIME, SWIPE_RESTRAINT,
    SWIPE_THRESHOLD, TRANSITION_DURATION,
};
use theme_carousel::gesture::SwipeThresholds;
use theme_carousel::{CarouselConfig, ConfigError, Theme, TransitionMode};

/// Image carousel whose background follows the theme of the active slide.
#[derive(Parser, Debug)]
#[command(name = "theme-carousel", version, about)]
pub struct Args {
    /// Directory holding the slide images.
    pub directory: PathBuf,

    /// Themes cycled over the slides, e.g. `sunset,ocean`. Without it the
    /// theme comes from the file name (`beach@ocean.jpg`).
    #[arg(long, value_delimiter = ',')]
    pub themes: Vec<Theme>,

    /// Shuffle the slide order at startup.
    #[arg(long)]
    pub shuffle: bool,

    /// Swap slides without animation.
    #[arg(long)]
    pub instant: bool,

    /// Slide animation length in milliseconds.
    #[arg(long, default_value_t = TRANSITION_DURATION.as_millis() as u64)]
    pub transition_ms: u64,

    /// Quiet period before a burst of button presses is applied.
    #[arg(long, default_value_t = DEBOUNCE_DELAY.as_millis() as u64)]
    pub debounce_ms: u64,

    /// Advance to the next slide after this many idle seconds.
    #[arg(long)]
    pub autoplay: Option<f32>,

    /// Longest drag, in milliseconds, that still counts as a swipe.
    #[arg(long, default_value_t = SWIPE_ALLOWED_TIME.as_millis() as u64)]
    pub swipe_time_ms: u64,

    /// Minimum horizontal swipe distance in pixels.
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    pub swipe_threshold: f32,

    /// Maximum vertical swipe distance in pixels.
    #[arg(long, default_value_t = SWIPE_RESTRAINT)]
    pub swipe_restraint: f32,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    pub height: i32,

    /// Log filter directive (e.g. `debug`, `theme_carousel=trace`).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn to_config(&self) -> Result<CarouselConfig, ConfigError> {
        let autoplay = self
            .autoplay
            .map(|secs| Duration::try_from_secs_f32(secs).map_err(|_| ConfigError::InvalidAutoplay(secs)))
            .transpose()?;

        let config = CarouselConfig {
            mode: if self.instant {
                TransitionMode::Instant
            } else {
                TransitionMode::Animated
            },
            transition: Duration::from_millis(self.transition_ms),
            debounce: Duration::from_millis(self.debounce_ms),
            swipe: SwipeThresholds {
                allowed_time: Duration::from_millis(self.swipe_time_ms),
                threshold: self.swipe_threshold,
                restraint: self.swipe_restraint,
            },
            autoplay,
            shuffle: self.shuffle,
        };
        config.validate()?;
        Ok(config)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_config() {
        let args = Args::try_parse_from(["theme-carousel", "slides"]).unwrap();
        assert_eq!(args.directory, PathBuf::from("slides"));
        assert!(args.themes.is_empty());
        assert_eq!(args.to_config().unwrap(), CarouselConfig::default());
    }

    #[test]
    fn parses_theme_list_and_flags() {
        let args = Args::try_parse_from([
            "theme-carousel",
            "slides",
            "--themes",
            "sunset,ocean",
            "--instant",
            "--shuffle",
            "--autoplay",
            "2.5",
        ])
        .unwrap();
        let labels: Vec<_> = args.themes.iter().map(Theme::label).collect();
        assert_eq!(labels, ["sunset", "ocean"]);

        let config = args.to_config().unwrap();
        assert_eq!(config.mode, TransitionMode::Instant);
        assert!(config.shuffle);
        assert_eq!(config.autoplay, Some(Duration::from_millis(2500)));
    }

    #[test]
    fn rejects_blank_theme() {
        assert!(Args::try_parse_from(["theme-carousel", "slides", "--themes", "a,,b"]).is_err());
    }

    #[test]
    fn rejects_negative_autoplay() {
        let args =
            Args::try_parse_from(["theme-carousel", "slides", "--autoplay=-1"]).unwrap();
        assert_eq!(args.to_config(), Err(ConfigError::InvalidAutoplay(-1.0)));
    }

    #[test]
    fn rejects_zero_swipe_threshold() {
        let args =
            Args::try_parse_from(["theme-carousel", "slides", "--swipe-threshold", "0"]).unwrap();
        assert_eq!(args.to_config(), Err(ConfigError::SwipeThreshold(0.0)));
    }
}
