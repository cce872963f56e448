use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    Empty,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("theme label is empty")]
    Empty,

    #[error("theme label {0:?} contains whitespace")]
    Whitespace(String),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("transition duration must be non-zero for animated slides")]
    ZeroTransition,

    #[error("swipe threshold must be positive, got {0}")]
    SwipeThreshold(f32),

    #[error("swipe restraint must not be negative, got {0}")]
    SwipeRestraint(f32),

    #[error("autoplay interval must be non-zero")]
    ZeroAutoplay,

    #[error("autoplay interval {0} is not a valid number of seconds")]
    InvalidAutoplay(f32),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in directory: {0}")]
    NoImages(PathBuf),

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}
