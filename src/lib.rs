//! Themed image carousel.
//!
//! The controller in [`carousel`] is independent of any windowing library:
//! it receives its slides' themes and a [`theme::ThemeIndicator`] at
//! construction and reports per-slide [`state::SlideMarker`]s for a renderer
//! to draw. [`gesture`] and [`debounce`] turn raw input into navigation
//! commands.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod gesture;
pub mod images;
pub mod state;
pub mod theme;
pub mod utils;

pub use carousel::{Carousel, Command, Transition};
pub use config::CarouselConfig;
pub use error::{CarouselError, ConfigError, LoadError, ThemeError};
pub use state::{CarouselState, Direction, Edge, SlideMarker, TransitionMode};
pub use theme::{Theme, ThemeIndicator};
