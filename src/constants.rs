use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_DURATION: Duration = Duration::from_millis(500); // Slide enter/leave animation
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);      // Control button coalescing window

pub const SWIPE_ALLOWED_TIME: Duration = Duration::from_millis(300);  // Max duration of a swipe
pub const SWIPE_THRESHOLD: f32 = 150.0;       // Min horizontal travel (px)
pub const SWIPE_RESTRAINT: f32 = 100.0;       // Max vertical travel (px)

pub const DEFAULT_THEME: &str = "default";
pub const THEME_CLASS_PREFIX: &str = "theme-";
