//! Swipe classification for pointer and touch drags.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::carousel::Command;
use crate::constants::{SWIPE_ALLOWED_TIME, SWIPE_RESTRAINT, SWIPE_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Longest a drag may take and still count as a swipe.
    pub allowed_time: Duration,
    /// Minimum horizontal travel in pixels.
    pub threshold: f32,
    /// Maximum vertical travel in pixels.
    pub restraint: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            allowed_time: SWIPE_ALLOWED_TIME,
            threshold: SWIPE_THRESHOLD,
            restraint: SWIPE_RESTRAINT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Direction the content was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

impl Swipe {
    /// Dragging left pulls in the next slide, dragging right the previous one.
    pub fn command(self) -> Command {
        match self {
            Swipe::Left => Command::Next,
            Swipe::Right => Command::Previous,
        }
    }
}

/// Classify a finished drag; `None` means it was not a swipe.
pub fn classify(thresholds: &SwipeThresholds, elapsed: Duration, dx: f32, dy: f32) -> Option<Swipe> {
    if elapsed > thresholds.allowed_time {
        return None;
    }
    if dx.abs() < thresholds.threshold || dy.abs() > thresholds.restraint {
        return None;
    }
    Some(if dx < 0.0 { Swipe::Left } else { Swipe::Right })
}

/// Samples the start of a drag and classifies it when it ends.
#[derive(Debug, Default)]
pub struct SwipeDetector {
    thresholds: SwipeThresholds,
    start: Option<(Point, Instant)>,
}

impl SwipeDetector {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self { thresholds, start: None }
    }

    pub fn thresholds(&self) -> &SwipeThresholds {
        &self.thresholds
    }

    /// Pointer-down or touch-start. A second start restarts the sample.
    pub fn begin(&mut self, at: Point, now: Instant) {
        self.start = Some((at, now));
    }

    /// Pointer-up or touch-end. Without a matching start nothing happens.
    pub fn end(&mut self, at: Point, now: Instant) -> Option<Swipe> {
        let (start, started_at) = self.start.take()?;
        let elapsed = now.saturating_duration_since(started_at);
        let (dx, dy) = (at.x - start.x, at.y - start.y);
        let swipe = classify(&self.thresholds, elapsed, dx, dy);
        trace!(?elapsed, dx, dy, ?swipe, "drag finished");
        swipe
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
