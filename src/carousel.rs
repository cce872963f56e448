//! Carousel controller.
//!
//! Owns the current slide index, the transition lock and the theme of every
//! slide. Markers for each slide are derived from that state on demand, so
//! exactly one slide is active whenever the carousel is settled.

use tracing::debug;

use crate::error::CarouselError;
use crate::state::{CarouselState, Direction, SlideMarker, TransitionMode};
use crate::theme::{Theme, ThemeIndicator};

/// Navigation request from any input source.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Next,
    Previous,
}

/// Handle for an animated transition in flight.
///
/// The carousel stays locked until the handle is passed back to
/// [`Carousel::complete`]. It cannot be cloned, so each transition completes
/// at most once.
#[must_use = "the carousel stays locked until the transition is completed"]
#[derive(Debug, PartialEq, Eq)]
pub struct Transition {
    id: u64,
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    id: u64,
    from: usize,
    direction: Direction,
}

#[derive(Debug)]
pub struct Carousel<I> {
    themes: Vec<Theme>,
    current: usize,
    mode: TransitionMode,
    in_flight: Option<InFlight>,
    next_id: u64,
    indicator: I,
}

impl<I: ThemeIndicator> Carousel<I> {
    /// Show the first slide and apply its theme.
    pub fn new(
        themes: Vec<Theme>,
        mode: TransitionMode,
        mut indicator: I,
    ) -> Result<Self, CarouselError> {
        let first = themes.first().ok_or(CarouselError::Empty)?;
        indicator.apply(first);

        Ok(Self {
            themes,
            current: 0,
            mode,
            in_flight: None,
            next_id: 0,
            indicator,
        })
    }

    pub fn next(&mut self) -> Option<Transition> {
        self.step(Direction::Forward)
    }

    pub fn previous(&mut self) -> Option<Transition> {
        self.step(Direction::Backward)
    }

    pub fn apply(&mut self, command: Command) -> Option<Transition> {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
        }
    }

    /// Navigate to `n` wrapped into `[0, len)`.
    ///
    /// The slides move the short way round; ties go forward.
    pub fn goto_absolute(&mut self, n: isize) -> Option<Transition> {
        let target = self.wrap(n);
        if target == self.current {
            return None;
        }
        let forward = (target + self.len() - self.current) % self.len();
        let direction = if forward * 2 <= self.len() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.navigate(target, direction)
    }

    /// Finish the transition `transition` belongs to.
    ///
    /// Returns `false` when the handle is stale, i.e. not the transition
    /// currently in flight.
    pub fn complete(&mut self, transition: Transition) -> bool {
        match self.in_flight {
            Some(in_flight) if in_flight.id == transition.id => {
                self.in_flight = None;
                debug!(index = self.current, "transition settled");
                true
            }
            _ => {
                debug!(id = transition.id, "ignoring stale transition");
                false
            }
        }
    }

    pub fn state(&self) -> CarouselState {
        if self.in_flight.is_some() {
            CarouselState::Transitioning
        } else {
            CarouselState::Idle
        }
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_theme(&self) -> &Theme {
        &self.themes[self.current]
    }

    pub fn theme(&self, index: usize) -> Option<&Theme> {
        self.themes.get(index)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always false; a carousel is never built without slides.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn marker(&self, index: usize) -> SlideMarker {
        match self.in_flight {
            Some(t) if index == self.current => SlideMarker::Entering(t.direction.entering_edge()),
            Some(t) if index == t.from => SlideMarker::Leaving(t.direction.leaving_edge()),
            None if index == self.current => SlideMarker::Active,
            _ => SlideMarker::Hidden,
        }
    }

    pub fn markers(&self) -> impl Iterator<Item = SlideMarker> + '_ {
        (0..self.len()).map(|i| self.marker(i))
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    pub fn indicator_mut(&mut self) -> &mut I {
        &mut self.indicator
    }

    fn wrap(&self, n: isize) -> usize {
        // len fits in isize: a Vec never holds more than isize::MAX elements
        n.rem_euclid(self.len() as isize) as usize
    }

    fn step(&mut self, direction: Direction) -> Option<Transition> {
        let delta = match direction {
            Direction::Forward => 1,
            Direction::Backward => -1,
        };
        let target = self.wrap(self.current as isize + delta);
        self.navigate(target, direction)
    }

    fn navigate(&mut self, target: usize, direction: Direction) -> Option<Transition> {
        if self.in_flight.is_some() {
            debug!(?direction, "transition in progress, dropping navigation");
            return None;
        }

        let from = self.current;
        self.current = target;
        self.indicator.apply(&self.themes[target]);
        debug!(from, to = target, theme = %self.themes[target], "navigated");

        match self.mode {
            TransitionMode::Instant => None,
            // A single slide has nothing to animate
            TransitionMode::Animated if from == target => None,
            TransitionMode::Animated => {
                let id = self.next_id;
                self.next_id += 1;
                self.in_flight = Some(InFlight { id, from, direction });
                Some(Transition {
                    id,
                    from,
                    to: target,
                    direction,
                })
            }
        }
    }
}
