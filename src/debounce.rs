//! Trailing-edge debounce.
//!
//! A burst of calls collapses into one, fired once the delay has passed
//! without a newer call. Time is passed in by the caller, who polls once per
//! frame.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::constants::DEBOUNCE_DELAY;

#[derive(Debug)]
struct Pending<A> {
    args: A,
    deadline: Instant,
}

#[derive(Debug)]
pub struct Debouncer<A> {
    delay: Duration,
    pending: Option<Pending<A>>,
}

impl<A> Default for Debouncer<A> {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl<A> Debouncer<A> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a call with `args`, replacing any call still waiting.
    ///
    /// Returns `true` if a pending call was superseded.
    pub fn schedule(&mut self, args: A, now: Instant) -> bool {
        let replaced = self
            .pending
            .replace(Pending {
                args,
                deadline: now + self.delay,
            })
            .is_some();
        if replaced {
            trace!("debounced call superseded");
        }
        replaced
    }

    /// Take the pending arguments if their deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if due {
            self.pending.take().map(|p| p.args)
        } else {
            None
        }
    }

    /// Run `op` with the pending arguments if their deadline has passed.
    pub fn fire_due<R>(&mut self, now: Instant, op: impl FnOnce(A) -> R) -> Option<R> {
        self.poll(now).map(op)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending call, returning its arguments.
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|p| p.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_fires_once_with_last_args() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        let mut calls = Vec::new();

        assert!(!debouncer.schedule("first", t0));
        assert!(debouncer.schedule("second", t0 + ms(90)));
        assert!(debouncer.schedule("third", t0 + ms(180)));

        // poll every 16ms frame for a second
        for frame in 0..=60 {
            debouncer.fire_due(t0 + ms(frame * 16), |args| calls.push(args));
        }
        assert_eq!(calls, ["third"]);
    }

    #[test]
    fn waits_for_quiet_period() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.schedule(1, t0);
        debouncer.schedule(2, t0 + ms(200));

        // the first deadline no longer counts
        assert_eq!(debouncer.poll(t0 + ms(300)), None);
        assert_eq!(debouncer.poll(t0 + ms(499)), None);
        assert_eq!(debouncer.poll(t0 + ms(500)), Some(2));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(t0 + ms(900)), None);
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.schedule('a', t0);
        assert_eq!(debouncer.poll(t0 + ms(300)), Some('a'));
        debouncer.schedule('b', t0 + ms(1000));
        assert_eq!(debouncer.poll(t0 + ms(1300)), Some('b'));
    }

    #[test]
    fn button_burst_navigates_once() {
        use crate::carousel::{Carousel, Command};
        use crate::state::TransitionMode;
        use crate::theme::{Theme, ThemeIndicator};

        struct Noop;
        impl ThemeIndicator for Noop {
            fn apply(&mut self, _theme: &Theme) {}
        }

        let themes = (0..5).map(|i| Theme::new(format!("t{i}")).unwrap()).collect();
        let mut carousel = Carousel::new(themes, TransitionMode::Instant, Noop).unwrap();
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));

        debouncer.schedule(Command::Next, t0);
        debouncer.schedule(Command::Next, t0 + ms(100));
        debouncer.schedule(Command::Previous, t0 + ms(200));

        let mut navigations = 0;
        for frame in 0..=60 {
            if let Some(command) = debouncer.poll(t0 + ms(frame * 16)) {
                let _ = carousel.apply(command);
                navigations += 1;
            }
        }
        assert_eq!(navigations, 1);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn cancel_drops_pending_call() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(10));
        debouncer.schedule(7, t0);
        assert_eq!(debouncer.cancel(), Some(7));
        assert_eq!(debouncer.poll(t0 + ms(100)), None);
    }
}
