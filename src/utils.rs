//! Small helpers shared by the front-end: randomness and key matching.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Random integer in `[min, max]`, both ends inclusive.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

pub fn random_pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Fisher–Yates shuffle in place.
///
/// With `truncate`, a random length in `[0, len]` is drawn first and only
/// that prefix is shuffled and returned.
pub fn shuffle<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a mut [T], truncate: bool) -> &'a mut [T] {
    let length = if truncate {
        rng.random_range(0..=items.len())
    } else {
        items.len()
    };
    let prefix = &mut items[..length];
    prefix.shuffle(rng);
    prefix
}

/// A key matched either by name or by its legacy key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: &'static str,
    pub code: u32,
}

impl KeyBinding {
    pub const ENTER: KeyBinding = KeyBinding { key: "Enter", code: 13 };
    pub const ESCAPE: KeyBinding = KeyBinding { key: "Escape", code: 27 };
    pub const ARROW_LEFT: KeyBinding = KeyBinding { key: "ArrowLeft", code: 37 };
    pub const ARROW_RIGHT: KeyBinding = KeyBinding { key: "ArrowRight", code: 39 };

    pub fn matches(&self, key: Option<&str>, code: Option<u32>) -> bool {
        key == Some(self.key) || code == Some(self.code)
    }
}
