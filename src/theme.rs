//! Slide themes and the shared theme indicator.
//!
//! Every slide carries a theme label. The carousel pushes the label of the
//! active slide into a [`ThemeIndicator`]; nothing else learns which slide is
//! showing.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_THEME, THEME_CLASS_PREFIX};
use crate::error::ThemeError;

/// Receives the theme of the active slide.
pub trait ThemeIndicator {
    fn apply(&mut self, theme: &Theme);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Theme(String);

impl Theme {
    pub fn new(label: impl Into<String>) -> Result<Self, ThemeError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ThemeError::Empty);
        }
        if label.chars().any(char::is_whitespace) {
            return Err(ThemeError::Whitespace(label));
        }
        Ok(Self(label))
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// Class applied to the theme indicator, e.g. `theme-sunset`.
    pub fn class_name(&self) -> String {
        format!("{THEME_CLASS_PREFIX}{}", self.0)
    }

    /// Theme encoded in a file stem after the last `@` (`beach@ocean` -> `ocean`).
    pub fn from_file_stem(stem: &str) -> Option<Self> {
        let (_, label) = stem.rsplit_once('@')?;
        Self::new(label).ok()
    }

    /// Background colour for this theme as RGB.
    ///
    /// Well-known labels get a fixed colour, anything else a stable colour
    /// derived from the label bytes.
    pub fn rgb(&self) -> [u8; 3] {
        match self.0.as_str() {
            "default" => [0x2b, 0x2d, 0x42],
            "dark" => [0x1e, 0x1e, 0x24],
            "light" => [0xe8, 0xe6, 0xe1],
            "sunset" => [0xf2, 0x6b, 0x38],
            "ocean" => [0x1b, 0x6c, 0xa8],
            "forest" => [0x2d, 0x6a, 0x4f],
            "rose" => [0xd6, 0x4f, 0x7a],
            other => {
                // FNV-1a, so colours survive restarts
                let hash = other.bytes().fold(0xcbf2_9ce4_8422_2325u64, |h, b| {
                    (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
                });
                let [r, g, b, ..] = hash.to_le_bytes();
                // keep it dark enough for white captions
                [r / 2 + 32, g / 2 + 32, b / 2 + 32]
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self(DEFAULT_THEME.to_string())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pick a theme for each slide.
///
/// An explicit list is cycled over the slides. Without one, each slide uses
/// the theme in its file stem, or the default theme.
pub fn assign_themes<S: AsRef<str>>(stems: &[S], explicit: &[Theme]) -> Vec<Theme> {
    if explicit.is_empty() {
        stems
            .iter()
            .map(|stem| Theme::from_file_stem(stem.as_ref()).unwrap_or_default())
            .collect()
    } else {
        explicit.iter().cycle().take(stems.len()).cloned().collect()
    }
}
