//! App settings stored verbatim as the user set them.
//!
//! Serde field defaults mean a partially persisted record merges over the
//! defaults on load, so adding a setting never invalidates stored data.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_gravity() -> u8 {
    50
}

fn default_bounce() -> u8 {
    65
}

/// Toggle and slider values for the roller app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Rolling clatter sounds.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Haptic feedback on roll completion.
    #[serde(default = "default_true")]
    pub haptics: bool,
    /// Whether a device shake triggers a roll.
    #[serde(default)]
    pub shake_to_roll: bool,
    /// Physics gravity slider, 0-100.
    #[serde(default = "default_gravity")]
    pub gravity: u8,
    /// Physics bounce slider, 0-100.
    #[serde(default = "default_bounce")]
    pub bounce: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            haptics: true,
            shake_to_roll: false,
            gravity: 50,
            bounce: 65,
        }
    }
}

impl Settings {
    /// Set the gravity slider, clamped to 0-100.
    pub fn set_gravity(&mut self, value: u8) {
        self.gravity = value.min(100);
    }

    /// Set the bounce slider, clamped to 0-100.
    pub fn set_bounce(&mut self, value: u8) {
        self.bounce = value.min(100);
    }

    /// Restore all settings to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
