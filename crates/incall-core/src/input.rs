//! Hardware key input delivered to the screen

use serde::{Deserialize, Serialize};

/// Keys the in-call screen cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Green call key
    Call,
    /// End call key (handled system-wide, never by the screen)
    EndCall,
    /// Camera shutter
    Camera,
    /// Volume up
    VolumeUp,
    /// Volume down
    VolumeDown,
    /// Speaker volume mute
    VolumeMute,
    /// Microphone mute
    Mute,
    /// Dialable digit `0`-`9`
    Digit(u8),
    /// `*`
    Star,
    /// `#`
    Pound,
    /// Anything else, by raw key code
    Other(i32),
}

impl KeyCode {
    /// Whether the key produces a DTMF tone on the dialpad
    pub fn is_dialable(&self) -> bool {
        match self {
            KeyCode::Digit(d) => *d <= 9,
            KeyCode::Star | KeyCode::Pound => true,
            _ => false,
        }
    }
}

/// A key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Which key
    pub code: KeyCode,
    /// How many times the key has auto-repeated, 0 for the initial press
    pub repeat_count: u32,
}

impl KeyEvent {
    /// Initial press or release of a key
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            repeat_count: 0,
        }
    }

    /// Auto-repeat of a held key
    pub fn repeated(code: KeyCode, repeat_count: u32) -> Self {
        Self { code, repeat_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialable_keys() {
        assert!(KeyCode::Digit(0).is_dialable());
        assert!(KeyCode::Digit(9).is_dialable());
        assert!(!KeyCode::Digit(10).is_dialable());
        assert!(KeyCode::Star.is_dialable());
        assert!(KeyCode::Pound.is_dialable());
        assert!(!KeyCode::Call.is_dialable());
        assert!(!KeyCode::Other(62).is_dialable());
    }
}
