//! Screen configuration
//!
//! Settings that the host platform normally provides through system
//! settings and resources: the incoming call style, the visible window of
//! a flip cover, and text overrides for the message catalog. A
//! configuration can be built in code or loaded from JSON.
//!
//! # Usage Examples
//!
//! ```rust
//! use incall_core::config::{IncomingCallStyle, ScreenConfig};
//! use incall_core::messages::MessageId;
//!
//! let config = ScreenConfig::new()
//!     .with_incoming_call_style(IncomingCallStyle::Classic)
//!     .with_cover_window(vec![0, 60, 420, 660])
//!     .with_message_override(MessageId::FdnOnly, "Fixed dialling numbers only");
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.cover_window().unwrap().height(), 420);
//! ```
//!
//! ```rust
//! use incall_core::config::{IncomingCallStyle, ScreenConfig};
//!
//! let json = r#"{
//!     "incoming_call_style": "FullscreenPhoto",
//!     "cover_window": [10, 0, 310, 480],
//!     "message_overrides": { "CallBarred": "Barred" }
//! }"#;
//! let config = ScreenConfig::from_json_str(json).unwrap();
//! assert!(config.uses_fullscreen_caller_photo());
//! assert_eq!(config.notification_capacity, 256);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{InCallError, InCallResult};
use crate::messages::{MessageCatalog, MessageId};

/// How an incoming call is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomingCallStyle {
    /// Caller photo fills the screen, navigation bar translucent
    FullscreenPhoto,
    /// Call card with a small photo
    Classic,
}

impl Default for IncomingCallStyle {
    fn default() -> Self {
        IncomingCallStyle::FullscreenPhoto
    }
}

/// Visible window of a flip cover, in display pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverWindow {
    /// Top edge
    pub top: i32,
    /// Left edge
    pub left: i32,
    /// Bottom edge
    pub bottom: i32,
    /// Right edge
    pub right: i32,
}

impl CoverWindow {
    /// Build from `[top, left, bottom, right]`
    ///
    /// Rejects anything but four values, inverted edges, and spans that do
    /// not fit in an `i32`.
    pub fn from_coords(coords: &[i32]) -> Option<Self> {
        let [top, left, bottom, right] = *coords else {
            return None;
        };
        let height = bottom.checked_sub(top)?;
        let width = right.checked_sub(left)?;
        if height < 0 || width < 0 {
            return None;
        }
        Some(Self {
            top,
            left,
            bottom,
            right,
        })
    }

    /// Window height, clamped to `0..=i32::MAX`
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top).max(0)
    }

    /// Window width, clamped to `0..=i32::MAX`
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left).max(0)
    }
}

/// In-call screen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Incoming call presentation
    pub incoming_call_style: IncomingCallStyle,
    /// Flip cover window as `[top, left, bottom, right]`
    pub cover_window: Option<Vec<i32>>,
    /// Replacement text for catalog messages
    pub message_overrides: HashMap<MessageId, String>,
    /// Capacity of the notification broadcast channel
    pub notification_capacity: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            incoming_call_style: IncomingCallStyle::default(),
            cover_window: None,
            message_overrides: HashMap::new(),
            notification_capacity: 256,
        }
    }
}

impl ScreenConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> InCallResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> InCallResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading screen configuration");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the incoming call style
    pub fn with_incoming_call_style(mut self, style: IncomingCallStyle) -> Self {
        self.incoming_call_style = style;
        self
    }

    /// Set the flip cover window coordinates
    pub fn with_cover_window(mut self, coords: Vec<i32>) -> Self {
        self.cover_window = Some(coords);
        self
    }

    /// Override one catalog message
    pub fn with_message_override(mut self, id: MessageId, text: impl Into<String>) -> Self {
        self.message_overrides.insert(id, text.into());
        self
    }

    /// Set the notification channel capacity
    pub fn with_notification_capacity(mut self, capacity: usize) -> Self {
        self.notification_capacity = capacity;
        self
    }

    /// Check the settings that would make the screen misbehave
    ///
    /// A malformed cover window is not an error: it is ignored with a
    /// warning when the screen reads it.
    pub fn validate(&self) -> InCallResult<()> {
        if self.notification_capacity == 0 {
            return Err(InCallError::config("notification_capacity must be greater than zero"));
        }
        if let Some((id, _)) = self.message_overrides.iter().find(|(_, text)| text.trim().is_empty()) {
            return Err(InCallError::config(format!("empty text for message override {}", id)));
        }
        Ok(())
    }

    /// Whether the fullscreen caller photo style is in use
    pub fn uses_fullscreen_caller_photo(&self) -> bool {
        self.incoming_call_style == IncomingCallStyle::FullscreenPhoto
    }

    /// The cover window, if configured with four usable coordinates
    pub fn cover_window(&self) -> Option<CoverWindow> {
        let coords = self.cover_window.as_ref()?;
        let window = CoverWindow::from_coords(coords);
        if window.is_none() {
            tracing::warn!(?coords, "Ignoring cover window: expected 4 coordinates forming a non-inverted window");
        }
        window
    }

    /// Message catalog with this configuration's overrides
    pub fn catalog(&self) -> MessageCatalog {
        MessageCatalog::from_overrides(self.message_overrides.clone())
    }
}
