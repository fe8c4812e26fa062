//! External collaborators of the in-call screen
//!
//! The screen owns none of the call logic. It reads calls from a
//! [`CallRegistry`], sends hold/mute requests through [`CallCommands`],
//! reports UI state to an [`InCallPresenter`] and drives UI panels it does
//! not implement. Each collaborator is a trait so that the screen can run
//! against any UI toolkit and against recording fakes in tests.
//!
//! All collaborators are shared as `Arc<dyn Trait>` and must be
//! `Send + Sync`: call-state notifications are produced on signalling
//! threads even though the screen handles them on a single task.

use serde::{Deserialize, Serialize};

use crate::call::{Call, CallId, CallType};
use crate::input::KeyEvent;

/// Overall in-call state tracked by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InCallState {
    /// No calls at all
    NoCalls,
    /// A call is ringing
    Incoming,
    /// A call is being placed
    Outgoing,
    /// At least one call is connected
    InCall,
}

/// Screen orientation, forwarded to the proximity sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Portrait
    Portrait,
    /// Landscape
    Landscape,
}

/// Read access to the calls known to the telephony layer
pub trait CallRegistry: Send + Sync {
    /// Call by id
    fn call(&self, id: CallId) -> Option<Call>;

    /// The ringing call, if any
    fn incoming_call(&self) -> Option<Call>;

    /// The active call, or the held one when nothing is active
    fn active_or_background_call(&self) -> Option<Call>;
}

/// Call control requests
pub trait CallCommands: Send + Sync {
    /// Put a call on hold or take it off hold
    fn hold(&self, call_id: CallId, on_hold: bool);

    /// Mute or unmute the microphone
    fn mute(&self, muted: bool);

    /// Current microphone mute state
    fn is_muted(&self) -> bool;
}

/// Presenter coordinating the in-call UI
#[cfg_attr(test, mockall::automock)]
pub trait InCallPresenter: Send + Sync {
    /// Screen attached to (`true`) or detached from (`false`) the presenter
    fn set_screen_attached(&self, attached: bool);

    /// Screen became visible or hidden
    fn on_ui_showing(&self, showing: bool);

    /// User acknowledged or cancelled an error dialog
    fn on_dismiss_dialog(&self);

    /// Answer to a remote modify-call request
    fn modify_call_confirm(&self, accepted: bool, call: &Call);

    /// Ask the network to change the call type
    fn send_modify_call_request(&self, call_id: CallId, call_type: CallType);

    /// Handle the hardware call key, returns whether it did anything
    fn handle_call_key(&self) -> bool;

    /// Current in-call state
    fn in_call_state(&self) -> InCallState;
}

/// Proximity sensor owned by the presenter
pub trait ProximitySensor: Send + Sync {
    /// Whether the display is off because something is near the sensor
    fn is_screen_off_by_proximity(&self) -> bool;

    /// Dialpad shown or hidden
    fn on_dialpad_visible(&self, visible: bool);

    /// Device configuration changed
    fn on_configuration_changed(&self, orientation: Orientation);
}

/// DTMF dialpad panel
pub trait DialpadPanel: Send + Sync {
    /// Whether the dialpad is on screen
    fn is_visible(&self) -> bool;

    /// Show or hide the dialpad
    fn set_visible(&self, visible: bool);

    /// Key press while the dialpad is visible, returns whether it was consumed
    fn on_dialer_key_down(&self, event: &KeyEvent) -> bool;

    /// Key release, `None` stops any tone in progress
    fn on_dialer_key_up(&self, event: Option<&KeyEvent>) -> bool;
}

/// How the call buttons panel hides itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HideMode {
    /// Removed from layout
    Gone,
    /// Keeps its space, not drawn
    Invisible,
}

/// Call buttons panel (mute, hold, dialpad toggle, ...)
pub trait CallButtonPanel: Send + Sync {
    /// Toggle the dialpad with the button panel's animation
    fn display_dialpad(&self, visible: bool);

    /// Enable or disable the buttons
    fn set_enabled(&self, enabled: bool);

    /// How the panel hides
    fn set_hide_mode(&self, mode: HideMode);

    /// Whether buttons stay visible when there is no call
    fn set_show_buttons_if_idle(&self, show: bool);
}

/// Incoming call answer panel
pub trait AnswerPanel: Send + Sync {
    /// Whether the answer panel is on screen
    fn is_visible(&self) -> bool;

    /// Whether the panel has a dialog of its own open
    fn has_pending_dialogs(&self) -> bool;

    /// Close the panel's own dialogs
    fn dismiss_pending_dialogs(&self);
}

/// Conference participant manager panel
pub trait ConferenceManagerPanel: Send + Sync {
    /// Whether the panel is on screen
    fn is_visible(&self) -> bool;

    /// Show or hide the panel
    fn set_visible(&self, visible: bool);
}
