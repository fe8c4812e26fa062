//! Event system for the in-call screen
//!
//! Two directions:
//!
//! - [`ScreenEvent`] is what the outside world asks the screen to do:
//!   lifecycle transitions, input, call-state notifications and dialog
//!   callbacks from the UI toolkit. They are applied in order by the
//!   [`ScreenEventLoop`](crate::event_loop::ScreenEventLoop).
//! - [`ScreenNotification`] is what the screen reports back: dialogs shown
//!   and dismissed, consent outcomes, toasts. Any number of observers can
//!   subscribe through an [`EventEmitter`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

use crate::call::{Call, CallId};
use crate::collaborators::Orientation;
use crate::consent::{ConsentButton, ConsentDecision};
use crate::dialog::{DialogId, DialogKind};
use crate::input::KeyEvent;
use crate::messages::MessageId;

/// Lifecycle phase of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// Built, panels not wired yet
    Uninitialized,
    /// Panels wired
    Created,
    /// Attached to the presenter
    Started,
    /// Visible and receiving input
    Foreground,
    /// Hidden but still attached
    Background,
    /// Detached from the presenter
    Stopped,
    /// Gone for good
    TornDown,
}

/// How a host launched or re-launched the screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenIntent {
    /// Normal launch; `show_dialpad` leaves the dialpad alone when `None`
    Main { show_dialpad: Option<bool> },
    /// Any other action, ignored
    Other(String),
}

/// Why a dialog left the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DismissReason {
    /// User pressed a button
    Acknowledged,
    /// User backed out of the dialog
    Cancelled,
    /// Replaced by a newer dialog of the same kind or by an error
    Replaced,
    /// Screen going away
    Teardown,
}

/// Request delivered to the screen
#[derive(Debug, Clone)]
pub enum ScreenEvent {
    /// Wire panels
    Create,
    /// Attach to the presenter
    Start,
    /// Became visible
    Foreground,
    /// Became hidden
    Background,
    /// No longer attached
    Stop,
    /// Screen destroyed, ends the event loop
    Teardown,
    /// Launched again with a new intent
    NewIntent(ScreenIntent),
    /// Back button
    BackPressed,
    /// Key pressed
    KeyDown(KeyEvent),
    /// Key released
    KeyUp(KeyEvent),
    /// Device configuration changed
    ConfigurationChanged(Orientation),
    /// Flip cover opened or closed
    LidStateChanged { closed: bool },
    /// Presenter asks for the dialpad
    DisplayDialpad(bool),
    /// Presenter asks for the conference manager
    DisplayManageConference(bool),
    /// Conference manager "done" pressed
    ManageConferenceDone,
    /// Call ended, maybe explain why
    CallDisconnected(Option<Call>),
    /// Supplementary service request failed, raw service code
    SuppServiceFailed(u32),
    /// Remote party asks to change the call type
    ModifyCallRequested(Call),
    /// Local modify request failed
    AvpUpgradeFailed(String),
    /// Dialled string paused on a wait character
    PostCharWait { call_id: CallId, chars: String },
    /// Error dialog OK pressed
    ErrorDialogAcknowledged(DialogId),
    /// Error dialog cancelled
    ErrorDialogCancelled(DialogId),
    /// Consent dialog button pressed
    ConsentButtonClicked(DialogId, ConsentButton),
    /// Consent dialog went away
    ConsentDialogDismissed(DialogId),
    /// Dismiss every dialog
    DismissPendingDialogs,
}

/// Notification emitted by the screen
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenNotification {
    /// Lifecycle phase changed
    LifecycleChanged {
        /// Previous phase
        from: LifecyclePhase,
        /// New phase
        to: LifecyclePhase,
    },
    /// A modal dialog was presented
    DialogShown {
        /// Dialog id
        id: DialogId,
        /// Error or consent
        kind: DialogKind,
        /// Message displayed
        message: MessageId,
        /// When it was shown
        shown_at: DateTime<Utc>,
    },
    /// A modal dialog went away
    DialogDismissed {
        /// Dialog id
        id: DialogId,
        /// Error or consent
        kind: DialogKind,
        /// Why
        reason: DismissReason,
    },
    /// A consent prompt resolved
    ConsentResolved {
        /// Call the prompt was about
        call_id: CallId,
        /// Outcome
        decision: ConsentDecision,
    },
    /// A toast was shown
    Toast {
        /// Text of the toast
        text: String,
    },
}

/// Event stream type
pub type EventStream = BroadcastStream<ScreenNotification>;

/// Pull-style reader over the screen's notifications.
///
/// Notifications a slow reader fell behind on are skipped; the reader only
/// ends once the emitter is gone.
pub struct EventIterator {
    stream: EventStream,
}

impl EventIterator {
    /// Wrap a subscription
    pub fn new(stream: EventStream) -> Self {
        Self { stream }
    }

    /// Next notification, or `None` once the screen is dropped
    pub async fn next(&mut self) -> Option<ScreenNotification> {
        use tokio_stream::StreamExt;
        loop {
            match self.stream.next().await? {
                Ok(notification) => return Some(notification),
                Err(BroadcastStreamRecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "Notification reader lagged, skipping ahead");
                }
            }
        }
    }
}

/// Fan-out of [`ScreenNotification`]s to whoever renders the screen
#[derive(Clone)]
pub struct EventEmitter {
    sender: broadcast::Sender<ScreenNotification>,
}

impl EventEmitter {
    /// `capacity` bounds how far a subscriber may fall behind, minimum 1
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish a notification. With no subscribers it is dropped.
    pub fn emit(&self, event: ScreenNotification) {
        if self.sender.send(event).is_err() {
            tracing::trace!("No notification subscribers");
        }
    }

    /// Subscribe as a `Stream`
    pub fn subscribe(&self) -> EventStream {
        BroadcastStream::new(self.sender.subscribe())
    }

    /// Subscribe without pulling in `StreamExt`
    pub fn subscribe_simple(&self) -> EventIterator {
        EventIterator::new(self.subscribe())
    }

    /// Raw receiver, for synchronous draining with `try_recv`
    pub fn receiver(&self) -> broadcast::Receiver<ScreenNotification> {
        self.sender.subscribe()
    }

    /// Live subscriptions
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new(256)
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_without_receivers_is_silent() {
        let emitter = EventEmitter::new(4);
        emitter.emit(ScreenNotification::Toast { text: "nobody".into() });
        assert_eq!(emitter.receiver_count(), 0);
    }

    #[tokio::test]
    async fn test_subscribe_simple_receives_in_order() {
        let emitter = EventEmitter::new(8);
        let mut events = emitter.subscribe_simple();

        emitter.emit(ScreenNotification::Toast { text: "one".into() });
        emitter.emit(ScreenNotification::Toast { text: "two".into() });

        assert_eq!(events.next().await, Some(ScreenNotification::Toast { text: "one".into() }));
        assert_eq!(events.next().await, Some(ScreenNotification::Toast { text: "two".into() }));
    }

    #[tokio::test]
    async fn test_lagged_reader_skips_ahead() {
        let emitter = EventEmitter::new(1);
        let mut events = emitter.subscribe_simple();

        emitter.emit(ScreenNotification::Toast { text: "lost".into() });
        emitter.emit(ScreenNotification::Toast { text: "kept".into() });

        assert_eq!(events.next().await, Some(ScreenNotification::Toast { text: "kept".into() }));
        drop(emitter);
        assert_eq!(events.next().await, None);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let emitter = EventEmitter::new(0);
        let mut rx = emitter.receiver();
        emitter.emit(ScreenNotification::Toast { text: "x".into() });
        assert!(rx.try_recv().is_ok());
    }
}
