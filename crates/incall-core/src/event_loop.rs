//! Single-task event loop for the screen
//!
//! Call-state notifications come from signalling threads, input and
//! lifecycle callbacks from the UI thread. The loop serialises all of them
//! onto one task so that [`InCallScreen`] never needs a lock: producers hold
//! cheap [`ScreenHandle`] clones and the loop applies events strictly in
//! arrival order.
//!
//! The loop ends on [`ScreenEvent::Teardown`] or when every handle has been
//! dropped; in the latter case the screen is torn down before the loop
//! returns it.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{InCallError, InCallResult};
use crate::events::{LifecyclePhase, ScreenEvent};
use crate::screen::{InCallScreen, ScreenLifecycle};

/// Default inbox size
pub const DEFAULT_INBOX_CAPACITY: usize = 1000;

/// Sending side of the screen's inbox
#[derive(Debug, Clone)]
pub struct ScreenHandle {
    event_tx: mpsc::Sender<ScreenEvent>,
}

impl ScreenHandle {
    /// Queue an event for the screen
    pub async fn send(&self, event: ScreenEvent) -> InCallResult<()> {
        self.event_tx
            .send(event)
            .await
            .map_err(|_| InCallError::invalid_state("screen event loop has stopped"))
    }

    /// Queue an event without waiting, fails if the inbox is full or closed
    pub fn try_send(&self, event: ScreenEvent) -> InCallResult<()> {
        self.event_tx.try_send(event).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => InCallError::invalid_state("screen inbox is full"),
            mpsc::error::TrySendError::Closed(_) => {
                InCallError::invalid_state("screen event loop has stopped")
            }
        })
    }

    /// Whether the loop is gone
    pub fn is_closed(&self) -> bool {
        self.event_tx.is_closed()
    }
}

/// Owns an [`InCallScreen`] and applies queued events to it
pub struct ScreenEventLoop {
    screen: InCallScreen,
    event_rx: mpsc::Receiver<ScreenEvent>,
    event_tx: mpsc::Sender<ScreenEvent>,
}

impl ScreenEventLoop {
    /// Wrap a screen with an inbox of the default size
    pub fn new(screen: InCallScreen) -> Self {
        Self::with_capacity(screen, DEFAULT_INBOX_CAPACITY)
    }

    /// Wrap a screen with an inbox of `capacity` events
    pub fn with_capacity(screen: InCallScreen, capacity: usize) -> Self {
        let (event_tx, event_rx) = mpsc::channel(capacity.max(1));
        Self {
            screen,
            event_rx,
            event_tx,
        }
    }

    /// Get a handle for producers
    pub fn handle(&self) -> ScreenHandle {
        ScreenHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// The wrapped screen
    pub fn screen(&self) -> &InCallScreen {
        &self.screen
    }

    /// Apply events until teardown or until every handle is dropped
    pub async fn run(self) -> InCallScreen {
        let Self {
            mut screen,
            mut event_rx,
            event_tx,
        } = self;
        // Only external handles keep the inbox open
        drop(event_tx);

        tracing::debug!("Screen event loop started");
        while let Some(event) = event_rx.recv().await {
            let teardown = matches!(event, ScreenEvent::Teardown);
            tracing::trace!(?event, "Applying screen event");

            if let Err(e) = screen.handle_event(event) {
                tracing::error!("Screen event failed: {}", e);
            }
            if teardown {
                break;
            }
        }

        if screen.phase() != LifecyclePhase::TornDown {
            tracing::debug!("All screen handles dropped, tearing down");
            screen.on_teardown();
        }
        tracing::debug!("Screen event loop stopped");
        screen
    }

    /// Run the loop on a new tokio task
    pub fn spawn(self) -> (ScreenHandle, JoinHandle<InCallScreen>) {
        let handle = self.handle();
        (handle, tokio::spawn(self.run()))
    }
}

impl std::fmt::Debug for ScreenEventLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenEventLoop")
            .field("screen", &self.screen)
            .finish()
    }
}
