//! Modal dialog controller
//!
//! The screen shows two kinds of modal dialog: an error dialog explaining
//! why something failed, and a consent dialog asking whether to accept a
//! remote request to change the call type. Each kind lives in its own
//! [`DialogSlot`], so at most one of each is ever on screen.
//!
//! The controller does not draw anything. It asks a [`DialogHost`] to
//! present and dismiss alerts, and the host reports user interaction back
//! by [`DialogId`]. Callbacks carrying an id that is no longer in its slot
//! (the dialog was replaced or torn down in the meantime) are ignored.
//!
//! ```text
//!   error track:    Idle ──show_error──▶ ErrorShown ──ack/cancel/dismiss_all──▶ Idle
//!   consent track:  Idle ──show_consent─▶ ConsentShown ──dismissed/dismiss_all──▶ Idle
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::call::{Call, CallId, CallType};
use crate::collaborators::InCallPresenter;
use crate::consent::{ConsentButton, ConsentDecision, ConsentSession};
use crate::events::{DismissReason, EventEmitter, ScreenNotification};
use crate::messages::{MessageCatalog, MessageId};

/// Identifier of a presented dialog
pub type DialogId = Uuid;

/// Which slot a dialog occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogKind {
    /// Error explanation with a single OK button
    Error,
    /// Accept/decline prompt for a call type change
    Consent,
}

/// How the host should decorate the window behind a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backdrop {
    /// Dim the screen behind
    Dim,
    /// Blur the screen behind
    Blur,
}

/// Everything the host needs to present an alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSpec {
    /// Id the host must report callbacks with
    pub id: DialogId,
    /// Error or consent
    pub kind: DialogKind,
    /// Body text
    pub message: String,
    /// Positive button label
    pub positive_label: String,
    /// Negative button label, absent for single-button dialogs
    pub negative_label: Option<String>,
    /// Window decoration behind the dialog
    pub backdrop: Backdrop,
}

/// UI toolkit side of dialog presentation
pub trait DialogHost: Send + Sync {
    /// Present an alert
    fn show_alert(&self, alert: &AlertSpec);

    /// Take an alert off screen; must be safe for ids already gone
    fn dismiss_alert(&self, id: DialogId);

    /// Show a short-lived, non-modal message
    fn show_toast(&self, text: &str);

    /// Show the "continue dialling?" prompt for a paused dial string
    fn show_post_char_wait(&self, call_id: CallId, chars: &str);
}

/// An owned place for at most one value
#[derive(Debug)]
pub struct DialogSlot<T> {
    current: Option<T>,
}

impl<T> DialogSlot<T> {
    /// Empty slot
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Whether something is in the slot
    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    /// Borrow the current value
    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Mutably borrow the current value
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.current.as_mut()
    }

    /// Put a value in, handing back whatever was there
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.current.replace(value)
    }

    /// Empty the slot, handing back its value
    pub fn take(&mut self) -> Option<T> {
        self.current.take()
    }

    /// Empty the slot only when the value matches
    pub fn take_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        match &self.current {
            Some(value) if predicate(value) => self.current.take(),
            _ => None,
        }
    }

    /// Empty the slot, dropping its value
    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl<T> Default for DialogSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Error dialog on screen
#[derive(Debug, Clone)]
pub struct ErrorDialog {
    /// Dialog id
    pub id: DialogId,
    /// What it says
    pub message: MessageId,
    /// When it was shown
    pub shown_at: DateTime<Utc>,
}

/// Consent dialog on screen
#[derive(Debug, Clone)]
pub struct ConsentDialog {
    /// Dialog id
    pub id: DialogId,
    /// Prompt text id
    pub prompt: MessageId,
    /// Latch and call for this prompt
    pub session: ConsentSession,
    /// When it was shown
    pub shown_at: DateTime<Utc>,
}

/// Prompt for a proposed call type
pub fn consent_prompt(proposed: Option<CallType>) -> MessageId {
    match proposed {
        Some(CallType::Vt) => MessageId::UpgradeVtPrompt,
        Some(CallType::VtTx) => MessageId::UpgradeVtTxPrompt,
        Some(CallType::VtRx) => MessageId::UpgradeVtRxPrompt,
        _ => MessageId::AcceptModifyCallRequestPrompt,
    }
}

/// Single-flight owner of the error and consent dialogs
pub struct ModalDialogController {
    host: Arc<dyn DialogHost>,
    presenter: Arc<dyn InCallPresenter>,
    catalog: MessageCatalog,
    emitter: EventEmitter,
    error: DialogSlot<ErrorDialog>,
    consent: DialogSlot<ConsentDialog>,
}

impl ModalDialogController {
    /// Create a controller with both slots empty
    pub fn new(
        host: Arc<dyn DialogHost>,
        presenter: Arc<dyn InCallPresenter>,
        catalog: MessageCatalog,
        emitter: EventEmitter,
    ) -> Self {
        Self {
            host,
            presenter,
            catalog,
            emitter,
            error: DialogSlot::new(),
            consent: DialogSlot::new(),
        }
    }

    /// Message catalog used for dialog and toast text
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Whether an error dialog is on screen
    pub fn has_pending_error(&self) -> bool {
        self.error.is_occupied()
    }

    /// Whether a consent dialog is on screen
    pub fn has_pending_consent(&self) -> bool {
        self.consent.is_occupied()
    }

    /// The error dialog on screen
    pub fn current_error(&self) -> Option<&ErrorDialog> {
        self.error.get()
    }

    /// The consent dialog on screen
    pub fn current_consent(&self) -> Option<&ConsentDialog> {
        self.consent.get()
    }

    /// Present an error dialog, tearing down whatever dialogs are open
    pub fn show_error(&mut self, message: MessageId) -> DialogId {
        tracing::info!(%message, text = self.catalog.text(message), "Show error dialog");

        self.dismiss_with(DismissReason::Replaced);

        let dialog = ErrorDialog {
            id: Uuid::new_v4(),
            message,
            shown_at: Utc::now(),
        };
        self.host.show_alert(&AlertSpec {
            id: dialog.id,
            kind: DialogKind::Error,
            message: self.catalog.text(message).to_string(),
            positive_label: self.catalog.text(MessageId::Ok).to_string(),
            negative_label: None,
            backdrop: Backdrop::Dim,
        });
        self.emitter.emit(ScreenNotification::DialogShown {
            id: dialog.id,
            kind: DialogKind::Error,
            message,
            shown_at: dialog.shown_at,
        });

        let id = dialog.id;
        self.error.replace(dialog);
        id
    }

    /// User pressed OK on the error dialog
    pub fn on_error_acknowledged(&mut self, id: DialogId) -> bool {
        self.close_error(id, DismissReason::Acknowledged)
    }

    /// User cancelled the error dialog
    pub fn on_error_cancelled(&mut self, id: DialogId) -> bool {
        self.close_error(id, DismissReason::Cancelled)
    }

    fn close_error(&mut self, id: DialogId, reason: DismissReason) -> bool {
        match self.error.take_if(|d| d.id == id) {
            Some(dialog) => {
                tracing::debug!(dialog_id = %dialog.id, ?reason, "Error dialog closed by user");
                self.emitter.emit(ScreenNotification::DialogDismissed {
                    id: dialog.id,
                    kind: DialogKind::Error,
                    reason,
                });
                self.presenter.on_dismiss_dialog();
                true
            }
            None => {
                tracing::debug!(dialog_id = %id, "Ignoring callback for stale error dialog");
                false
            }
        }
    }

    /// Ask the user whether to accept the call type change proposed for `call`
    ///
    /// Any consent dialog already open is torn down first. When the modify
    /// request has already failed no dialog is shown; a failure toast is the
    /// only effect.
    pub fn show_consent(&mut self, call: &Call) -> Option<DialogId> {
        tracing::debug!(call_id = %call.id, "VideoCall: show modify call consent dialog");

        if self.consent.is_occupied() {
            tracing::debug!("VideoCall: dismissing previous consent dialog");
            self.dismiss_consent(DismissReason::Replaced);
        }

        if call.modify_failed {
            tracing::debug!(call_id = %call.id, "VideoCall: modify call request failed");
            self.toast(MessageId::ModifyCallFailed);
            return None;
        }

        let prompt = consent_prompt(call.proposed_call_type);
        let dialog = ConsentDialog {
            id: Uuid::new_v4(),
            prompt,
            session: ConsentSession::new(call.clone()),
            shown_at: Utc::now(),
        };
        self.host.show_alert(&AlertSpec {
            id: dialog.id,
            kind: DialogKind::Consent,
            message: self.catalog.text(prompt).to_string(),
            positive_label: self.catalog.text(MessageId::ModifyCallPromptYes).to_string(),
            negative_label: Some(self.catalog.text(MessageId::ModifyCallPromptNo).to_string()),
            backdrop: Backdrop::Blur,
        });
        self.emitter.emit(ScreenNotification::DialogShown {
            id: dialog.id,
            kind: DialogKind::Consent,
            message: prompt,
            shown_at: dialog.shown_at,
        });

        let id = dialog.id;
        self.consent.replace(dialog);
        Some(id)
    }

    /// User pressed a consent dialog button
    ///
    /// The dialog stays in its slot until the host reports it dismissed.
    pub fn on_consent_button(&mut self, id: DialogId, button: ConsentButton) -> Option<ConsentDecision> {
        tracing::debug!(dialog_id = %id, ?button, "VideoCall: consent dialog button clicked");

        let dialog = match self.consent.get_mut() {
            Some(dialog) if dialog.id == id => dialog,
            _ => {
                tracing::debug!(dialog_id = %id, "Ignoring click on stale consent dialog");
                return None;
            }
        };
        let decision = dialog.session.on_click(button)?;
        let call = dialog.session.call().clone();
        self.forward_consent(&call, decision);
        Some(decision)
    }

    /// Consent dialog went away, with or without a button press
    pub fn on_consent_dismissed(&mut self, id: DialogId) -> Option<ConsentDecision> {
        let mut dialog = match self.consent.take_if(|d| d.id == id) {
            Some(dialog) => dialog,
            None => {
                tracing::debug!(dialog_id = %id, "Ignoring dismissal of stale consent dialog");
                return None;
            }
        };
        let reason = if dialog.session.clicked() {
            DismissReason::Acknowledged
        } else {
            DismissReason::Cancelled
        };
        self.emitter.emit(ScreenNotification::DialogDismissed {
            id: dialog.id,
            kind: DialogKind::Consent,
            reason,
        });
        self.resolve_on_dismiss(&mut dialog)
    }

    /// Tear down both dialogs; a no-op when neither is open
    pub fn dismiss_all(&mut self) {
        self.dismiss_with(DismissReason::Teardown);
    }

    fn dismiss_with(&mut self, reason: DismissReason) {
        if let Some(dialog) = self.error.take() {
            tracing::debug!(dialog_id = %dialog.id, ?reason, "Dismissing error dialog");
            self.host.dismiss_alert(dialog.id);
            self.emitter.emit(ScreenNotification::DialogDismissed {
                id: dialog.id,
                kind: DialogKind::Error,
                reason,
            });
        }
        self.dismiss_consent(reason);
    }

    fn dismiss_consent(&mut self, reason: DismissReason) {
        if let Some(mut dialog) = self.consent.take() {
            tracing::debug!(dialog_id = %dialog.id, ?reason, "Dismissing consent dialog");
            self.host.dismiss_alert(dialog.id);
            self.emitter.emit(ScreenNotification::DialogDismissed {
                id: dialog.id,
                kind: DialogKind::Consent,
                reason,
            });
            // The toolkit runs the dismiss handler for programmatic dismissals too
            self.resolve_on_dismiss(&mut dialog);
        }
    }

    fn resolve_on_dismiss(&self, dialog: &mut ConsentDialog) -> Option<ConsentDecision> {
        let decision = dialog.session.on_dismiss()?;
        tracing::debug!(call_id = %dialog.session.call().id, "VideoCall: consent dialog dismissed without choice");
        let call = dialog.session.call().clone();
        self.forward_consent(&call, decision);
        Some(decision)
    }

    fn forward_consent(&self, call: &Call, decision: ConsentDecision) {
        tracing::info!(call_id = %call.id, ?decision, "Forwarding modify call consent");
        self.presenter.modify_call_confirm(decision.confirmed(), call);
        self.emitter.emit(ScreenNotification::ConsentResolved {
            call_id: call.id,
            decision,
        });
    }

    /// Show a toast for a catalog message
    pub fn toast(&self, message: MessageId) {
        let text = self.catalog.text(message).to_string();
        self.toast_text(text);
    }

    /// Show a toast with literal text
    pub fn toast_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.host.show_toast(&text);
        self.emitter.emit(ScreenNotification::Toast { text });
    }

    /// Forward a post-dial wait prompt to the host
    pub fn show_post_char_wait(&self, call_id: CallId, chars: &str) {
        self.host.show_post_char_wait(call_id, chars);
    }
}

impl std::fmt::Debug for ModalDialogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalDialogController")
            .field("error", &self.error.get().map(|d| d.message))
            .field("consent", &self.consent.get().map(|d| d.prompt))
            .finish()
    }
}
