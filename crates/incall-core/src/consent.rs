//! Consent flow for remote modify-call (video upgrade) requests
//!
//! A consent session starts when the prompt is shown and ends with exactly
//! one boolean confirmation handed to the presenter. The user can accept,
//! decline, or make the dialog go away without pressing either button; the
//! last case counts as a decline. The dismiss handler always runs after a
//! button press too, so the session latches on the first resolution and
//! ignores everything after it.

use serde::{Deserialize, Serialize};

use crate::call::Call;

/// How a consent prompt was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsentDecision {
    /// User pressed the accept button
    Accepted,
    /// User pressed the decline button
    Declined,
    /// Dialog went away without a button press
    DismissedWithoutChoice,
}

impl ConsentDecision {
    /// Boolean forwarded to the presenter
    pub fn confirmed(&self) -> bool {
        matches!(self, ConsentDecision::Accepted)
    }

    /// Whether the user pressed a button
    pub fn is_explicit(&self) -> bool {
        !matches!(self, ConsentDecision::DismissedWithoutChoice)
    }
}

/// Button of the consent dialog as reported by the host toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsentButton {
    /// Accept
    Positive,
    /// Decline
    Negative,
    /// Any other button id the toolkit might report
    Other(i32),
}

/// One consent prompt and its latch
#[derive(Debug, Clone)]
pub struct ConsentSession {
    call: Call,
    clicked: bool,
    resolved: bool,
}

impl ConsentSession {
    /// Start a session for the call whose type change is being proposed
    pub fn new(call: Call) -> Self {
        Self {
            call,
            clicked: false,
            resolved: false,
        }
    }

    /// Call the prompt is about
    pub fn call(&self) -> &Call {
        &self.call
    }

    /// Whether a button has been pressed
    pub fn clicked(&self) -> bool {
        self.clicked
    }

    /// Whether the confirmation has already been forwarded
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Record a button press
    ///
    /// Returns the decision to forward, or `None` when the button is not one
    /// we know or the session already resolved. Unknown buttons still set the
    /// latch, so a later dismissal does not produce a decline either.
    pub fn on_click(&mut self, button: ConsentButton) -> Option<ConsentDecision> {
        self.clicked = true;
        let decision = match button {
            ConsentButton::Positive => ConsentDecision::Accepted,
            ConsentButton::Negative => ConsentDecision::Declined,
            ConsentButton::Other(id) => {
                tracing::error!(button_id = id, call_id = %self.call.id, "No handler for consent dialog button");
                return None;
            }
        };
        self.resolve(decision)
    }

    /// Record that the dialog went away
    ///
    /// Only yields [`ConsentDecision::DismissedWithoutChoice`] when no button
    /// was pressed first.
    pub fn on_dismiss(&mut self) -> Option<ConsentDecision> {
        if self.clicked {
            return None;
        }
        self.resolve(ConsentDecision::DismissedWithoutChoice)
    }

    fn resolve(&mut self, decision: ConsentDecision) -> Option<ConsentDecision> {
        if self.resolved {
            return None;
        }
        self.resolved = true;
        Some(decision)
    }
}
