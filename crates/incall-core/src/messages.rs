//! Message catalog for user-facing dialog and toast text
//!
//! Every message the screen can surface has a [`MessageId`]. The id is what
//! the classifiers produce; turning it into text is the job of a
//! [`MessageCatalog`], which carries English defaults and optional
//! per-deployment overrides (typically loaded from configuration).
//!
//! ```rust
//! use incall_core::messages::{MessageCatalog, MessageId};
//!
//! let catalog = MessageCatalog::new()
//!     .with_override(MessageId::FdnOnly, "Fixed dialling only");
//!
//! assert_eq!(catalog.text(MessageId::FdnOnly), "Fixed dialling only");
//! assert_eq!(catalog.text(MessageId::Ok), "OK");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageId {
    // Disconnect messages
    /// Incoming call went unanswered and was forwarded
    CallUnansweredForwarded,
    /// Called party bars incoming calls
    IncomingCallBarred,
    /// Outgoing call blocked by call barring
    CallBarred,
    /// Outgoing call blocked by fixed dialling numbers
    FdnOnly,
    /// All calls restricted by access class
    DsacRestricted,
    /// Emergency calls restricted by access class
    DsacRestrictedEmergency,
    /// Normal calls restricted by access class
    DsacRestrictedNormal,
    /// Dial request became a USSD request
    DialModifiedToUssd,
    /// Dial request became a supplementary service request
    DialModifiedToSs,
    /// Dial request became a dial to a different number
    DialModifiedToDial,

    // Supplementary service failures
    /// Switching calls failed
    SuppServiceSwitch,
    /// Separating a call from a conference failed
    SuppServiceSeparate,
    /// Call transfer failed
    SuppServiceTransfer,
    /// Conference failed
    SuppServiceConference,
    /// Rejecting a call failed
    SuppServiceReject,
    /// Releasing calls failed
    SuppServiceHangup,
    /// Unknown or unsupported service failed
    SuppServiceUnknown,

    // Modify call (video upgrade) consent
    /// Generic modify-call prompt
    AcceptModifyCallRequestPrompt,
    /// Upgrade to two-way video prompt
    UpgradeVtPrompt,
    /// Upgrade to transmit-only video prompt
    UpgradeVtTxPrompt,
    /// Upgrade to receive-only video prompt
    UpgradeVtRxPrompt,
    /// Accept button label
    ModifyCallPromptYes,
    /// Decline button label
    ModifyCallPromptNo,
    /// Modify-call request failed toast
    ModifyCallFailed,

    // Modify call options
    /// Title of the modify-call option list
    ModifyCallOptionTitle,
    /// Voice option
    ModifyCallOptionVoice,
    /// Receive-only video option
    ModifyCallOptionVtRx,
    /// Transmit-only video option
    ModifyCallOptionVtTx,
    /// Two-way video option
    ModifyCallOptionVt,

    /// Acknowledgement button label
    Ok,
}

impl MessageId {
    /// Every message id, in declaration order
    pub const ALL: [MessageId; 30] = [
        MessageId::CallUnansweredForwarded,
        MessageId::IncomingCallBarred,
        MessageId::CallBarred,
        MessageId::FdnOnly,
        MessageId::DsacRestricted,
        MessageId::DsacRestrictedEmergency,
        MessageId::DsacRestrictedNormal,
        MessageId::DialModifiedToUssd,
        MessageId::DialModifiedToSs,
        MessageId::DialModifiedToDial,
        MessageId::SuppServiceSwitch,
        MessageId::SuppServiceSeparate,
        MessageId::SuppServiceTransfer,
        MessageId::SuppServiceConference,
        MessageId::SuppServiceReject,
        MessageId::SuppServiceHangup,
        MessageId::SuppServiceUnknown,
        MessageId::AcceptModifyCallRequestPrompt,
        MessageId::UpgradeVtPrompt,
        MessageId::UpgradeVtTxPrompt,
        MessageId::UpgradeVtRxPrompt,
        MessageId::ModifyCallPromptYes,
        MessageId::ModifyCallPromptNo,
        MessageId::ModifyCallFailed,
        MessageId::ModifyCallOptionTitle,
        MessageId::ModifyCallOptionVoice,
        MessageId::ModifyCallOptionVtRx,
        MessageId::ModifyCallOptionVtTx,
        MessageId::ModifyCallOptionVt,
        MessageId::Ok,
    ];

    /// Built-in English text
    pub fn default_text(&self) -> &'static str {
        match self {
            MessageId::CallUnansweredForwarded => "Call unanswered and forwarded.",
            MessageId::IncomingCallBarred => "The called party has incoming calls barred.",
            MessageId::CallBarred => "Can't make outgoing calls while call barring is on.",
            MessageId::FdnOnly => "Outgoing calls are restricted by FDN.",
            MessageId::DsacRestricted => "All calls are restricted by access control.",
            MessageId::DsacRestrictedEmergency => "Emergency calls are restricted by access control.",
            MessageId::DsacRestrictedNormal => "Normal calls are restricted by access control.",
            MessageId::DialModifiedToUssd => "DIAL request modified to USSD request.",
            MessageId::DialModifiedToSs => "DIAL request modified to SS request.",
            MessageId::DialModifiedToDial => "DIAL request modified to DIAL with different number.",
            MessageId::SuppServiceSwitch => "Can't switch calls.",
            MessageId::SuppServiceSeparate => "Can't separate call.",
            MessageId::SuppServiceTransfer => "Can't transfer call.",
            MessageId::SuppServiceConference => "Can't conference calls.",
            MessageId::SuppServiceReject => "Can't reject call.",
            MessageId::SuppServiceHangup => "Can't release call(s).",
            MessageId::SuppServiceUnknown => "Service not supported.",
            MessageId::AcceptModifyCallRequestPrompt => "Accept the request to change the call type?",
            MessageId::UpgradeVtPrompt => "Upgrade to a video call?",
            MessageId::UpgradeVtTxPrompt => "Upgrade to a video call (send only)?",
            MessageId::UpgradeVtRxPrompt => "Upgrade to a video call (receive only)?",
            MessageId::ModifyCallPromptYes => "Yes",
            MessageId::ModifyCallPromptNo => "No",
            MessageId::ModifyCallFailed => "Modify call request failed.",
            MessageId::ModifyCallOptionTitle => "Change call type",
            MessageId::ModifyCallOptionVoice => "Voice call",
            MessageId::ModifyCallOptionVtRx => "Video call (receive only)",
            MessageId::ModifyCallOptionVtTx => "Video call (send only)",
            MessageId::ModifyCallOptionVt => "Video call",
            MessageId::Ok => "OK",
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Resolves message ids to display text
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    overrides: HashMap<MessageId, String>,
}

impl MessageCatalog {
    /// Catalog with only the built-in English text
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with a set of overrides
    pub fn from_overrides(overrides: HashMap<MessageId, String>) -> Self {
        Self { overrides }
    }

    /// Replace the text of one message
    pub fn with_override(mut self, id: MessageId, text: impl Into<String>) -> Self {
        self.overrides.insert(id, text.into());
        self
    }

    /// Text for a message, preferring an override
    pub fn text(&self, id: MessageId) -> &str {
        self.overrides
            .get(&id)
            .map(String::as_str)
            .unwrap_or_else(|| id.default_text())
    }

    /// Number of overridden messages
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}
