//! Call model consumed by the in-call screen
//!
//! These types mirror what the telephony layer hands to the UI. The screen
//! only reads them: state transitions, disconnect causes and supplementary
//! service notifications are all produced elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a call by the telephony layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallId(pub u32);

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Call state as reported by the call registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallState {
    /// Not yet set up
    Idle,
    /// Ringing, waiting for the user to answer
    Incoming,
    /// Second incoming call while another is active
    CallWaiting,
    /// Outgoing call being placed
    Dialing,
    /// Outgoing call ringing at the remote end
    Redialing,
    /// Connected
    Active,
    /// Put on hold locally
    OnHold,
    /// Ended
    Disconnected,
    /// Ending
    Disconnecting,
    /// Part of a conference
    Conferenced,
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CallState::Idle => "Idle",
            CallState::Incoming => "Incoming",
            CallState::CallWaiting => "CallWaiting",
            CallState::Dialing => "Dialing",
            CallState::Redialing => "Redialing",
            CallState::Active => "Active",
            CallState::OnHold => "OnHold",
            CallState::Disconnected => "Disconnected",
            CallState::Disconnecting => "Disconnecting",
            CallState::Conferenced => "Conferenced",
        };
        f.write_str(s)
    }
}

/// Media type of a call, used when upgrading or downgrading to video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallType {
    /// Audio only
    Voice,
    /// Video transmitted by the local party only
    VtTx,
    /// Video received from the remote party only
    VtRx,
    /// Two-way video
    Vt,
    /// Video with no direction negotiated yet
    VtNoDir,
    /// Media type not known
    Unknown,
}

impl CallType {
    /// Whether any video stream is involved
    pub fn is_video(&self) -> bool {
        matches!(self, CallType::VtTx | CallType::VtRx | CallType::Vt | CallType::VtNoDir)
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CallType::Voice => "VOICE",
            CallType::VtTx => "VT_TX",
            CallType::VtRx => "VT_RX",
            CallType::Vt => "VT",
            CallType::VtNoDir => "VT_NODIR",
            CallType::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Why a call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisconnectCause {
    /// Call has not ended
    NotDisconnected,
    /// Incoming call was never answered
    IncomingMissed,
    /// Remote party hung up
    Normal,
    /// Local party hung up
    Local,
    /// Remote party was busy
    Busy,
    /// Network congestion
    Congestion,
    /// MMI code dialled
    Mmi,
    /// Number could not be dialled
    InvalidNumber,
    /// Number not reachable
    NumberUnreachable,
    /// Server could not be reached
    ServerUnreachable,
    /// Radio is out of service
    OutOfService,
    /// Number unobtainable
    Unobtainable,
    /// Call limit exceeded
    Limit,
    /// Connection to the network was lost
    Lost,
    /// Barred by the call barring service
    CallBarred,
    /// Blocked by fixed dialling numbers
    FdnBlocked,
    /// All calls restricted by access class
    CsRestricted,
    /// Emergency calls restricted by access class
    CsRestrictedEmergency,
    /// Normal calls restricted by access class
    CsRestrictedNormal,
    /// Dial string was turned into a USSD request
    DialModifiedToUssd,
    /// Dial string was turned into a supplementary service request
    DialModifiedToSs,
    /// Dial string was turned into a different dial request
    DialModifiedToDial,
    /// Anything the network did not explain
    ErrorUnspecified,
}

/// Supplementary service notification qualifying a disconnect cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsNotification {
    /// 0 for mobile-originated, 1 for mobile-terminated notifications
    pub notification_type: u8,
    /// Notification code, interpreted according to `notification_type`
    pub code: u32,
}

impl SsNotification {
    /// Mobile-originated notification type
    pub const NOTIFICATION_TYPE_MO: u8 = 0;
    /// Mobile-terminated notification type
    pub const NOTIFICATION_TYPE_MT: u8 = 1;

    /// MO: the called party has incoming calls barred
    pub const MO_CODE_INCOMING_CALLS_BARRED: u32 = 6;
    /// MT: this call was forwarded onwards after going unanswered
    pub const MT_CODE_ADDITIONAL_CALL_FORWARDED: u32 = 10;

    /// Create a notification
    pub fn new(notification_type: u8, code: u32) -> Self {
        Self {
            notification_type,
            code,
        }
    }

    /// Create a mobile-originated notification
    pub fn mobile_originated(code: u32) -> Self {
        Self::new(Self::NOTIFICATION_TYPE_MO, code)
    }

    /// Create a mobile-terminated notification
    pub fn mobile_terminated(code: u32) -> Self {
        Self::new(Self::NOTIFICATION_TYPE_MT, code)
    }
}

/// Snapshot of a call as the screen sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// Call identifier
    pub id: CallId,
    /// Current state
    pub state: CallState,
    /// Why the call ended, `NotDisconnected` while it is still up
    pub disconnect_cause: DisconnectCause,
    /// Network notification qualifying the disconnect cause
    pub ss_notification: Option<SsNotification>,
    /// Current media type
    pub call_type: CallType,
    /// Media type the remote party asked to switch to
    pub proposed_call_type: Option<CallType>,
    /// Whether the last modify-call request failed
    pub modify_failed: bool,
}

impl Call {
    /// Create a voice call in the given state
    pub fn new(id: CallId, state: CallState) -> Self {
        Self {
            id,
            state,
            disconnect_cause: DisconnectCause::NotDisconnected,
            ss_notification: None,
            call_type: CallType::Voice,
            proposed_call_type: None,
            modify_failed: false,
        }
    }

    /// Mark the call disconnected with the given cause
    pub fn with_disconnect_cause(mut self, cause: DisconnectCause) -> Self {
        self.state = CallState::Disconnected;
        self.disconnect_cause = cause;
        self
    }

    /// Attach a supplementary service notification
    pub fn with_ss_notification(mut self, notification: SsNotification) -> Self {
        self.ss_notification = Some(notification);
        self
    }

    /// Set the current media type
    pub fn with_call_type(mut self, call_type: CallType) -> Self {
        self.call_type = call_type;
        self
    }

    /// Set the media type proposed by the remote party
    pub fn with_proposed_call_type(mut self, call_type: CallType) -> Self {
        self.proposed_call_type = Some(call_type);
        self
    }

    /// Flag the last modify-call request as failed
    pub fn with_modify_failed(mut self, failed: bool) -> Self {
        self.modify_failed = failed;
        self
    }

    /// Whether the call is currently on hold
    pub fn is_on_hold(&self) -> bool {
        self.state == CallState::OnHold
    }
}
