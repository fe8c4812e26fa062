//! Classification of call failures into user-facing messages
//!
//! Two pure lookups live here:
//!
//! - [`classify_disconnect`] maps a disconnect cause, optionally qualified by
//!   a supplementary service notification, to the message shown when the
//!   call ends. Most causes produce no message at all.
//! - [`classify_supp_service_failure`] maps the raw code of a failed
//!   supplementary service (switch, conference, transfer, ...) to its
//!   message. Every valid code produces exactly one message.
//!
//! ```rust
//! use incall_core::call::{DisconnectCause, SsNotification};
//! use incall_core::classify::{classify_disconnect, classify_supp_service_failure};
//! use incall_core::messages::MessageId;
//!
//! assert_eq!(classify_disconnect(DisconnectCause::CallBarred, None), Some(MessageId::CallBarred));
//! assert_eq!(classify_disconnect(DisconnectCause::IncomingMissed, None), None);
//! assert_eq!(classify_supp_service_failure(4).unwrap(), MessageId::SuppServiceConference);
//! assert!(classify_supp_service_failure(42).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::call::{DisconnectCause, SsNotification};
use crate::error::{InCallError, InCallResult};
use crate::messages::MessageId;

/// Message to show for a disconnected call, if any
pub fn classify_disconnect(
    cause: DisconnectCause,
    notification: Option<&SsNotification>,
) -> Option<MessageId> {
    match cause {
        // Shown on B when B's unanswered incoming call is forwarded to C
        DisconnectCause::IncomingMissed => match notification {
            Some(n)
                if n.notification_type == SsNotification::NOTIFICATION_TYPE_MT
                    && n.code == SsNotification::MT_CODE_ADDITIONAL_CALL_FORWARDED =>
            {
                Some(MessageId::CallUnansweredForwarded)
            }
            _ => None,
        },
        // Barring may be on either side; the MO notification tells us B bars incoming calls
        DisconnectCause::CallBarred => match notification {
            Some(n)
                if n.notification_type == SsNotification::NOTIFICATION_TYPE_MO
                    && n.code == SsNotification::MO_CODE_INCOMING_CALLS_BARRED =>
            {
                Some(MessageId::IncomingCallBarred)
            }
            _ => Some(MessageId::CallBarred),
        },
        DisconnectCause::FdnBlocked => Some(MessageId::FdnOnly),
        DisconnectCause::CsRestricted => Some(MessageId::DsacRestricted),
        DisconnectCause::CsRestrictedEmergency => Some(MessageId::DsacRestrictedEmergency),
        DisconnectCause::CsRestrictedNormal => Some(MessageId::DsacRestrictedNormal),
        DisconnectCause::DialModifiedToUssd => Some(MessageId::DialModifiedToUssd),
        DisconnectCause::DialModifiedToSs => Some(MessageId::DialModifiedToSs),
        DisconnectCause::DialModifiedToDial => Some(MessageId::DialModifiedToDial),
        DisconnectCause::NotDisconnected
        | DisconnectCause::Normal
        | DisconnectCause::Local
        | DisconnectCause::Busy
        | DisconnectCause::Congestion
        | DisconnectCause::Mmi
        | DisconnectCause::InvalidNumber
        | DisconnectCause::NumberUnreachable
        | DisconnectCause::ServerUnreachable
        | DisconnectCause::OutOfService
        | DisconnectCause::Unobtainable
        | DisconnectCause::Limit
        | DisconnectCause::Lost
        | DisconnectCause::ErrorUnspecified => None,
    }
}

/// Supplementary service whose request failed, indexed as the telephony layer reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuppService {
    /// Service not recognised
    Unknown = 0,
    /// Swap foreground and background calls
    Switch = 1,
    /// Split a call out of a conference
    Separate = 2,
    /// Connect the two calls and drop out
    Transfer = 3,
    /// Merge calls into a conference
    Conference = 4,
    /// Reject an incoming call
    Reject = 5,
    /// Release calls
    Hangup = 6,
}

impl SuppService {
    /// All services in index order
    pub const ALL: [SuppService; 7] = [
        SuppService::Unknown,
        SuppService::Switch,
        SuppService::Separate,
        SuppService::Transfer,
        SuppService::Conference,
        SuppService::Reject,
        SuppService::Hangup,
    ];

    /// Message reported when this service fails
    pub fn failure_message(&self) -> MessageId {
        match self {
            SuppService::Switch => MessageId::SuppServiceSwitch,
            SuppService::Separate => MessageId::SuppServiceSeparate,
            SuppService::Transfer => MessageId::SuppServiceTransfer,
            SuppService::Conference => MessageId::SuppServiceConference,
            SuppService::Reject => MessageId::SuppServiceReject,
            SuppService::Hangup => MessageId::SuppServiceHangup,
            SuppService::Unknown => MessageId::SuppServiceUnknown,
        }
    }
}

impl TryFrom<u32> for SuppService {
    type Error = InCallError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(InCallError::InvalidSuppService { code })
    }
}

/// Message for a failed supplementary service request
///
/// Codes outside `0..=6` break the telephony layer's contract and are
/// reported as [`InCallError::InvalidSuppService`] rather than folded into
/// the generic "unsupported service" message.
pub fn classify_supp_service_failure(code: u32) -> InCallResult<MessageId> {
    let service = SuppService::try_from(code).map_err(|e| {
        tracing::error!(code, "Supplementary service code out of range");
        e
    })?;
    Ok(service.failure_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn forwarded() -> SsNotification {
        SsNotification::mobile_terminated(SsNotification::MT_CODE_ADDITIONAL_CALL_FORWARDED)
    }

    fn incoming_barred() -> SsNotification {
        SsNotification::mobile_originated(SsNotification::MO_CODE_INCOMING_CALLS_BARRED)
    }

    #[test]
    fn test_incoming_missed_needs_forward_notification() {
        assert_eq!(
            classify_disconnect(DisconnectCause::IncomingMissed, Some(&forwarded())),
            Some(MessageId::CallUnansweredForwarded)
        );
        assert_eq!(classify_disconnect(DisconnectCause::IncomingMissed, None), None);

        // Right code, wrong direction
        let mo = SsNotification::mobile_originated(SsNotification::MT_CODE_ADDITIONAL_CALL_FORWARDED);
        assert_eq!(classify_disconnect(DisconnectCause::IncomingMissed, Some(&mo)), None);

        // Right direction, wrong code
        let mt = SsNotification::mobile_terminated(3);
        assert_eq!(classify_disconnect(DisconnectCause::IncomingMissed, Some(&mt)), None);
    }

    #[test]
    fn test_call_barred_always_has_message() {
        assert_eq!(
            classify_disconnect(DisconnectCause::CallBarred, Some(&incoming_barred())),
            Some(MessageId::IncomingCallBarred)
        );
        assert_eq!(
            classify_disconnect(DisconnectCause::CallBarred, None),
            Some(MessageId::CallBarred)
        );
        assert_eq!(
            classify_disconnect(DisconnectCause::CallBarred, Some(&forwarded())),
            Some(MessageId::CallBarred)
        );
        let mt = SsNotification::mobile_terminated(SsNotification::MO_CODE_INCOMING_CALLS_BARRED);
        assert_eq!(
            classify_disconnect(DisconnectCause::CallBarred, Some(&mt)),
            Some(MessageId::CallBarred)
        );
    }

    #[test]
    fn test_fixed_disconnect_messages() {
        let cases = [
            (DisconnectCause::FdnBlocked, MessageId::FdnOnly),
            (DisconnectCause::CsRestricted, MessageId::DsacRestricted),
            (DisconnectCause::CsRestrictedEmergency, MessageId::DsacRestrictedEmergency),
            (DisconnectCause::CsRestrictedNormal, MessageId::DsacRestrictedNormal),
            (DisconnectCause::DialModifiedToUssd, MessageId::DialModifiedToUssd),
            (DisconnectCause::DialModifiedToSs, MessageId::DialModifiedToSs),
            (DisconnectCause::DialModifiedToDial, MessageId::DialModifiedToDial),
        ];
        for (cause, expected) in cases {
            assert_eq!(classify_disconnect(cause, None), Some(expected), "{:?}", cause);
            // Notifications only qualify missed and barred calls
            assert_eq!(classify_disconnect(cause, Some(&forwarded())), Some(expected));
        }
    }

    #[test]
    fn test_ordinary_causes_have_no_message() {
        for cause in [
            DisconnectCause::Normal,
            DisconnectCause::Local,
            DisconnectCause::Busy,
            DisconnectCause::Lost,
            DisconnectCause::ErrorUnspecified,
            DisconnectCause::NotDisconnected,
        ] {
            assert_eq!(classify_disconnect(cause, None), None);
            assert_eq!(classify_disconnect(cause, Some(&incoming_barred())), None);
        }
    }

    #[test]
    fn test_supp_service_messages() {
        let expected = [
            MessageId::SuppServiceUnknown,
            MessageId::SuppServiceSwitch,
            MessageId::SuppServiceSeparate,
            MessageId::SuppServiceTransfer,
            MessageId::SuppServiceConference,
            MessageId::SuppServiceReject,
            MessageId::SuppServiceHangup,
        ];
        for (code, message) in expected.iter().enumerate() {
            assert_eq!(classify_supp_service_failure(code as u32).unwrap(), *message);
        }
    }

    #[test]
    fn test_supp_service_out_of_range_is_error() {
        let err = classify_supp_service_failure(7).unwrap_err();
        assert!(matches!(err, InCallError::InvalidSuppService { code: 7 }));
        assert!(classify_supp_service_failure(u32::MAX).is_err());
    }

    #[test]
    fn test_supp_service_index_round_trip() {
        for service in SuppService::ALL {
            assert_eq!(SuppService::try_from(service as u32).unwrap(), service);
        }
    }

    proptest! {
        #[test]
        fn prop_supp_service_total_on_valid_codes(code in 0u32..7) {
            prop_assert!(classify_supp_service_failure(code).is_ok());
        }

        #[test]
        fn prop_supp_service_rejects_invalid_codes(code in 7u32..=u32::MAX) {
            let rejected = matches!(
                classify_supp_service_failure(code),
                Err(InCallError::InvalidSuppService { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn prop_incoming_missed_only_forwarded(kind in 0u8..3, code in 0u32..16) {
            let notification = SsNotification::new(kind, code);
            let message = classify_disconnect(DisconnectCause::IncomingMissed, Some(&notification));
            let qualifies = kind == 1 && code == SsNotification::MT_CODE_ADDITIONAL_CALL_FORWARDED;
            prop_assert_eq!(message.is_some(), qualifies);
        }

        #[test]
        fn prop_call_barred_never_silent(kind in 0u8..3, code in 0u32..16) {
            let notification = SsNotification::new(kind, code);
            prop_assert!(classify_disconnect(DisconnectCause::CallBarred, Some(&notification)).is_some());
        }
    }
}
