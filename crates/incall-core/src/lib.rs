//! # In-Call Core - Framework-Independent In-Call Screen
//!
//! This crate holds the decision logic behind a telephony in-call screen,
//! without any UI toolkit:
//! - **classify**: which message (if any) explains a disconnected call or a
//!   failed supplementary service request
//! - **dialog**: single-flight error dialog and modify-call consent prompt
//! - **consent**: the "answered exactly once" latch behind the consent prompt
//! - **screen**: lifecycle, back and key handling, panels, finish deferral
//!
//! Panels, the presenter and the telephony layer are reached through the
//! traits in [`collaborators`], [`dialog::DialogHost`] and
//! [`screen::WindowHost`].
//!
//! ## Quick Start
//!
//! ```rust
//! use incall_core::{classify_disconnect, DisconnectCause, MessageCatalog, MessageId};
//!
//! let message = classify_disconnect(DisconnectCause::FdnBlocked, None);
//! assert_eq!(message, Some(MessageId::FdnOnly));
//!
//! let catalog = MessageCatalog::new();
//! println!("{}", catalog.text(MessageId::FdnOnly));
//!
//! // Ordinary hang-ups are not explained
//! assert_eq!(classify_disconnect(DisconnectCause::Busy, None), None);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ScreenHandle ──▶ ScreenEventLoop ──▶ InCallScreen ──▶ ModalDialogController ──▶ DialogHost
//!                                          │
//!                                          ├──▶ InCallPresenter / CallCommands
//!                                          └──▶ panels / WindowHost
//! ```
//!
//! The screen is built with [`InCallScreenBuilder`] and driven either
//! directly through its methods or through a [`ScreenEventLoop`]. Observers
//! follow what happens via [`ScreenNotification`]s.

#![warn(missing_docs)]

pub mod builder;
pub mod call;
pub mod classify;
pub mod collaborators;
pub mod config;
pub mod consent;
pub mod dialog;
pub mod error;
pub mod event_loop;
pub mod events;
pub mod input;
pub mod messages;
pub mod screen;

// Re-export main types
pub use builder::InCallScreenBuilder;
pub use call::{Call, CallId, CallState, CallType, DisconnectCause, SsNotification};
pub use classify::{classify_disconnect, classify_supp_service_failure, SuppService};
pub use config::{CoverWindow, IncomingCallStyle, ScreenConfig};
pub use consent::{ConsentButton, ConsentDecision, ConsentSession};
pub use dialog::{DialogHost, DialogId, DialogKind, ModalDialogController};
pub use error::{InCallError, InCallResult};
pub use event_loop::{ScreenEventLoop, ScreenHandle};
pub use events::{EventEmitter, EventStream, LifecyclePhase, ScreenEvent, ScreenIntent, ScreenNotification};
pub use input::{KeyCode, KeyEvent};
pub use messages::{MessageCatalog, MessageId};
pub use screen::{
    BackDisposition, CoverLayout, FinishDecision, InCallScreen, ModifyCallOptions, ScreenLifecycle,
    SystemBarStyle, WindowHost,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
