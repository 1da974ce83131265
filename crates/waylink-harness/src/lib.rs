//! Test harness for waylink.
//!
//! Recording implementations of the boundary traits ([`Navigator`],
//! [`UiEvents`], [`SessionInfo`]) so integration and property tests can
//! assert exactly which side effects a dispatch produced, plus a scripted
//! session-state provider.
//!
//! [`Navigator`]: waylink_core::Navigator
//! [`UiEvents`]: waylink_core::UiEvents
//! [`SessionInfo`]: waylink_core::SessionInfo

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod recording;
mod session;

pub use recording::{RecordingNavigator, RecordingUi, UiCall};
pub use session::ScriptedSession;
