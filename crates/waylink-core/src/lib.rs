//! Deep link dispatch core.
//!
//! Pure coordination logic for resolving incoming deep links (room, profile,
//! club, event, support) against a navigation hierarchy that may not be
//! mounted yet, completely decoupled from any UI framework or SDK.
//!
//! # Components
//!
//! - [`uri`]: stateless parameter extraction from raw link URIs
//! - [`Effect`]: declarative dispatch outcomes produced by handlers
//! - [`Handler`]: the priority-ordered chain of link handlers
//! - [`dispatch_deep_link`]: coordinator that runs the chain and applies
//!   effects to the [`LinkStore`]
//! - [`LinkStore`]: per-session link state (pending url, readiness latches,
//!   postponed flag, navigation handle)
//!
//! The core holds no navigation or UI objects of its own; callers supply
//! implementations of [`Navigator`], [`UiEvents`], and [`SessionInfo`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod dispatch;
mod driver;
mod effect;
mod error;
mod handlers;
mod state;
#[cfg(test)]
mod testutil;
mod types;
pub mod uri;

pub use dispatch::{dispatch, dispatch_deep_link};
pub use driver::{Navigator, SessionInfo, UiEvents};
pub use effect::{Effect, LinkProp, Screen};
pub use error::{DispatchError, UiError};
pub use handlers::{DispatchContext, HANDLER_CHAIN, Handler, SUPPORT_LINK_PREFIX};
pub use state::{HandlerParams, LinkStore};
pub use types::{ClubParams, ParsedParams, RoomParams, UserState, UtmLabels};
