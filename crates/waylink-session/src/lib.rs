//! Integration surface for deep link dispatch.
//!
//! [`LinkSession`] is the only entry point link sources and screen-mount
//! lifecycle code use; nothing outside this crate mutates the underlying
//! store directly. Adapters translate the two attribution SDK callback
//! shapes (Branch, AppsFlyer) into plain `handle_deep_link` calls; OS URL
//! scheme events call [`LinkSession::handle_deep_link`] directly.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod appsflyer;
mod branch;
mod session;

pub use appsflyer::{AppsflyerPayload, ONELINK_HOST, handle_appsflyer_link};
pub use branch::{BranchPayload, handle_branch_event};
pub use session::LinkSession;
