//! Dispatch outcomes.
//!
//! Handlers describe what should happen as a list of [`Effect`] values; the
//! coordinator interprets them against the store and the live navigator.

/// Navigation destinations reachable from a deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Waiting-for-invite screen (waiting-list users).
    WaitingInvite,
    /// Welcome / onboarding screen (unauthenticated users).
    Welcome,
}

/// Navigation parameters carrying the raw link into the target screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkProp {
    /// The raw deep link that caused the navigation.
    pub initial_link: Option<String>,
}

impl LinkProp {
    /// Wrap a raw link for hand-off to a screen.
    pub fn new(initial_link: impl Into<String>) -> Self {
        Self { initial_link: Some(initial_link.into()) }
    }
}

/// Outcome of running one handler against a link.
///
/// `Postponed` is a legitimate terminal state for a dispatch, distinct from
/// `Unhandled`: postponed means "this handler claims the link but cannot act
/// yet", unhandled means "try the next handler".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to a screen; the coordinator performs the call.
    Navigate {
        /// Target screen.
        destination: Screen,
        /// Parameters for the target screen.
        params: LinkProp,
    },
    /// Link fully processed, nothing further to do.
    Handled,
    /// This handler does not apply; the chain continues.
    Unhandled,
    /// The right action is known but a readiness precondition is missing;
    /// the whole dispatch is re-run once readiness flips.
    Postponed,
}

impl Effect {
    /// Build a navigation effect.
    pub fn navigate(destination: Screen, params: LinkProp) -> Self {
        Self::Navigate { destination, params }
    }
}
