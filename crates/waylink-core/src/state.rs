//! Per-session link state.
//!
//! [`LinkStore`] holds the last received link, the postponed flag, and the
//! readiness latches for the two navigation trees. One store exists per app
//! session and is shared by reference across both the authenticated and the
//! onboarding navigation subtrees, so readiness set by one subtree is
//! visible to dispatch triggered from the other.
//!
//! All mutation entry points are serialized through an internal mutex; the
//! coordinator snapshots the state before running handlers so no lock is
//! held across awaits. Overlapping dispatches are deliberately not
//! serialized against each other: a second link arriving mid-dispatch wins.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::{driver::Navigator, types::ParsedParams};

/// Immutable snapshot handed to the handler chain for one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerParams {
    /// The raw link being dispatched.
    pub url: String,
    /// Structured parameters attached out-of-band by the link source.
    pub params: Option<ParsedParams>,
    /// Main (authenticated) navigation tree is mounted.
    pub main_navigation_ready: bool,
    /// Welcome (onboarding) navigation tree is mounted.
    pub welcome_navigation_ready: bool,
}

#[derive(Debug, Default)]
struct LinkState {
    url: Option<String>,
    params: Option<ParsedParams>,
    postponed: bool,
    main_navigation_ready: bool,
    welcome_navigation_ready: bool,
}

/// Shared, mutex-serialized link state plus a non-owning navigator handle.
///
/// Readiness flags are one-way latches: the setters report whether the
/// latch transitioned so the caller can replay a postponed dispatch exactly
/// once per transition. Setting a new url never clears the postponed flag;
/// only a dispatch outcome does.
#[derive(Default)]
pub struct LinkStore {
    state: Mutex<LinkState>,
    navigator: Mutex<Option<Weak<dyn Navigator>>>,
}

impl LinkStore {
    /// Create an empty store: no url, not postponed, nothing ready.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, LinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the last received link, overwriting any previous one.
    ///
    /// Does not trigger dispatch by itself; callers dispatch explicitly.
    pub fn set_url(&self, url: impl Into<String>, params: Option<ParsedParams>) {
        let mut state = self.lock();
        state.url = Some(url.into());
        state.params = params;
    }

    /// Last received link, if any.
    pub fn url(&self) -> Option<String> {
        self.lock().url.clone()
    }

    /// Set or clear the postponed flag.
    pub fn set_postponed(&self, postponed: bool) {
        self.lock().postponed = postponed;
    }

    /// True when the last dispatch attempt could not complete.
    pub fn is_postponed(&self) -> bool {
        self.lock().postponed
    }

    /// Latch the main navigation tree as mounted.
    ///
    /// Returns `true` only on the false-to-true transition; repeated mount
    /// callbacks are no-ops.
    pub fn set_main_navigation_ready(&self) -> bool {
        let mut state = self.lock();
        let transitioned = !state.main_navigation_ready;
        state.main_navigation_ready = true;
        transitioned
    }

    /// Latch the welcome navigation tree as mounted.
    ///
    /// Returns `true` only on the false-to-true transition.
    pub fn set_welcome_navigation_ready(&self) -> bool {
        let mut state = self.lock();
        let transitioned = !state.welcome_navigation_ready;
        state.welcome_navigation_ready = true;
        transitioned
    }

    /// True when the main navigation tree has mounted.
    pub fn is_main_navigation_ready(&self) -> bool {
        self.lock().main_navigation_ready
    }

    /// True when the welcome navigation tree has mounted.
    pub fn is_welcome_navigation_ready(&self) -> bool {
        self.lock().welcome_navigation_ready
    }

    /// Store a non-owning reference to the live navigation controller.
    ///
    /// May be called again on remount; the latest reference wins.
    pub fn set_navigation_ref(&self, navigator: &Arc<dyn Navigator>) {
        let mut slot = self.navigator.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::downgrade(navigator));
    }

    /// The live navigation controller, `None` when never set or dropped.
    pub fn navigator(&self) -> Option<Arc<dyn Navigator>> {
        let slot = self.navigator.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref().and_then(Weak::upgrade)
    }

    /// Snapshot the state for one dispatch run, `None` when no url stored.
    pub fn snapshot(&self) -> Option<HandlerParams> {
        let state = self.lock();
        let url = state.url.clone()?;
        Some(HandlerParams {
            url,
            params: state.params.clone(),
            main_navigation_ready: state.main_navigation_ready,
            welcome_navigation_ready: state.welcome_navigation_ready,
        })
    }

    /// Return every state field to its initial value: no url, not
    /// postponed, both readiness flags false.
    ///
    /// The navigator reference is left as-is; the store only observes the
    /// controller's lifetime and a remount overwrites the reference anyway.
    pub fn reset(&self) {
        *self.lock() = LinkState::default();
    }
}

impl std::fmt::Debug for LinkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("LinkStore")
            .field("url", &state.url)
            .field("postponed", &state.postponed)
            .field("main_navigation_ready", &state.main_navigation_ready)
            .field("welcome_navigation_ready", &state.welcome_navigation_ready)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{LinkProp, Screen};

    struct NullNavigator;

    impl Navigator for NullNavigator {
        fn navigate(&self, _destination: Screen, _params: LinkProp) {}
    }

    #[test]
    fn readiness_latches_report_transition_once() {
        let store = LinkStore::new();
        assert!(store.set_main_navigation_ready());
        assert!(!store.set_main_navigation_ready());
        assert!(store.is_main_navigation_ready());

        assert!(store.set_welcome_navigation_ready());
        assert!(!store.set_welcome_navigation_ready());
    }

    #[test]
    fn set_url_does_not_clear_postponed() {
        let store = LinkStore::new();
        store.set_postponed(true);
        store.set_url("cnnctvp://support", None);
        assert!(store.is_postponed());
    }

    #[test]
    fn snapshot_requires_url() {
        let store = LinkStore::new();
        assert!(store.snapshot().is_none());

        store.set_url("https://x.example?u=alice", None);
        let snapshot = store.snapshot();
        assert!(snapshot.is_some_and(|s| s.url == "https://x.example?u=alice"));
    }

    #[test]
    fn navigator_reference_is_non_owning() {
        let store = LinkStore::new();
        assert!(store.navigator().is_none());

        let navigator: Arc<dyn Navigator> = Arc::new(NullNavigator);
        store.set_navigation_ref(&navigator);
        assert!(store.navigator().is_some());

        drop(navigator);
        assert!(store.navigator().is_none());
    }

    #[test]
    fn reset_restores_initial_state() {
        let store = LinkStore::new();
        let navigator: Arc<dyn Navigator> = Arc::new(NullNavigator);
        store.set_navigation_ref(&navigator);
        store.set_url("https://x.example?clubId=C", None);
        store.set_postponed(true);
        let _ = store.set_main_navigation_ready();

        store.reset();
        assert!(store.url().is_none());
        assert!(!store.is_postponed());
        assert!(!store.is_main_navigation_ready());
        assert!(!store.is_welcome_navigation_ready());
        // The navigator is observed, not owned; reset leaves it alone
        assert!(store.navigator().is_some());
    }
}
