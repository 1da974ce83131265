//! The per-app-session deep link facade.

use std::sync::Arc;

use waylink_core::{
    DispatchContext, LinkStore, Navigator, ParsedParams, SessionInfo, UiEvents,
    dispatch_deep_link,
};

/// Deep link handling surface shared across the whole navigation hierarchy.
///
/// Clones share the same underlying [`LinkStore`], so readiness registered
/// by the onboarding subtree is visible to dispatches triggered from the
/// authenticated one. Constructed explicitly and passed by reference; there
/// is no process-wide instance.
#[derive(Clone)]
pub struct LinkSession {
    store: Arc<LinkStore>,
    ui: Arc<dyn UiEvents>,
    session: Arc<dyn SessionInfo>,
}

impl LinkSession {
    /// Create a session with an empty store.
    pub fn new(ui: Arc<dyn UiEvents>, session: Arc<dyn SessionInfo>) -> Self {
        Self { store: Arc::new(LinkStore::new()), ui, session }
    }

    /// Record the live navigation controller.
    ///
    /// Called on every (re)mount of the navigation container; the store
    /// keeps only a weak reference.
    pub fn set_navigation_ref(&self, navigator: &Arc<dyn Navigator>) {
        self.store.set_navigation_ref(navigator);
    }

    /// Record a new link and dispatch it.
    ///
    /// `params` carries structured parameters a link source already parsed
    /// out-of-band (Branch delivers room/club params next to the URI).
    pub async fn handle_deep_link(&self, url: impl Into<String>, params: Option<ParsedParams>) {
        let url = url.into();
        tracing::debug!(%url, "handling deep link");
        self.store.set_url(url, params);
        self.dispatch().await;
    }

    /// Register the main (authenticated) navigation tree as mounted.
    ///
    /// Idempotent; only the first call replays a postponed link.
    pub async fn on_main_navigation_ready(&self) {
        if !self.store.set_main_navigation_ready() {
            tracing::debug!("main navigation ready (already registered)");
            return;
        }
        tracing::debug!("main navigation ready");
        self.replay_if_postponed().await;
    }

    /// Register the welcome (onboarding) navigation tree as mounted.
    ///
    /// Idempotent; only the first call replays a postponed link.
    pub async fn on_welcome_navigation_ready(&self) {
        if !self.store.set_welcome_navigation_ready() {
            tracing::debug!("welcome navigation ready (already registered)");
            return;
        }
        tracing::debug!("welcome navigation ready");
        self.replay_if_postponed().await;
    }

    /// Return the store to its initial state (session tear-down).
    pub fn reset(&self) {
        tracing::debug!("resetting link session");
        self.store.reset();
    }

    /// The last received link, if any.
    pub fn current_url(&self) -> Option<String> {
        self.store.url()
    }

    /// True when the last dispatch attempt was postponed.
    pub fn is_postponed(&self) -> bool {
        self.store.is_postponed()
    }

    async fn replay_if_postponed(&self) {
        if self.store.is_postponed() && self.store.url().is_some() {
            tracing::debug!("replaying postponed deep link");
            self.dispatch().await;
        }
    }

    async fn dispatch(&self) {
        let ctx = DispatchContext { ui: self.ui.as_ref(), session: self.session.as_ref() };
        dispatch_deep_link(&self.store, &ctx).await;
    }
}

impl std::fmt::Debug for LinkSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkSession").field("store", &self.store).finish_non_exhaustive()
    }
}
