//! The dispatch coordinator.
//!
//! [`dispatch`] runs the handler chain over one immutable snapshot and
//! returns the winning handler's effect list. [`dispatch_deep_link`] is the
//! outer entry point used by link sources and readiness callbacks: it
//! snapshots the store, runs the chain, and interprets the effects back
//! against the store and the live navigator.
//!
//! Unrecognized links are silently dropped at debug level; an internal
//! scheme link that matches no handler is not an error. A handler failure
//! aborts the attempt before any effect is applied, so the postponed flag
//! is never desynchronized from what actually happened.

use crate::{
    effect::Effect,
    error::DispatchError,
    handlers::{DispatchContext, HANDLER_CHAIN},
    state::{HandlerParams, LinkStore},
};

/// Run the handler chain over one snapshot.
///
/// Returns the first non-`Unhandled` effect list, or `None` when every
/// handler declined (or returned nothing).
pub async fn dispatch(
    params: &HandlerParams,
    ctx: &DispatchContext<'_>,
) -> Result<Option<Vec<Effect>>, DispatchError> {
    for handler in HANDLER_CHAIN {
        let effects = handler.run(params, ctx).await?;
        if effects.is_empty() || effects.contains(&Effect::Unhandled) {
            continue;
        }
        return Ok(Some(effects));
    }
    Ok(None)
}

/// Dispatch the store's pending link, if any, and apply the outcome.
///
/// Without a live navigator the link is postponed outright; dispatch is
/// retried when readiness flips or the next link arrives. Effects are
/// applied in list order, so a handler that returns both a navigation and
/// a postponement (the waiting-list club case) navigates first and leaves
/// the postponed flag set.
pub async fn dispatch_deep_link(store: &LinkStore, ctx: &DispatchContext<'_>) {
    let Some(navigator) = store.navigator() else {
        tracing::debug!(url = ?store.url(), "postponed: navigation not mounted");
        store.set_postponed(true);
        return;
    };
    let Some(params) = store.snapshot() else {
        tracing::debug!("dispatch: no url stored");
        return;
    };
    let effects = match dispatch(&params, ctx).await {
        Ok(Some(effects)) => effects,
        Ok(None) => {
            tracing::debug!(url = %params.url, "deep link not handled");
            return;
        }
        Err(error) => {
            // Abort without touching the postponed flag
            tracing::error!(url = %params.url, %error, "dispatch aborted");
            return;
        }
    };
    for effect in effects {
        match effect {
            Effect::Postponed => store.set_postponed(true),
            Effect::Navigate { destination, params: link } => {
                tracing::debug!(?destination, "navigating for deep link");
                ctx.ui.hide_upcoming_event_dialog();
                store.set_postponed(false);
                navigator.navigate(destination, link);
            }
            Effect::Handled | Effect::Unhandled => store.set_postponed(false),
        }
    }
}
