//! The deep link handler chain.
//!
//! One handler per link category, run strictly in [`HANDLER_CHAIN`] order;
//! the first handler that does not report [`Effect::Unhandled`] wins and no
//! further handlers run. Ordering encodes precedence: a room link always
//! beats a profile link embedded in the same URL.
//!
//! Handlers never mutate session state. They read an immutable
//! [`HandlerParams`] snapshot plus the ambient session view, trigger UI
//! side-channel events through [`DispatchContext`], and return effects for
//! the coordinator to apply.

use crate::{
    driver::{SessionInfo, UiEvents},
    effect::{Effect, LinkProp, Screen},
    error::DispatchError,
    state::HandlerParams,
    types::{ClubParams, UserState},
    uri,
};

/// Scheme prefix of in-app support links.
pub const SUPPORT_LINK_PREFIX: &str = "cnnctvp://support";

/// Collaborators available to handlers during one dispatch.
#[derive(Clone, Copy)]
pub struct DispatchContext<'a> {
    /// UI side-channel triggers.
    pub ui: &'a dyn UiEvents,
    /// Read-only session view.
    pub session: &'a dyn SessionInfo,
}

/// A link category handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Room join links.
    Room,
    /// User profile links.
    Profile,
    /// Club links.
    Club,
    /// Event links.
    Event,
    /// In-app support links.
    Support,
}

/// The fixed priority order handlers run in.
pub const HANDLER_CHAIN: [Handler; 5] =
    [Handler::Room, Handler::Profile, Handler::Club, Handler::Event, Handler::Support];

impl Handler {
    /// Run this handler against one dispatch snapshot.
    pub async fn run(
        self,
        params: &HandlerParams,
        ctx: &DispatchContext<'_>,
    ) -> Result<Vec<Effect>, DispatchError> {
        match self {
            Self::Room => handle_room_link(params, ctx).await,
            Self::Profile => handle_profile_link(params, ctx).await,
            Self::Club => handle_club_link(params, ctx).await,
            Self::Event => handle_event_link(params, ctx).await,
            Self::Support => handle_support_link(params, ctx),
        }
    }
}

async fn handle_room_link(
    p: &HandlerParams,
    ctx: &DispatchContext<'_>,
) -> Result<Vec<Effect>, DispatchError> {
    let Some(room_params) = uri::room_params(&p.url).filter(|r| r.room.is_some()) else {
        return Ok(vec![Effect::Unhandled]);
    };
    if !p.main_navigation_ready {
        return Ok(vec![Effect::Postponed]);
    }
    tracing::debug!(room = ?room_params.room, "handling room link");
    ctx.ui.hide_upcoming_event_dialog();
    ctx.ui.go_to_room(room_params).await?;
    Ok(vec![Effect::Handled])
}

async fn handle_profile_link(
    p: &HandlerParams,
    ctx: &DispatchContext<'_>,
) -> Result<Vec<Effect>, DispatchError> {
    let Some(username) = uri::username(&p.url) else {
        return Ok(vec![Effect::Unhandled]);
    };
    if !p.main_navigation_ready {
        return Ok(vec![Effect::Postponed]);
    }
    tracing::debug!(username, "handling profile link");
    ctx.ui.hide_upcoming_event_dialog();
    // Best-effort lookup: a failed profile fetch still counts as handled
    if let Err(error) = ctx.ui.show_user_profile(username).await {
        tracing::warn!(username, %error, "profile lookup failed");
    }
    Ok(vec![Effect::Handled])
}

async fn handle_club_link(
    p: &HandlerParams,
    ctx: &DispatchContext<'_>,
) -> Result<Vec<Effect>, DispatchError> {
    let Some(club_id) = uri::club_id(&p.url) else {
        return Ok(vec![Effect::Unhandled]);
    };
    tracing::debug!(club_id, "handling club link");
    let link = LinkProp::new(p.url.clone());
    match ctx.session.current_user_state() {
        Some(UserState::Invited | UserState::Verified) => {
            if uri::event_id(&p.url).is_some() {
                // Event-scoped club links are deferred to the event flow
                tracing::debug!(club_id, "not handling club event link");
                return Ok(vec![Effect::Unhandled]);
            }
            if p.main_navigation_ready {
                ctx.ui.hide_upcoming_event_dialog();
                ctx.ui.go_to_club(ClubParams { club_id: club_id.to_owned() }).await?;
                return Ok(vec![Effect::Handled]);
            }
            Ok(vec![Effect::Postponed])
        }
        Some(UserState::WaitingList) => {
            tracing::debug!(club_id, "routing club link to the waiting screen");
            // Navigate now, but keep the link pending for reconciliation
            Ok(vec![Effect::navigate(Screen::WaitingInvite, link), Effect::Postponed])
        }
        _ => {
            if !p.welcome_navigation_ready {
                tracing::debug!(club_id, "welcome navigation not ready");
                return Ok(vec![Effect::Postponed]);
            }
            tracing::debug!(club_id, "routing club link through onboarding");
            Ok(vec![Effect::navigate(Screen::Welcome, link), Effect::Postponed])
        }
    }
}

async fn handle_event_link(
    p: &HandlerParams,
    ctx: &DispatchContext<'_>,
) -> Result<Vec<Effect>, DispatchError> {
    let Some(event_id) = uri::event_id(&p.url) else {
        return Ok(vec![Effect::Unhandled]);
    };
    if !p.main_navigation_ready {
        return Ok(vec![Effect::Postponed]);
    }
    tracing::debug!(event_id, "handling event link");
    if let Err(error) = ctx.ui.show_event_dialog(event_id).await {
        tracing::warn!(event_id, %error, "event lookup failed");
    }
    Ok(vec![Effect::Handled])
}

fn handle_support_link(
    p: &HandlerParams,
    ctx: &DispatchContext<'_>,
) -> Result<Vec<Effect>, DispatchError> {
    if !p.url.starts_with(SUPPORT_LINK_PREFIX) {
        return Ok(vec![Effect::Unhandled]);
    }
    if !p.main_navigation_ready {
        return Ok(vec![Effect::Postponed]);
    }
    tracing::debug!("handling support link");
    ctx.ui.present_support();
    Ok(vec![Effect::Handled])
}
