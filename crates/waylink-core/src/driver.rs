//! Boundary traits for platform collaborators.
//!
//! The dispatch core never owns navigation or UI surfaces; callers supply
//! these traits and the core only describes and triggers work through them.
//! This keeps the handler chain fully testable with recording doubles.

use async_trait::async_trait;

use crate::{
    effect::{LinkProp, Screen},
    error::UiError,
    types::{ClubParams, RoomParams, UserState},
};

/// Live navigation controller.
///
/// The store observes the navigator through a weak reference; it never owns
/// its lifecycle. A dropped navigator is equivalent to one that was never
/// mounted and postpones dispatch.
pub trait Navigator: Send + Sync {
    /// Navigate to `destination` with the given params.
    fn navigate(&self, destination: Screen, params: LinkProp);
}

/// UI side-channel triggers invoked while processing a link.
///
/// Show-style calls (`show_user_profile`, `show_event_dialog`) involve a
/// remote lookup and are best-effort: handlers log a returned error and
/// still report the link handled. Join-style calls (`go_to_room`,
/// `go_to_club`) propagate their error and abort the dispatch attempt.
#[async_trait]
pub trait UiEvents: Send + Sync {
    /// Dismiss the upcoming-event dialog if it is open.
    fn hide_upcoming_event_dialog(&self);

    /// Join the room described by a link.
    async fn go_to_room(&self, params: RoomParams) -> Result<(), UiError>;

    /// Open the club described by a link.
    async fn go_to_club(&self, params: ClubParams) -> Result<(), UiError>;

    /// Resolve a username and present the profile screen.
    async fn show_user_profile(&self, username: &str) -> Result<(), UiError>;

    /// Resolve an event id and present the event dialog.
    async fn show_event_dialog(&self, event_id: &str) -> Result<(), UiError>;

    /// Present the support / help surface.
    fn present_support(&self);
}

/// Read-only view of the current authentication session.
pub trait SessionInfo: Send + Sync {
    /// Account state of the current user, `None` when signed out.
    fn current_user_state(&self) -> Option<UserState>;
}
