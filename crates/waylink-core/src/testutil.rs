//! In-crate test doubles for the boundary traits.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::{
    driver::{Navigator, SessionInfo, UiEvents},
    effect::{LinkProp, Screen},
    error::UiError,
    types::{ClubParams, RoomParams, UserState},
};

/// One recorded UI side-channel invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCall {
    HideUpcomingEventDialog,
    GoToRoom(RoomParams),
    GoToClub(ClubParams),
    ShowUserProfile(String),
    ShowEventDialog(String),
    PresentSupport,
}

/// Records every UI trigger; lookups and joins can be scripted to fail.
#[derive(Default)]
pub struct RecordingUi {
    calls: Mutex<Vec<UiCall>>,
    fail_lookups: bool,
    fail_joins: bool,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_lookups() -> Self {
        Self { fail_lookups: true, ..Self::default() }
    }

    pub fn failing_joins() -> Self {
        Self { fail_joins: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<UiCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn record(&self, call: UiCall) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
    }
}

#[async_trait]
impl UiEvents for RecordingUi {
    fn hide_upcoming_event_dialog(&self) {
        self.record(UiCall::HideUpcomingEventDialog);
    }

    async fn go_to_room(&self, params: RoomParams) -> Result<(), UiError> {
        if self.fail_joins {
            return Err(UiError::Unavailable("scripted failure".to_owned()));
        }
        self.record(UiCall::GoToRoom(params));
        Ok(())
    }

    async fn go_to_club(&self, params: ClubParams) -> Result<(), UiError> {
        if self.fail_joins {
            return Err(UiError::Unavailable("scripted failure".to_owned()));
        }
        self.record(UiCall::GoToClub(params));
        Ok(())
    }

    async fn show_user_profile(&self, username: &str) -> Result<(), UiError> {
        if self.fail_lookups {
            return Err(UiError::Lookup {
                entity: "profile",
                id: username.to_owned(),
                reason: "scripted failure".to_owned(),
            });
        }
        self.record(UiCall::ShowUserProfile(username.to_owned()));
        Ok(())
    }

    async fn show_event_dialog(&self, event_id: &str) -> Result<(), UiError> {
        if self.fail_lookups {
            return Err(UiError::Lookup {
                entity: "event",
                id: event_id.to_owned(),
                reason: "scripted failure".to_owned(),
            });
        }
        self.record(UiCall::ShowEventDialog(event_id.to_owned()));
        Ok(())
    }

    fn present_support(&self) {
        self.record(UiCall::PresentSupport);
    }
}

/// Session view returning a fixed user state.
pub struct FixedSession(pub Option<UserState>);

impl SessionInfo for FixedSession {
    fn current_user_state(&self) -> Option<UserState> {
        self.0
    }
}

/// Records every navigation call.
#[derive(Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<(Screen, LinkProp)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(Screen, LinkProp)> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Screen, params: LinkProp) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push((destination, params));
    }
}
