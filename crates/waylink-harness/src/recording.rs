//! Recording doubles for the navigation and UI boundaries.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use waylink_core::{
    ClubParams, LinkProp, Navigator, RoomParams, Screen, UiError, UiEvents,
};

/// One recorded UI side-channel invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCall {
    /// `hide_upcoming_event_dialog` was triggered.
    HideUpcomingEventDialog,
    /// `go_to_room` was triggered with these params.
    GoToRoom(RoomParams),
    /// `go_to_club` was triggered with these params.
    GoToClub(ClubParams),
    /// `show_user_profile` was triggered for this username.
    ShowUserProfile(String),
    /// `show_event_dialog` was triggered for this event id.
    ShowEventDialog(String),
    /// `present_support` was triggered.
    PresentSupport,
}

/// Records every navigation call for later assertion.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<(Screen, LinkProp)>>,
}

impl RecordingNavigator {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All navigation calls recorded so far, in order.
    pub fn calls(&self) -> Vec<(Screen, LinkProp)> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Screen, params: LinkProp) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push((destination, params));
    }
}

/// Records every UI trigger; lookups and joins can be scripted to fail.
#[derive(Default)]
pub struct RecordingUi {
    calls: Mutex<Vec<UiCall>>,
    fail_lookups: bool,
    fail_joins: bool,
}

impl RecordingUi {
    /// Create a recorder whose calls all succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder whose profile/event lookups fail.
    pub fn failing_lookups() -> Self {
        Self { fail_lookups: true, ..Self::default() }
    }

    /// Create a recorder whose room/club joins fail.
    pub fn failing_joins() -> Self {
        Self { fail_joins: true, ..Self::default() }
    }

    /// All UI triggers recorded so far, in order.
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
