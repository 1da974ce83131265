//! Link parameter types shared across the dispatch core.
//!
//! These mirror the shapes delivered by the external link sources: either
//! parsed out of a raw URI by [`crate::uri`], or attached out-of-band by an
//! SDK callback that already decoded them.

/// Room join parameters carried by a deep link.
///
/// Individual fields are optional because legacy query-string links may
/// carry any subset of them; the room handler requires `room` to act.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomParams {
    /// Room identifier.
    pub room: Option<String>,
    /// Room password.
    pub password: Option<String>,
    /// Event the room belongs to, if any.
    pub event_id: Option<String>,
}

/// Club parameters carried by a deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubParams {
    /// Club identifier.
    pub club_id: String,
}

/// Structured link parameters attached out-of-band by a link source.
///
/// Some SDKs (Branch) deliver already-parsed room or club parameters next to
/// the raw URI. They are recorded alongside the url; handlers re-derive what
/// they need from the url itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedParams {
    /// Pre-parsed room parameters.
    pub room_params: Option<RoomParams>,
    /// Pre-parsed club parameters.
    pub club_params: Option<ClubParams>,
}

/// UTM attribution labels extracted from a link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmLabels {
    /// `utm_campaign` value.
    pub campaign: Option<String>,
    /// `utm_source` value.
    pub source: Option<String>,
    /// `utm_content` value.
    pub content: Option<String>,
    /// Device id recorded by the landing page, AppsFlyer links only.
    pub landing_device_id: Option<String>,
}

impl UtmLabels {
    /// True when campaign, source, and content are all absent.
    pub fn is_empty(&self) -> bool {
        self.campaign.is_none() && self.source.is_none() && self.content.is_none()
    }
}

/// Account state of the current user, as reported by the session layer.
///
/// The club handler branches on this to decide between joining the club,
/// parking the link on the waiting screen, or routing through onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserState {
    /// Invited but not yet verified.
    Invited,
    /// Registered without an invite.
    NotInvited,
    /// Legacy account predating the invite system.
    Old,
    /// Fully verified account.
    Verified,
    /// Parked on the waiting list.
    WaitingList,
}
