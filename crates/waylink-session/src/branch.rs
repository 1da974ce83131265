//! Branch SDK callback adapter.
//!
//! Branch delivers an event with the opened URI plus a parameter dictionary
//! it already resolved (room credentials, club id, UTM fields). The adapter
//! forwards deep-linkable events to the session with the pre-parsed params
//! attached and surfaces the attribution labels it extracted; recording
//! them is the caller's concern.

use serde::Deserialize;
use waylink_core::{ClubParams, ParsedParams, RoomParams, UtmLabels, uri};

use crate::session::LinkSession;

/// The subset of a Branch event payload the dispatcher consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BranchPayload {
    /// The opened URI.
    #[serde(default)]
    pub uri: Option<String>,
    /// Pre-parsed room id.
    #[serde(default)]
    pub room: Option<String>,
    /// Pre-parsed room password.
    #[serde(default)]
    pub pswd: Option<String>,
    /// Pre-parsed event id.
    #[serde(default, rename = "eventId")]
    pub event_id: Option<String>,
    /// Pre-parsed club id.
    #[serde(default, rename = "clubId")]
    pub club_id: Option<String>,
    /// Campaign attribution label.
    #[serde(default)]
    pub utm_campaign: Option<String>,
    /// Source attribution label.
    #[serde(default)]
    pub utm_source: Option<String>,
    /// Content attribution label.
    #[serde(default)]
    pub utm_content: Option<String>,
    /// True when the event came from an actual Branch link click.
    #[serde(default, rename = "+clicked_branch_link")]
    pub clicked_branch_link: bool,
    /// Device id recorded by the landing page.
    #[serde(default, rename = "landingAmplitudeDeviceId")]
    pub landing_device_id: Option<String>,
}

impl BranchPayload {
    fn utm_labels(&self) -> Option<UtmLabels> {
        // Branch pads absent fields with empty strings; treat them as absent
        let non_empty = |field: &Option<String>| field.clone().filter(|v| !v.is_empty());
        let labels = UtmLabels {
            campaign: non_empty(&self.utm_campaign),
            source: non_empty(&self.utm_source),
            content: non_empty(&self.utm_content),
            landing_device_id: non_empty(&self.landing_device_id),
        };
        if !labels.is_empty() {
            return Some(labels);
        }
        // Payload fields first, URI query as the fallback
        self.uri.as_deref().and_then(uri::utm_labels)
    }

    fn parsed_params(&self) -> Option<ParsedParams> {
        if let (Some(room), Some(password)) = (self.room.clone(), self.pswd.clone()) {
            return Some(ParsedParams {
                room_params: Some(RoomParams {
                    room: Some(room),
                    password: Some(password),
                    event_id: self.event_id.clone(),
                }),
                club_params: None,
            });
        }
        let club_id = self.club_id.clone()?;
        Some(ParsedParams { room_params: None, club_params: Some(ClubParams { club_id }) })
    }
}

/// Feed a Branch event into the session.
///
/// Dispatches only when the payload carries room credentials or a club id,
/// matching what Branch links actually encode; anything else is left to
/// the plain URL-event path. Returns the attribution labels found in the
/// payload or its URI, if any.
pub async fn handle_branch_event(
    session: &LinkSession,
    payload: &BranchPayload,
) -> Option<UtmLabels> {
    let labels = payload.utm_labels();
    let Some(link) = payload.uri.clone() else {
        tracing::debug!("branch event without a uri, nothing to dispatch");
        return labels;
    };
    let Some(params) = payload.parsed_params() else {
        tracing::debug!(%link, "branch event carries no room or club params");
        return labels;
    };
    tracing::debug!(%link, clicked = payload.clicked_branch_link, "dispatching branch link");
    session.handle_deep_link(link, Some(params)).await;
    labels
}
