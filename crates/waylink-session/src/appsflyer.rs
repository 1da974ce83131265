//! AppsFlyer SDK callback adapter.
//!
//! AppsFlyer does not hand over a plain URI; its unified deep link payload
//! carries an encoded `deep_link_value` plus a `deep_link_sub1` with
//! attribution data. The adapter synthesizes the OneLink URL the rest of
//! the pipeline understands and forwards it without out-of-band params;
//! all parameters are re-derived from the encoded value.

use serde::Deserialize;
use waylink_core::{UtmLabels, uri};

use crate::session::LinkSession;

/// Host used to synthesize a dispatchable URL from an encoded payload.
pub const ONELINK_HOST: &str = "connect-club.onelink.me";

/// The subset of an AppsFlyer unified deep link payload the dispatcher
/// consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppsflyerPayload {
    /// Encoded link value: `~`-joined segments of `_`-joined tokens.
    #[serde(default)]
    pub deep_link_value: Option<String>,
    /// Attribution data: `landingDeviceId~campaign~content~source`.
    #[serde(default)]
    pub deep_link_sub1: Option<String>,
    /// Install attribution status (`Organic` / `Non-organic`).
    #[serde(default)]
    pub af_status: Option<String>,
    /// True on the first launch after install.
    #[serde(default)]
    pub is_first_launch: bool,
}

impl AppsflyerPayload {
    /// True when the payload actually carries AppsFlyer link data.
    pub fn is_deep_link(&self) -> bool {
        self.deep_link_value.as_deref().is_some_and(|v| !v.is_empty())
            || self.deep_link_sub1.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Attribution labels from `deep_link_sub1`, if meaningful.
    pub fn utm_labels(&self) -> Option<UtmLabels> {
        self.deep_link_sub1.as_deref().and_then(uri::utm_labels_from_deep_link_value)
    }
}

/// Feed an AppsFlyer unified deep link into the session.
///
/// A payload without a `deep_link_value` is ignored (conversion-only
/// callbacks carry attribution but nothing to navigate to). Returns the
/// attribution labels from `deep_link_sub1`, if any.
pub async fn handle_appsflyer_link(
    session: &LinkSession,
    payload: &AppsflyerPayload,
) -> Option<UtmLabels> {
    let labels = payload.utm_labels();
    let Some(value) = payload.deep_link_value.as_deref().filter(|v| !v.is_empty()) else {
        tracing::debug!(
            status = ?payload.af_status,
            "appsflyer payload without deep_link_value, nothing to dispatch"
        );
        return labels;
    };
    let link = format!("{ONELINK_HOST}?deep_link_value={value}");
    tracing::debug!(
        %link,
        status = ?payload.af_status,
        first_launch = payload.is_first_launch,
        "dispatching appsflyer link"
    );
    session.handle_deep_link(link, None).await;
    labels
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn payload_deserializes_from_sdk_shape() {
        let payload: AppsflyerPayload = serde_json::from_str(
            r#"{
                "deep_link_value": "roomId_R1_pswd_P1",
                "deep_link_sub1": "dev42~camp~cont~src",
                "af_status": "Non-organic",
                "is_first_launch": true
            }"#,
        )
        .unwrap();

        assert!(payload.is_deep_link());
        assert!(payload.is_first_launch);
        assert_eq!(payload.af_status.as_deref(), Some("Non-organic"));
        let labels = payload.utm_labels().unwrap();
        assert_eq!(labels.campaign.as_deref(), Some("camp"));
        assert_eq!(labels.content.as_deref(), Some("cont"));
        assert_eq!(labels.source.as_deref(), Some("src"));
        assert_eq!(labels.landing_device_id.as_deref(), Some("dev42"));
    }

    #[test]
    fn conversion_only_payload_is_not_a_deep_link() {
        let payload = AppsflyerPayload::default();
        assert!(!payload.is_deep_link());
        assert!(payload.utm_labels().is_none());
    }

    #[test]
    fn synthesized_link_round_trips_through_the_extractors() {
        let link = format!("{ONELINK_HOST}?deep_link_value=foo_roomId_R1_pswd_P1_bar");
        let params = uri::room_params(&link).unwrap();
        assert_eq!(params.room.as_deref(), Some("R1"));
        assert_eq!(params.password.as_deref(), Some("P1"));
    }
}
