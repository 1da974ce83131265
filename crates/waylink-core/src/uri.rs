//! Stateless parameter extraction from deep link URIs.
//!
//! Two link shapes are supported and must stay bit-compatible with the
//! links already in circulation:
//!
//! - Plain query-string links: `...?room=R&pswd=P&eventId=E&clubId=C`,
//!   plus `utm_campaign` / `utm_source` / `utm_content`.
//! - AppsFlyer-style links carrying a single `deep_link_value` parameter
//!   whose value is `~`-joined segments of `_`-joined `key_value` tokens,
//!   e.g. `...?deep_link_value=foo_roomId_R1_pswd_P1`, and a
//!   `deep_link_sub1` carrying UTM data as
//!   `landingDeviceId~campaign~content~source`.
//!
//! A URI without a `?` yields `None` from every extractor. Values are
//! extracted as raw tokens; no URL decoding is applied.

use crate::types::{RoomParams, UtmLabels};

/// First value of `name` in the query string of `uri`.
///
/// Returns `None` when the URI has no query string or the key is absent.
/// An empty value (`name=`) is returned as `Some("")`; most callers treat
/// it as absent.
pub fn query_param<'a>(uri: &'a str, name: &str) -> Option<&'a str> {
    let (_, tail) = uri.split_once('?')?;
    // A fragment ends the query string
    let tail = tail.split('#').next().unwrap_or(tail);
    for pair in tail.split('&') {
        if let Some((key, value)) = pair.split_once('=')
            && key == name
        {
            return Some(value);
        }
    }
    None
}

/// Value of `name`, looked up in the query string first and then inside an
/// encoded `deep_link_value` parameter.
///
/// The encoded form splits `deep_link_value` on `~` and scans each segment
/// for a `name_` token; the value is everything between that token and the
/// next `_`. Zero-length values are skipped.
pub fn deep_link_param<'a>(uri: &'a str, name: &str) -> Option<&'a str> {
    // Empty direct values fall through to the encoded form
    if let Some(value) = query_param(uri, name).filter(|v| !v.is_empty()) {
        return Some(value);
    }
    let encoded = query_param(uri, "deep_link_value")?;
    let token = format!("{name}_");
    for segment in encoded.split('~') {
        let Some(at) = segment.find(&token) else {
            continue;
        };
        let rest = &segment[at + token.len()..];
        if rest.is_empty() {
            continue;
        }
        let value = match rest.find('_') {
            Some(end) => &rest[..end],
            None => rest,
        };
        if value.is_empty() {
            continue;
        }
        return Some(value);
    }
    None
}

/// Club id carried by a link (`clubId`).
pub fn club_id(uri: &str) -> Option<&str> {
    deep_link_param(uri, "clubId")
}

/// Username carried by a profile link (`u`).
pub fn username(uri: &str) -> Option<&str> {
    deep_link_param(uri, "u")
}

/// Event id carried by a link (`eventId`).
pub fn event_id(uri: &str) -> Option<&str> {
    deep_link_param(uri, "eventId")
}

/// Invite code carried by a link (`invite`).
pub fn invite_code(uri: &str) -> Option<&str> {
    deep_link_param(uri, "invite")
}

/// Room join parameters carried by a link.
///
/// Supports the compact `deep_link_value` form (`roomId` / `pswd` tokens)
/// and the legacy query-string form (`room` / `pswd` / `eventId` keys). In
/// the legacy form a present `clubId` suppresses room params in favor of
/// the club link flow.
pub fn room_params(uri: &str) -> Option<RoomParams> {
    let Some(encoded) = query_param(uri, "deep_link_value").filter(|v| !v.is_empty()) else {
        return legacy_room_params(uri);
    };
    let tokens: Vec<&str> = encoded.split('_').collect();
    let value_after = |key: &str| {
        tokens
            .iter()
            .position(|t| *t == key)
            .and_then(|at| tokens.get(at + 1))
            .filter(|v| !v.is_empty())
            .map(|v| (*v).to_owned())
    };
    let room = value_after("roomId");
    let password = value_after("pswd");
    if room.is_none() && password.is_none() {
        return None;
    }
    Some(RoomParams { room, password, event_id: None })
}

fn legacy_room_params(uri: &str) -> Option<RoomParams> {
    let non_empty = |name: &str| query_param(uri, name).filter(|v| !v.is_empty()).map(str::to_owned);
    if non_empty("clubId").is_some() {
        return None;
    }
    let room = non_empty("room");
    let password = non_empty("pswd");
    if room.is_none() && password.is_none() {
        return None;
    }
    Some(RoomParams { room, password, event_id: non_empty("eventId") })
}

/// UTM labels from the query string of a link.
///
/// `None` only when campaign, source, and content are all absent.
pub fn utm_labels(uri: &str) -> Option<UtmLabels> {
    let non_empty = |name: &str| query_param(uri, name).filter(|v| !v.is_empty()).map(str::to_owned);
    let labels = UtmLabels {
        campaign: non_empty("utm_campaign"),
        source: non_empty("utm_source"),
        content: non_empty("utm_content"),
        landing_device_id: None,
    };
    if labels.is_empty() { None } else { Some(labels) }
}

/// UTM labels from an AppsFlyer `deep_link_sub1` value.
///
/// The value is `~`-joined: `landingDeviceId~campaign~content~source`.
/// `None` when campaign, content, and source are all absent; the landing
/// device id alone does not make the labels meaningful.
pub fn utm_labels_from_deep_link_value(value: &str) -> Option<UtmLabels> {
    let mut parts = value.split('~');
    let mut next = || parts.next().filter(|v| !v.is_empty()).map(str::to_owned);
    let landing_device_id = next();
    let campaign = next();
    let content = next();
    let source = next();
    let labels = UtmLabels { campaign, source, content, landing_device_id };
    if labels.is_empty() { None } else { Some(labels) }
}
