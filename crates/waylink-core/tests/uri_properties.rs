//! Property-based tests for the URI extractors.
//!
//! Verifies the no-query-string guarantee and round-trips over constructed
//! links for arbitrary identifier values.

use proptest::prelude::*;
use waylink_core::uri;

proptest! {
    /// Any URI without a `?` yields nothing from every extractor.
    #[test]
    fn prop_no_query_string_no_params(u in "[a-zA-Z0-9:/._~&=-]*") {
        prop_assume!(!u.contains('?'));
        prop_assert!(uri::query_param(&u, "room").is_none());
        prop_assert!(uri::club_id(&u).is_none());
        prop_assert!(uri::username(&u).is_none());
        prop_assert!(uri::event_id(&u).is_none());
        prop_assert!(uri::invite_code(&u).is_none());
        prop_assert!(uri::room_params(&u).is_none());
        prop_assert!(uri::utm_labels(&u).is_none());
    }

    /// Legacy room links round-trip through the extractor.
    #[test]
    fn prop_legacy_room_roundtrip(room in "[A-Za-z0-9]{1,16}", pswd in "[A-Za-z0-9]{1,16}") {
        let link = format!("https://x.example/l?room={room}&pswd={pswd}");
        let params = uri::room_params(&link);
        prop_assert_eq!(
            params,
            Some(waylink_core::RoomParams {
                room: Some(room),
                password: Some(pswd),
                event_id: None,
            })
        );
    }

    /// A clubId key always suppresses room params in the legacy form.
    #[test]
    fn prop_club_id_suppresses_room(
        club in "[A-Za-z0-9]{1,16}",
        room in "[A-Za-z0-9]{1,16}",
    ) {
        let link = format!("https://x.example/l?clubId={club}&room={room}&pswd=p");
        prop_assert!(uri::room_params(&link).is_none());
        prop_assert_eq!(uri::club_id(&link), Some(club.as_str()));
    }

    /// Compact deep_link_value room tokens round-trip.
    #[test]
    fn prop_compact_room_roundtrip(room in "[A-Za-z0-9]{1,16}", pswd in "[A-Za-z0-9]{1,16}") {
        let link = format!("https://x.onelink.me?deep_link_value=roomId_{room}_pswd_{pswd}");
        let params = uri::room_params(&link);
        prop_assert_eq!(
            params,
            Some(waylink_core::RoomParams {
                room: Some(room),
                password: Some(pswd),
                event_id: None,
            })
        );
    }

    /// The first occurrence of a query key wins.
    #[test]
    fn prop_first_query_value_wins(a in "[A-Za-z0-9]{1,8}", b in "[A-Za-z0-9]{1,8}") {
        let link = format!("https://x.example/l?k={a}&k={b}");
        prop_assert_eq!(uri::query_param(&link, "k"), Some(a.as_str()));
    }
}
