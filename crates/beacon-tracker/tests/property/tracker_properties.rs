//! Property tests for client ids and session precedence.

use beacon_core::config::TransportConfig;
use beacon_core::ParamValue;
use beacon_tracker::{generate_id, Hit, Tracker};
use beacon_transport::HttpRequest;
use proptest::prelude::*;
use test_fixtures::RecordingClient;

fn is_uuid_shaped(id: &str) -> bool {
    let groups: Vec<&str> = id.split('-').collect();
    groups.iter().map(|g| g.len()).eq([8, 4, 4, 4, 12])
        && groups
            .iter()
            .all(|g| g.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()))
}

proptest! {
    #[test]
    fn digest_ids_are_deterministic_and_uuid_shaped(basis in ".*") {
        let id = generate_id(Some(basis.as_str()));
        prop_assert_eq!(&id, &generate_id(Some(basis.as_str())));
        prop_assert!(is_uuid_shaped(&id), "not uuid-shaped: {}", id);
    }

    #[test]
    fn distinct_bases_give_distinct_ids(a in "[a-z]{1,16}", b in "[a-z]{1,16}") {
        prop_assume!(a != b);
        prop_assert_ne!(generate_id(Some(a.as_str())), generate_id(Some(b.as_str())));
    }

    #[test]
    fn session_page_never_overrides_positional_path(
        session in "/[a-z]{0,12}",
        path in "/[a-z]{0,12}",
    ) {
        let transport = HttpRequest::with_client(RecordingClient::new(), &TransportConfig::default());
        let mut tracker = Tracker::new("UA-1-1", transport);
        tracker.set("page", session.as_str()).unwrap();

        let payload = tracker.build_payload(Hit::pageview(path.as_str())).unwrap();

        prop_assert_eq!(payload.get("dp"), Some(&ParamValue::Text(path)));
    }
}
