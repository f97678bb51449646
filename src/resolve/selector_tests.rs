//! Tests for query-to-selector conversion.

use std::net::{Ipv4Addr, Ipv6Addr};

use super::{MacQuery, ResolveError, Selector};

#[test]
fn empty_query_selects_default_interface() {
    let query = MacQuery::new();

    assert!(query.network_request);
    assert_eq!(query.selector().unwrap(), None);
}

#[test]
fn each_constructor_selects_its_variant() {
    assert_eq!(
        MacQuery::for_interface("eth0").selector().unwrap(),
        Some(Selector::Interface("eth0".to_string()))
    );
    assert_eq!(
        MacQuery::for_ip(Ipv4Addr::new(10, 0, 0, 1)).selector().unwrap(),
        Some(Selector::Ipv4(Ipv4Addr::new(10, 0, 0, 1)))
    );
    assert_eq!(
        MacQuery::for_ip6(Ipv6Addr::LOCALHOST).selector().unwrap(),
        Some(Selector::Ipv6(Ipv6Addr::LOCALHOST))
    );
    assert_eq!(
        MacQuery::for_hostname("router.lan").selector().unwrap(),
        Some(Selector::Hostname("router.lan".to_string()))
    );
}

#[test]
fn two_selectors_conflict() {
    let query = MacQuery {
        ip: Some(Ipv4Addr::new(10, 0, 0, 1)),
        ..MacQuery::for_interface("eth0")
    };

    assert!(matches!(
        query.selector(),
        Err(ResolveError::ConflictingSelectors { count: 2 })
    ));
}

#[test]
fn all_selectors_conflict() {
    let query = MacQuery {
        interface: Some("eth0".to_string()),
        ip: Some(Ipv4Addr::new(10, 0, 0, 1)),
        ip6: Some(Ipv6Addr::LOCALHOST),
        hostname: Some("router.lan".to_string()),
        network_request: false,
    };

    assert!(matches!(
        query.selector(),
        Err(ResolveError::ConflictingSelectors { count: 4 })
    ));
}

#[test]
fn network_request_can_be_disabled() {
    let query = MacQuery::for_ip(Ipv4Addr::new(10, 0, 0, 1)).with_network_request(false);
    assert!(!query.network_request);
}

#[test]
fn selector_display_names_kind_and_value() {
    assert_eq!(
        Selector::Interface("en0".to_string()).to_string(),
        "interface en0"
    );
    assert_eq!(
        Selector::Ipv4(Ipv4Addr::new(192, 168, 0, 1)).to_string(),
        "ip 192.168.0.1"
    );
    assert_eq!(Selector::Ipv6(Ipv6Addr::LOCALHOST).to_string(), "ip6 ::1");
    assert_eq!(
        Selector::Hostname("nas".to_string()).to_string(),
        "hostname nas"
    );
}
