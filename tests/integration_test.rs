//! Integration tests for ipnet-acl
//!
//! These tests exercise the public surface: parsing, printing, rollback
//! and containment working together.

use ipnet_acl::parser::{read_ip_network_address, read_network_address, Cursor, ParseError};
use ipnet_acl::{any_has_address, parse_network_list, Ipv4NetworkAddress};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[test]
fn test_parse_print_round_trip() {
    let inputs = [
        "0.0.0.0/0",
        "10.0.0.0/8",
        "192.168.1.55/24",
        "255.255.255.255/32",
        "::/0",
        "::1/128",
        "2001:db8::/32",
        "fe80::1/64",
        "::ffff:10.0.0.1/96",
    ];

    for input in inputs {
        let networks = parse_network_list(input).expect("Failed to parse network");
        let printed = networks[0].to_string();
        let reparsed = parse_network_list(&printed).expect("Failed to reparse printed form");
        assert_eq!(reparsed[0], networks[0], "round trip for {input}");
    }
}

#[test]
fn test_failed_parse_restores_cursor() {
    let attempts = [
        "300.1.1.1/24",
        "10.0.0.0",
        "10.0.0.0/",
        "10.0.0.0/33",
        "garbage",
        "",
    ];

    for input in attempts {
        let mut cursor = Cursor::new(input);
        let before = cursor.pos();
        assert!(
            read_ip_network_address(&mut cursor).is_err(),
            "{input:?} should not parse"
        );
        assert_eq!(
            cursor.pos(),
            before,
            "cursor moved after failed parse of {input:?}"
        );
        assert_eq!(cursor.rest(), input, "characters lost for {input:?}");
    }
}

#[test]
fn test_failed_single_family_parse_restores_cursor() {
    // A valid v4 network is not a v6 network; the v6 attempt must leave
    // the input untouched so a retry with v4 succeeds on the same cursor.
    let mut cursor = Cursor::new("172.16.0.0/12");
    assert_eq!(
        read_network_address::<Ipv6Addr>(&mut cursor),
        Err(ParseError::MalformedLiteral)
    );
    assert_eq!(cursor.rest(), "172.16.0.0/12");

    let network = read_network_address::<Ipv4Addr>(&mut cursor).expect("v4 retry should succeed");
    assert_eq!(network.to_string(), "172.16.0.0/12");
    assert!(cursor.at_end());
}

#[test]
fn test_acl_decisions() {
    let acl = parse_network_list("192.168.1.0/24,10.0.0.0/12,2001:db8::/32")
        .expect("Failed to parse ACL");

    let allowed: [IpAddr; 4] = [
        "192.168.1.55".parse().unwrap(),
        "10.15.255.255".parse().unwrap(),
        "2001:db8::beef".parse().unwrap(),
        "192.168.1.0".parse().unwrap(),
    ];
    let denied: [IpAddr; 4] = [
        "192.168.2.1".parse().unwrap(),
        "10.16.0.0".parse().unwrap(),
        "2001:db9::1".parse().unwrap(),
        // v6 address against v4 networks only: family mismatch.
        "::ffff:192.168.1.55".parse().unwrap(),
    ];

    for addr in allowed {
        assert!(any_has_address(&acl, addr), "{addr} should be allowed");
    }
    for addr in denied {
        assert!(!any_has_address(&acl, addr), "{addr} should be denied");
    }
}

#[test]
fn test_host_bits_preserved_through_round_trip() {
    // Host bits beyond the prefix survive parse and print unchanged.
    let network: Ipv4NetworkAddress = "192.168.1.55/24".parse().unwrap();
    assert_eq!(network.address(), Ipv4Addr::new(192, 168, 1, 55));
    assert_eq!(network.to_string(), "192.168.1.55/24");

    // And the network still contains its own designated address.
    assert!(network.has_address(network.address()));

    // Same network bits, different host bits: distinct values.
    let zeroed: Ipv4NetworkAddress = "192.168.1.0/24".parse().unwrap();
    assert_ne!(network, zeroed);
    assert!(zeroed.has_address(network.address()));
}

#[test]
fn test_serde_acl_document() {
    // An ACL as it would appear in a JSON config document.
    let json = r#"{"permit": ["10.0.0.0/8", "2001:db8::/32"]}"#;

    #[derive(serde::Deserialize, serde::Serialize)]
    struct Acl {
        permit: Vec<ipnet_acl::models::IpNetworkAddress>,
    }

    let acl: Acl = serde_json::from_str(json).expect("Failed to parse ACL document");
    assert!(any_has_address(&acl.permit, "10.1.2.3".parse().unwrap()));
    assert!(!any_has_address(&acl.permit, "11.0.0.1".parse().unwrap()));

    let out = serde_json::to_string(&acl).expect("Failed to serialize ACL document");
    assert_eq!(out, r#"{"permit":["10.0.0.0/8","2001:db8::/32"]}"#);
}
