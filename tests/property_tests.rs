//! Property-based tests for prefnet
//!
//! Uses proptest for the hardware-port parser and SSID validation:
//! - the Wi-Fi device is found wherever its block sits in the listing
//! - listings without a Wi-Fi port never yield a device
//! - SSID sets are accepted iff they have 1-2 distinct non-blank entries

use prefnet::{MAX_SSIDS, SsidList, parse_wifi_device};
use proptest::prelude::*;

/// Strategy for plausible BSD interface names
fn device_strategy() -> impl Strategy<Value = String> {
    "(en|awdl|bridge|utun)[0-9]{1,2}"
}

/// Strategy for non-Wi-Fi hardware port labels
fn other_port_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Ethernet".to_string()),
        Just("Thunderbolt Bridge".to_string()),
        Just("USB 10/100/1000 LAN".to_string()),
        Just("Bluetooth PAN".to_string()),
        "Thunderbolt [1-4]",
    ]
}

fn block(port: &str, device: &str) -> String {
    format!(
        "Hardware Port: {}\nDevice: {}\nEthernet Address: 00:11:22:33:44:55\n\n",
        port, device
    )
}

proptest! {
    /// The Wi-Fi device is found regardless of how many ports precede or follow it
    #[test]
    fn wifi_device_found_at_any_position(
        before in prop::collection::vec((other_port_strategy(), device_strategy()), 0..4),
        after in prop::collection::vec((other_port_strategy(), device_strategy()), 0..4),
        wifi in device_strategy(),
    ) {
        let mut listing = String::new();
        for (port, dev) in &before {
            listing.push_str(&block(port, dev));
        }
        listing.push_str(&block("Wi-Fi", &wifi));
        for (port, dev) in &after {
            listing.push_str(&block(port, dev));
        }
        listing.push_str("VLAN Configurations\n===================\n");

        let found = parse_wifi_device(&listing);
        prop_assert_eq!(found.as_ref().map(|d| d.as_str()), Some(wifi.as_str()));
    }

    /// No Wi-Fi block means no device, however many other ports exist
    #[test]
    fn no_wifi_means_none(
        ports in prop::collection::vec((other_port_strategy(), device_strategy()), 0..6),
    ) {
        let listing: String = ports.iter().map(|(p, d)| block(p, d)).collect();
        prop_assert!(parse_wifi_device(&listing).is_none());
    }

    /// Parser never panics on arbitrary input
    #[test]
    fn parser_total(input in ".*") {
        let _ = parse_wifi_device(&input);
    }

    /// SSID lists are valid iff 1..=MAX_SSIDS distinct non-blank entries
    #[test]
    fn ssid_list_validation(ssids in prop::collection::vec("[ a-zA-Z0-9_-]{0,8}", 0..4)) {
        let mut distinct = ssids.clone();
        distinct.sort();
        distinct.dedup();
        let expected_ok = !ssids.is_empty()
            && ssids.len() <= MAX_SSIDS
            && distinct.len() == ssids.len()
            && ssids.iter().all(|s| !s.trim().is_empty());

        prop_assert_eq!(SsidList::new(ssids).is_ok(), expected_ok);
    }
}
