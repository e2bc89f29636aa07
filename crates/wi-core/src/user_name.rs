//! Helpers for logical user names.

use std::net::IpAddr;

/// Whether `name` is exactly an IPv4 or IPv6 address literal, i.e. the name of an anonymous user.
pub fn is_ip_address(name: &str) -> bool {
    name.parse::<IpAddr>().is_ok()
}
