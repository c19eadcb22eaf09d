//! IPv4 address conversion functions

use std::net::Ipv4Addr;

/// Dotted-quad IPv4 text to its 32-bit value in network byte order.
/// Anything that is not a dotted quad yields 0.
pub fn ip_to_long(ip: &str) -> u32 {
    ip.parse::<Ipv4Addr>().map(u32::from).unwrap_or(0)
}

pub fn long_to_ip(long: u32) -> String {
    Ipv4Addr::from(long).to_string()
}
