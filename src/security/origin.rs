//! Caller origin classification.

/// Returns true if the IP string names a private or local caller.
///
/// Matches the IPv4/IPv6 loopback addresses exactly and the `10.`,
/// `192.168.`, and `172.` prefixes. The `172.` prefix covers all of
/// 172.0.0.0/8, wider than the RFC 1918 172.16.0.0/12 range.
/// Malformed input simply classifies as non-private.
pub fn is_private_ip(ip: &str) -> bool {
    ip == "127.0.0.1"
        || ip == "::1"
        || ip.starts_with("10.")
        || ip.starts_with("192.168.")
        || ip.starts_with("172.")
}
