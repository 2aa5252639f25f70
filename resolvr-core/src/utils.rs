//! Common utility functions for denominations, timestamps and addresses.

use sha2::{Digest, Sha256};

/// Number of decimals in the token denomination
pub const TOKEN_DECIMALS: u32 = 8;

/// Convert a whole-token amount into the smallest denomination.
pub fn to_denomination(amount: u64) -> u64 {
    amount * 10u64.pow(TOKEN_DECIMALS)
}

/// Derive a unique 20-byte hex event address from the creator and event name.
///
/// A random salt keeps repeated creations with identical parameters distinct.
pub fn generate_event_address(owner: &str, name: &str) -> String {
    let salt = uuid::Uuid::new_v4();
    let mut hasher = Sha256::new();
    hasher.update(owner.as_bytes());
    hasher.update(name.as_bytes());
    hasher.update(salt.as_bytes());
    let hash = hasher.finalize();
    format!("0x{}", hex::encode(&hash[..20]))
}

/// Whether a principal string looks like a usable address.
///
/// Empty strings and the all-zero address are rejected, matching the
/// zero-address checks performed at event creation.
pub fn is_valid_principal(principal: &str) -> bool {
    let stripped = principal.strip_prefix("0x").unwrap_or(principal);
    if stripped.is_empty() {
        return false;
    }
    !stripped.chars().all(|c| c == '0')
}

/// Current Unix timestamp in seconds.
pub fn unix_now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

/// Format timestamp as human-readable string
pub fn format_timestamp(timestamp: u64) -> String {
    use chrono::DateTime;
    let dt = DateTime::from_timestamp(timestamp as i64, 0).unwrap_or_default();
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_now_is_current_and_monotonic() {
        let first = unix_now();
        // Any date after 2023-11-14 proves the clock isn't stuck at epoch
        assert!(first > 1_700_000_000);
        assert!(unix_now() >= first);
    }

    #[test]
    fn test_to_denomination() {
        assert_eq!(to_denomination(1), 100_000_000);
        assert_eq!(to_denomination(100), 10_000_000_000);
        assert_eq!(to_denomination(0), 0);
    }

    #[test]
    fn test_generate_event_address() {
        let addr = generate_event_address("0xaabb", "Test Event");
        assert!(addr.starts_with("0x"));
        assert_eq!(addr.len(), 42);
        assert!(addr[2..].chars().all(|c| c.is_ascii_hexdigit()));

        // Salted, so identical inputs must not collide
        let other = generate_event_address("0xaabb", "Test Event");
        assert_ne!(addr, other);
    }

    #[test]
    fn test_is_valid_principal() {
        assert!(is_valid_principal("0xaabbccddeeff00112233445566778899aabbccdd"));
        assert!(!is_valid_principal(""));
        assert!(!is_valid_principal("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1735689600), "2025-01-01 00:00:00 UTC");
    }
}
