//! Consensus threshold policy.
//!
//! The stake required to flip a round's result grows by a fixed percentage on
//! every round transition. The round-0 -> round-1 proposal is the exception:
//! it uses the configured starting threshold as-is, so `threshold(1)` equals
//! the starting threshold and `threshold(k+1) = next_threshold(threshold(k))`
//! for k >= 1.

/// Compute the next round's consensus threshold.
///
/// `new = prev + floor(prev * percent_increase / 100)`. Pure and deterministic.
/// The product is taken in u128 so denominated thresholds cannot overflow.
pub fn next_threshold(prev_threshold: u64, percent_increase: u64) -> u64 {
    prev_threshold + (prev_threshold as u128 * percent_increase as u128 / 100) as u64
}
