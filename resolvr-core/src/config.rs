//! Event configuration.
//!
//! The Solidity original resolved these values through a ConfigManager registry
//! contract at call time. Here they are plain data, injected once at event
//! creation and immutable afterwards.

use crate::utils::to_denomination;
use serde::{Deserialize, Serialize};

/// Configuration fixed at event creation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventConfig {
    /// Escrow deposited by the creator, refunded on the owner's withdrawal
    pub escrow_amount: u64,

    /// Length of each arbitration round in seconds
    pub arbitration_length: u64,

    /// Consensus threshold for the initial result proposal (round 0 -> 1)
    pub starting_threshold: u64,

    /// Percentage the threshold grows by on each round transition
    pub threshold_percent_increase: u64,

    /// Percentage of the betting losers' pool carved out for arbitration winners
    pub arbitration_reward_percent: u64,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            escrow_amount: to_denomination(100),
            arbitration_length: 86_400, // 24 hours
            starting_threshold: to_denomination(100),
            threshold_percent_increase: 10,
            arbitration_reward_percent: 10,
        }
    }
}
