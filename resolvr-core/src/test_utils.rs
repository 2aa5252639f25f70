//! Common test utilities for resolvr-core tests.
//!
//! Provides deterministic principals, a fixed schedule and a small-denomination
//! config so expected stake and payout values stay readable in assertions.

use crate::{
    event::{EventParams, MultipleResultsEvent},
    EventConfig,
};

/// Event creator and designated reporter in test fixtures
pub const OWNER: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const ACCT1: &str = "0x1111111111111111111111111111111111111111";
pub const ACCT2: &str = "0x2222222222222222222222222222222222222222";
pub const ACCT3: &str = "0x3333333333333333333333333333333333333333";
pub const ACCT4: &str = "0x4444444444444444444444444444444444444444";
pub const ACCT5: &str = "0x5555555555555555555555555555555555555555";

/// Fixed test schedule (Unix seconds)
pub const BET_START: u64 = 1_000;
pub const BET_END: u64 = 3_000;
pub const RESULT_SET_START: u64 = 4_000;
pub const RESULT_SET_END: u64 = 6_000;

/// A config with whole-unit amounts: starting threshold 100 at 10% growth,
/// 10% arbitration reward, one-day arbitration rounds.
pub fn test_config() -> EventConfig {
    EventConfig {
        escrow_amount: 100,
        arbitration_length: 86_400,
        starting_threshold: 100,
        threshold_percent_increase: 10,
        arbitration_reward_percent: 10,
    }
}

/// Standard creation parameters: outcomes A/B/C with the fixed schedule,
/// OWNER as the centralized oracle.
pub fn test_params() -> EventParams {
    EventParams {
        name: "Test Event 1".to_string(),
        results: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        bet_start_time: BET_START,
        bet_end_time: BET_END,
        result_set_start_time: RESULT_SET_START,
        result_set_end_time: RESULT_SET_END,
        centralized_oracle: OWNER.to_string(),
    }
}

/// Create a standard test event with the fixture params and config.
pub fn create_test_event() -> MultipleResultsEvent {
    MultipleResultsEvent::new(OWNER, test_params(), test_config()).unwrap()
}
