//! # Resolvr Core
//!
//! Core Rust library for round-based resolution of multiple-results prediction
//! market events.
//!
//! An event runs through three phases:
//! - **Betting round (round 0)**: any outcome may receive stake freely within
//!   the betting window.
//! - **Arbitration rounds (rounds >= 1)**: a designated reporter proposes a
//!   result by staking the consensus threshold; challengers unseat it by
//!   staking an escalating bond against it before the round's deadline.
//! - **Finalization**: once a round's deadline passes unchallenged the current
//!   result is final, and staked funds are distributed pro-rata to backers of
//!   the winning outcome.
//!
//! Value enters and leaves through an external token ledger; the library only
//! decodes the ledger's transfer callbacks ([`gateway`]) and reports how much
//! to retain, refund or pay out.
//!
//! ## Examples
//!
//! ```rust
//! use resolvr_core::{EventConfig, EventParams, MultipleResultsEvent};
//!
//! let params = EventParams {
//!     name: "Who will win the match?".to_string(),
//!     results: vec!["Team A".to_string(), "Team B".to_string()],
//!     bet_start_time: 1_000,
//!     bet_end_time: 2_000,
//!     result_set_start_time: 2_000,
//!     result_set_end_time: 3_000,
//!     centralized_oracle: "0x1111111111111111111111111111111111111111".to_string(),
//! };
//! let mut event = MultipleResultsEvent::new(
//!     "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
//!     params,
//!     EventConfig::default(),
//! )?;
//!
//! // Slot 0 is reserved for "Invalid"; user outcomes start at 1
//! event.bet("0x2222222222222222222222222222222222222222", 1, 5_000, 1_500)?;
//! Ok::<(), resolvr_core::EventError>(())
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod gateway;
pub mod ledger;
pub mod payout;
pub mod store;
pub mod test_utils;
pub mod threshold;
pub mod utils;

pub use config::EventConfig;
pub use error::{EventError, Result};
pub use event::{EventParams, MultipleResultsEvent, VoteOutcome, Withdrawal};
pub use gateway::{EventAction, TransferOutcome};
pub use ledger::StakeLedger;
pub use payout::Winnings;
pub use store::EventStore;
pub use utils::*;

/// Sentinel result index while no result has been proposed
pub const INVALID_RESULT_INDEX: u8 = 255;

/// Label of the reserved outcome slot 0
pub const RESULT_INVALID: &str = "Invalid";
