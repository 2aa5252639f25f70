//! Pro-rata payout engine.
//!
//! Once an event is finalized on outcome `W`, losing stakes are redistributed
//! to the backers of `W`: betting-round losers' stakes go to betting-round
//! winners, minus a reward carve-out that is folded into the arbitration
//! losers' pool and distributed to arbitration winners. All divisions floor
//! toward zero; the remainder dust stays in the contract and is bounded by one
//! unit per winner per phase.

use crate::{event::MultipleResultsEvent, INVALID_RESULT_INDEX};
use serde::{Deserialize, Serialize};

/// A participant's computed winnings, split by phase.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Winnings {
    /// Winnings from the betting round (own stake returned plus pro-rata share
    /// of the betting losers' pool)
    pub bet_tokens: u64,

    /// Winnings from the arbitration rounds (own stake returned plus pro-rata
    /// share of the arbitration losers' pool and the betting carve-out)
    pub arbitration_tokens: u64,
}

impl Winnings {
    /// Total amount owed to the participant.
    pub fn total(&self) -> u64 {
        self.bet_tokens + self.arbitration_tokens
    }
}

/// Compute `participant`'s winnings for the event's current result.
///
/// This is a pure query: before any result has been proposed it returns zero
/// for every participant rather than failing. Callers gating actual transfers
/// must additionally check finalization.
pub fn calculate_winnings(event: &MultipleResultsEvent, participant: &str) -> Winnings {
    let winner = event.current_result_index;
    if winner == INVALID_RESULT_INDEX {
        return Winnings::default();
    }

    // "No one loses" semantics: an Invalid final result refunds everyone
    // their own stakes in full.
    if winner == 0 {
        let bets: u64 = event.ledger.bet_balances(participant).iter().sum();
        let votes: u64 = event.ledger.vote_balances(participant).iter().sum();
        return Winnings {
            bet_tokens: bets,
            arbitration_tokens: votes,
        };
    }

    let reward_percent = event.config.arbitration_reward_percent;

    let winners_bets = event.ledger.bet_total(winner);
    let losers_bets = event.total_bets - winners_bets;
    let carve_out = (losers_bets as u128 * reward_percent as u128 / 100) as u64;

    // Products of denominated amounts exceed u64, so the shares are computed
    // in u128; a winner's share never exceeds the distributed pool, so the
    // quotient always fits back into u64.
    let my_bets = event.ledger.bet_balances(participant)[winner as usize];
    let bet_tokens = if winners_bets == 0 || my_bets == 0 {
        0
    } else {
        let share =
            my_bets as u128 * (losers_bets - carve_out) as u128 / winners_bets as u128;
        share as u64 + my_bets
    };

    let vote_winners = event.ledger.vote_total(winner);
    let vote_losers = event.total_arbitration - vote_winners;

    let my_votes = event.ledger.vote_balances(participant)[winner as usize];
    let arbitration_tokens = if vote_winners == 0 || my_votes == 0 {
        0
    } else {
        let share = my_votes as u128 * (vote_losers as u128 + carve_out as u128)
            / vote_winners as u128;
        share as u64 + my_votes
    };

    Winnings {
        bet_tokens,
        arbitration_tokens,
    }
}
