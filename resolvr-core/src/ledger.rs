//! Per-round stake ledger.
//!
//! Tracks every participant's accumulated stake per round and per outcome,
//! together with per-round-outcome totals. Round 0 holds betting stakes, rounds
//! >= 1 hold arbitration stakes. All the payout math reads from here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stakes recorded during a single round.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RoundLedger {
    /// Total stake per outcome slot for this round
    totals: Vec<u64>,

    /// Per-participant stake per outcome slot
    stakes: HashMap<String, Vec<u64>>,
}

impl RoundLedger {
    fn new(num_results: usize) -> Self {
        Self {
            totals: vec![0; num_results],
            stakes: HashMap::new(),
        }
    }
}

/// The full stake ledger across all rounds of an event.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StakeLedger {
    num_results: usize,
    rounds: Vec<RoundLedger>,
}

impl StakeLedger {
    /// Create an empty ledger for an event with `num_results` outcome slots.
    pub fn new(num_results: usize) -> Self {
        Self {
            num_results,
            rounds: Vec::new(),
        }
    }

    /// Record `amount` staked by `participant` on `result_index` in `round`.
    ///
    /// Rounds are created lazily; recording into round k materializes rounds
    /// 0..=k.
    pub fn record(&mut self, round: u32, participant: &str, result_index: u8, amount: u64) {
        let num_results = self.num_results;
        let round = round as usize;
        while self.rounds.len() <= round {
            self.rounds.push(RoundLedger::new(num_results));
        }
        let entry = &mut self.rounds[round];
        entry.totals[result_index as usize] += amount;
        entry
            .stakes
            .entry(participant.to_string())
            .or_insert_with(|| vec![0; num_results])[result_index as usize] += amount;
    }

    /// Total staked on `result_index` in `round`.
    pub fn round_total(&self, round: u32, result_index: u8) -> u64 {
        self.rounds
            .get(round as usize)
            .map(|r| r.totals[result_index as usize])
            .unwrap_or(0)
    }

    /// A participant's stake on `result_index` in `round`.
    pub fn stake_of(&self, round: u32, participant: &str, result_index: u8) -> u64 {
        self.rounds
            .get(round as usize)
            .and_then(|r| r.stakes.get(participant))
            .map(|s| s[result_index as usize])
            .unwrap_or(0)
    }

    /// Total bet on `result_index` during the betting round.
    pub fn bet_total(&self, result_index: u8) -> u64 {
        self.round_total(0, result_index)
    }

    /// Total voted on `result_index` across every arbitration round.
    pub fn vote_total(&self, result_index: u8) -> u64 {
        self.rounds
            .iter()
            .skip(1)
            .map(|r| r.totals[result_index as usize])
            .sum()
    }

    /// A participant's betting-round stake per outcome slot.
    pub fn bet_balances(&self, participant: &str) -> Vec<u64> {
        match self.rounds.first().and_then(|r| r.stakes.get(participant)) {
            Some(stakes) => stakes.clone(),
            None => vec![0; self.num_results],
        }
    }

    /// A participant's arbitration stake per outcome slot, summed across rounds.
    pub fn vote_balances(&self, participant: &str) -> Vec<u64> {
        let mut balances = vec![0; self.num_results];
        for round in self.rounds.iter().skip(1) {
            if let Some(stakes) = round.stakes.get(participant) {
                for (balance, stake) in balances.iter_mut().zip(stakes) {
                    *balance += stake;
                }
            }
        }
        balances
    }

    /// A participant's total stake across every round and outcome.
    pub fn participant_total(&self, participant: &str) -> u64 {
        self.rounds
            .iter()
            .filter_map(|r| r.stakes.get(participant))
            .flatten()
            .sum()
    }

    /// Sum of every stake recorded in every round.
    pub fn grand_total(&self) -> u64 {
        self.rounds.iter().flat_map(|r| r.totals.iter()).sum()
    }

    /// Every participant that appears in any round.
    pub fn participants(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for round in &self.rounds {
            for participant in round.stakes.keys() {
                if !seen.iter().any(|p| p == participant) {
                    seen.push(participant.clone());
                }
            }
        }
        seen
    }

    /// Number of outcome slots this ledger was created with.
    pub fn num_results(&self) -> usize {
        self.num_results
    }
}
