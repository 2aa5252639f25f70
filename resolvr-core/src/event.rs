//! # Multiple-results event implementation
//!
//! This module implements the round-based resolution state machine at the heart
//! of the library: the betting round (round 0), the result proposal that opens
//! arbitration (round 1), the escalating challenge rounds, and the implicit
//! finalization once a round's deadline passes unchallenged.

use crate::{
    error::{EventError, Result},
    ledger::StakeLedger,
    payout::{self, Winnings},
    threshold::next_threshold,
    utils::{generate_event_address, is_valid_principal},
    EventConfig, INVALID_RESULT_INDEX, RESULT_INVALID,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Creation parameters for a multiple-results event.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EventParams {
    /// Event name/question
    pub name: String,

    /// Creator-supplied outcome labels; the reserved "Invalid" slot is
    /// prepended automatically
    pub results: Vec<String>,

    /// Start of the betting window (Unix timestamp)
    pub bet_start_time: u64,

    /// End of the betting window
    pub bet_end_time: u64,

    /// Start of the result-setting window
    pub result_set_start_time: u64,

    /// End of the reporter-exclusive result-setting window
    pub result_set_end_time: u64,

    /// The designated reporter allowed to set the result before
    /// `result_set_end_time`
    pub centralized_oracle: String,
}

/// A multiple-results prediction market event.
///
/// Participants bet on one of the outcome slots during the betting round, the
/// centralized oracle proposes a result by staking the consensus threshold,
/// and challengers escalate through arbitration rounds by staking against the
/// current result. A round that expires without a successful challenge makes
/// the current result final; finality is derived from the clock, never stored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MultipleResultsEvent {
    /// Unique event address (20-byte hex)
    pub address: String,

    /// Event creator; posted the escrow and receives it back on withdrawal
    pub owner: String,

    /// Event name/question
    pub name: String,

    /// Outcome labels, slot 0 reserved for "Invalid"
    pub results: Vec<String>,

    /// The designated reporter
    pub centralized_oracle: String,

    /// Start of the betting window
    pub bet_start_time: u64,

    /// End of the betting window
    pub bet_end_time: u64,

    /// Start of the result-setting window
    pub result_set_start_time: u64,

    /// End of the reporter-exclusive result-setting window
    pub result_set_end_time: u64,

    /// Configuration injected at creation
    pub config: EventConfig,

    /// Current round: 0 is the betting round, k >= 1 are arbitration rounds
    pub current_round: u32,

    /// Currently proposed result slot, `INVALID_RESULT_INDEX` while unset
    pub current_result_index: u8,

    /// Stake required to flip the current result
    pub current_consensus_threshold: u64,

    /// Deadline of the current arbitration round; 0 until a result is proposed
    pub current_arbitration_end_time: u64,

    /// Per-round, per-participant, per-outcome stakes
    pub ledger: StakeLedger,

    /// Total stake accepted during the betting round
    pub total_bets: u64,

    /// Total stake accepted during arbitration rounds
    pub total_arbitration: u64,

    /// Participants that have already withdrawn
    did_withdraw: HashSet<String>,
}

/// The result of an accepted arbitration vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    /// Portion of the transferred amount retained by the event
    pub accepted: u64,

    /// Portion refunded to the caller in the same call
    pub refund: u64,

    /// Whether the vote reached the threshold and advanced the round
    pub round_advanced: bool,
}

/// The settlement produced by a successful withdrawal.
///
/// The caller environment is responsible for moving `winnings.total()` plus
/// `escrow_refund` back to the participant on the external token ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    /// Computed winnings, split into betting and arbitration components
    pub winnings: Winnings,

    /// Escrow returned on top, non-zero only for the event owner
    pub escrow_refund: u64,
}

impl MultipleResultsEvent {
    /// Create a new event.
    ///
    /// Validates all construction invariants: non-empty name, non-empty first
    /// two outcome labels, a usable oracle principal, and a monotonic
    /// schedule. The reserved "Invalid" slot is prepended to the supplied
    /// outcome labels.
    pub fn new(owner: &str, params: EventParams, config: EventConfig) -> Result<Self> {
        if !is_valid_principal(owner) {
            return Err(EventError::InvalidEvent(
                "owner address is invalid".to_string(),
            ));
        }
        if !is_valid_principal(&params.centralized_oracle) {
            return Err(EventError::InvalidEvent(
                "centralizedOracle address is invalid".to_string(),
            ));
        }
        if params.name.is_empty() {
            return Err(EventError::InvalidEvent(
                "Event name cannot be empty".to_string(),
            ));
        }
        if params.results.first().map_or(true, |r| r.is_empty()) {
            return Err(EventError::InvalidEvent(
                "First event result cannot be empty".to_string(),
            ));
        }
        if params.results.get(1).map_or(true, |r| r.is_empty()) {
            return Err(EventError::InvalidEvent(
                "Second event result cannot be empty".to_string(),
            ));
        }
        if params.bet_end_time <= params.bet_start_time {
            return Err(EventError::InvalidEvent(
                "betEndTime should be > betStartTime".to_string(),
            ));
        }
        if params.result_set_start_time < params.bet_end_time {
            return Err(EventError::InvalidEvent(
                "resultSetStartTime should be >= betEndTime".to_string(),
            ));
        }
        if params.result_set_end_time <= params.result_set_start_time {
            return Err(EventError::InvalidEvent(
                "resultSetEndTime should be > resultSetStartTime".to_string(),
            ));
        }

        let mut results = Vec::with_capacity(params.results.len() + 1);
        results.push(RESULT_INVALID.to_string());
        results.extend(params.results);

        let address = generate_event_address(owner, &params.name);
        let num_results = results.len();

        Ok(Self {
            address,
            owner: owner.to_string(),
            name: params.name,
            results,
            centralized_oracle: params.centralized_oracle,
            bet_start_time: params.bet_start_time,
            bet_end_time: params.bet_end_time,
            result_set_start_time: params.result_set_start_time,
            result_set_end_time: params.result_set_end_time,
            current_consensus_threshold: config.starting_threshold,
            config,
            current_round: 0,
            current_result_index: INVALID_RESULT_INDEX,
            current_arbitration_end_time: 0,
            ledger: StakeLedger::new(num_results),
            total_bets: 0,
            total_arbitration: 0,
            did_withdraw: HashSet::new(),
        })
    }

    /// Place a bet on `result_index`.
    ///
    /// Valid only during round 0 within the betting window. The full amount is
    /// always retained; betting has no threshold.
    pub fn bet(&mut self, caller: &str, result_index: u8, amount: u64, now: u64) -> Result<()> {
        if self.current_round != 0 {
            return Err(EventError::InvalidBet(
                "Can only bet during the betting round".to_string(),
            ));
        }
        if now < self.bet_start_time {
            return Err(EventError::InvalidBet(
                "Current time should be >= betStartTime".to_string(),
            ));
        }
        if now >= self.bet_end_time {
            return Err(EventError::InvalidBet(
                "Current time should be < betEndTime.".to_string(),
            ));
        }
        if !self.is_valid_result_index(result_index) {
            return Err(EventError::InvalidBet("resultIndex is not valid".to_string()));
        }
        if amount == 0 {
            return Err(EventError::InvalidBet(
                "Bet amount should be > 0".to_string(),
            ));
        }

        self.ledger.record(0, caller, result_index, amount);
        self.total_bets += amount;
        Ok(())
    }

    /// Whether `caller` may set the result at time `now`.
    ///
    /// Before `result_set_end_time` only the centralized oracle may report;
    /// once that deadline passes, anyone may move the event forward.
    pub fn can_set_result(&self, caller: &str, now: u64) -> bool {
        now >= self.result_set_start_time
            && (caller == self.centralized_oracle || now >= self.result_set_end_time)
    }

    /// Propose the result, transitioning round 0 -> round 1.
    ///
    /// The staked amount must equal the consensus threshold exactly; unlike
    /// later rounds there is no partial accept and no refund.
    pub fn set_result(
        &mut self,
        caller: &str,
        result_index: u8,
        amount: u64,
        now: u64,
    ) -> Result<()> {
        if self.current_round != 0 {
            return Err(EventError::InvalidResultSet(
                "Result has already been set".to_string(),
            ));
        }
        if now < self.result_set_start_time {
            return Err(EventError::InvalidResultSet(
                "Current time should be >= resultSetStartTime".to_string(),
            ));
        }
        if !self.can_set_result(caller, now) {
            return Err(EventError::InvalidResultSet(
                "Only the Centralized Oracle can set the result".to_string(),
            ));
        }
        if !self.is_valid_result_index(result_index) {
            return Err(EventError::InvalidResultSet(
                "resultIndex is not valid".to_string(),
            ));
        }
        if amount != self.current_consensus_threshold {
            return Err(EventError::InvalidResultSet(
                "Amount should be equal to the consensus threshold".to_string(),
            ));
        }

        self.ledger.record(1, caller, result_index, amount);
        self.total_arbitration += amount;
        self.current_round = 1;
        self.current_result_index = result_index;
        // The starting threshold carries into round 1 unchanged; the growth
        // formula only applies from round transitions onwards.
        self.current_consensus_threshold = self.config.starting_threshold;
        self.current_arbitration_end_time = now + self.config.arbitration_length;
        Ok(())
    }

    /// Vote against the current result during an arbitration round.
    ///
    /// Stake accumulates on `result_index` for the current round. When the
    /// cumulative stake reaches the consensus threshold, only the portion
    /// needed to exactly reach it is retained, the excess is refunded, and the
    /// round advances with `result_index` as the new current result.
    pub fn vote(
        &mut self,
        caller: &str,
        result_index: u8,
        amount: u64,
        now: u64,
    ) -> Result<VoteOutcome> {
        if self.current_round == 0 {
            return Err(EventError::InvalidVote(
                "Can only vote during arbitration rounds".to_string(),
            ));
        }
        if now >= self.current_arbitration_end_time {
            return Err(EventError::InvalidVote(
                "Current time should be < arbitrationEndTime".to_string(),
            ));
        }
        if !self.is_valid_result_index(result_index) {
            return Err(EventError::InvalidVote(
                "resultIndex is not valid".to_string(),
            ));
        }
        if result_index == self.current_result_index {
            return Err(EventError::InvalidVote(
                "Cannot vote on the last result index".to_string(),
            ));
        }
        if amount == 0 {
            return Err(EventError::InvalidVote(
                "Vote amount should be > 0".to_string(),
            ));
        }

        let staked = self.ledger.round_total(self.current_round, result_index);
        let threshold = self.current_consensus_threshold;

        if staked + amount >= threshold {
            // Retain exactly what is needed to reach the threshold and flip.
            let accepted = threshold - staked;
            let refund = amount - accepted;
            self.ledger
                .record(self.current_round, caller, result_index, accepted);
            self.total_arbitration += accepted;

            self.current_result_index = result_index;
            self.current_round += 1;
            self.current_consensus_threshold =
                next_threshold(threshold, self.config.threshold_percent_increase);
            self.current_arbitration_end_time = now + self.config.arbitration_length;

            Ok(VoteOutcome {
                accepted,
                refund,
                round_advanced: true,
            })
        } else {
            self.ledger
                .record(self.current_round, caller, result_index, amount);
            self.total_arbitration += amount;
            Ok(VoteOutcome {
                accepted: amount,
                refund: 0,
                round_advanced: false,
            })
        }
    }

    /// Withdraw winnings once the event is finalized.
    ///
    /// Succeeds at most once per participant. The owner's withdrawal also
    /// carries the creation escrow back.
    pub fn withdraw(&mut self, caller: &str, now: u64) -> Result<Withdrawal> {
        if !self.is_finalized(now) {
            return Err(EventError::Withdrawal(
                "Can only withdraw after the event is finalized".to_string(),
            ));
        }
        if self.did_withdraw.contains(caller) {
            return Err(EventError::Withdrawal("Already withdrawn".to_string()));
        }

        let winnings = payout::calculate_winnings(self, caller);
        self.did_withdraw.insert(caller.to_string());

        let escrow_refund = if caller == self.owner {
            self.config.escrow_amount
        } else {
            0
        };

        Ok(Withdrawal {
            winnings,
            escrow_refund,
        })
    }

    /// Whether the event is finalized at time `now`.
    ///
    /// Derived from the clock on every read: a result has been proposed and
    /// the current arbitration round's deadline passed without a successful
    /// challenge.
    pub fn is_finalized(&self, now: u64) -> bool {
        self.current_round >= 1 && now >= self.current_arbitration_end_time
    }

    /// Whether `result_index` refers to an existing outcome slot.
    pub fn is_valid_result_index(&self, result_index: u8) -> bool {
        (result_index as usize) < self.results.len()
    }

    /// Number of outcome slots, including the reserved "Invalid" slot.
    pub fn num_results(&self) -> u8 {
        self.results.len() as u8
    }

    /// Total stake accumulated across all rounds.
    pub fn total_stake(&self) -> u64 {
        self.total_bets + self.total_arbitration
    }

    /// Whether `participant` has already withdrawn.
    pub fn did_withdraw(&self, participant: &str) -> bool {
        self.did_withdraw.contains(participant)
    }

    /// A participant's computed winnings. Zero before any result is proposed.
    pub fn calculate_winnings(&self, participant: &str) -> Winnings {
        payout::calculate_winnings(self, participant)
    }

    /// Event metadata: name, outcome labels and slot count.
    pub fn event_metadata(&self) -> (String, Vec<String>, u8) {
        (self.name.clone(), self.results.clone(), self.num_results())
    }

    /// Reporter and schedule metadata.
    pub fn centralized_metadata(&self) -> (String, u64, u64, u64, u64) {
        (
            self.centralized_oracle.clone(),
            self.bet_start_time,
            self.bet_end_time,
            self.result_set_start_time,
            self.result_set_end_time,
        )
    }

    /// Config metadata: escrow, arbitration length, threshold growth percent
    /// and arbitration reward percent.
    pub fn config_metadata(&self) -> (u64, u64, u64, u64) {
        (
            self.config.escrow_amount,
            self.config.arbitration_length,
            self.config.threshold_percent_increase,
            self.config.arbitration_reward_percent,
        )
    }

    /// Event status summary
    pub fn status(&self, now: u64) -> String {
        if self.is_finalized(now) {
            format!(
                "Finalized - {} won",
                self.results[self.current_result_index as usize]
            )
        } else if self.current_round >= 1 {
            format!("Arbitration round {}", self.current_round)
        } else if now >= self.result_set_start_time {
            "Awaiting result".to_string()
        } else if now >= self.bet_start_time && now < self.bet_end_time {
            "Betting open".to_string()
        } else {
            "Pending".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn reason(err: EventError) -> String {
        err.reason()
    }

    #[test]
    fn test_new_initializes_all_values() {
        let event = create_test_event();
        assert_eq!(event.owner, OWNER);
        assert_eq!(event.name, "Test Event 1");
        assert_eq!(event.results, vec!["Invalid", "A", "B", "C"]);
        assert_eq!(event.num_results(), 4);
        assert_eq!(event.current_round, 0);
        assert_eq!(event.current_result_index, INVALID_RESULT_INDEX);
        assert_eq!(event.current_consensus_threshold, 100);
        assert_eq!(event.current_arbitration_end_time, 0);
        assert_eq!(event.total_stake(), 0);
        assert!(event.address.starts_with("0x"));
    }

    #[test]
    fn test_new_rejects_bad_params() {
        let config = test_config();

        let mut params = test_params();
        params.name = String::new();
        let err = MultipleResultsEvent::new(OWNER, params, config.clone()).unwrap_err();
        assert_eq!(reason(err), "Event name cannot be empty");

        let mut params = test_params();
        params.results[0] = String::new();
        let err = MultipleResultsEvent::new(OWNER, params, config.clone()).unwrap_err();
        assert_eq!(reason(err), "First event result cannot be empty");

        let mut params = test_params();
        params.results[1] = String::new();
        let err = MultipleResultsEvent::new(OWNER, params, config.clone()).unwrap_err();
        assert_eq!(reason(err), "Second event result cannot be empty");

        let mut params = test_params();
        params.centralized_oracle = "0x0000000000000000000000000000000000000000".to_string();
        let err = MultipleResultsEvent::new(OWNER, params, config.clone()).unwrap_err();
        assert_eq!(reason(err), "centralizedOracle address is invalid");

        let mut params = test_params();
        params.bet_end_time = params.bet_start_time;
        let err = MultipleResultsEvent::new(OWNER, params, config.clone()).unwrap_err();
        assert_eq!(reason(err), "betEndTime should be > betStartTime");

        let mut params = test_params();
        params.result_set_start_time = params.bet_end_time - 1;
        let err = MultipleResultsEvent::new(OWNER, params, config.clone()).unwrap_err();
        assert_eq!(reason(err), "resultSetStartTime should be >= betEndTime");

        let mut params = test_params();
        params.result_set_end_time = params.result_set_start_time;
        let err = MultipleResultsEvent::new(OWNER, params, config).unwrap_err();
        assert_eq!(reason(err), "resultSetEndTime should be > resultSetStartTime");
    }

    #[test]
    fn test_bet_accumulates_totals() {
        let mut event = create_test_event();
        event.bet(ACCT1, 0, 10, BET_START).unwrap();
        event.bet(ACCT2, 1, 15, BET_START + 1).unwrap();
        event.bet(ACCT1, 0, 5, BET_START + 2).unwrap();

        assert_eq!(event.total_bets, 30);
        assert_eq!(event.ledger.bet_balances(ACCT1), vec![15, 0, 0, 0]);
        assert_eq!(event.ledger.bet_total(0), 15);
        assert_eq!(event.current_round, 0);
    }

    #[test]
    fn test_bet_outside_window() {
        let mut event = create_test_event();

        let err = event.bet(ACCT1, 0, 10, BET_START - 1).unwrap_err();
        assert_eq!(reason(err), "Current time should be >= betStartTime");

        let err = event.bet(ACCT1, 0, 10, BET_END).unwrap_err();
        assert_eq!(reason(err), "Current time should be < betEndTime.");
    }

    #[test]
    fn test_bet_invalid_index_and_zero_amount() {
        let mut event = create_test_event();

        let err = event.bet(ACCT1, 4, 10, BET_START).unwrap_err();
        assert_eq!(reason(err), "resultIndex is not valid");

        let err = event.bet(ACCT1, 0, 0, BET_START).unwrap_err();
        assert_eq!(reason(err), "Bet amount should be > 0");
    }

    #[test]
    fn test_bet_rejected_after_round_zero() {
        let mut event = create_test_event();
        event
            .set_result(OWNER, 1, event.current_consensus_threshold, RESULT_SET_START)
            .unwrap();

        let err = event.bet(ACCT1, 2, 10, RESULT_SET_START + 1).unwrap_err();
        assert_eq!(reason(err), "Can only bet during the betting round");
    }

    #[test]
    fn test_set_result_requires_exact_threshold() {
        let mut event = create_test_event();

        let err = event.set_result(OWNER, 1, 99, RESULT_SET_START).unwrap_err();
        assert_eq!(reason(err), "Amount should be equal to the consensus threshold");

        let err = event.set_result(OWNER, 1, 101, RESULT_SET_START).unwrap_err();
        assert_eq!(reason(err), "Amount should be equal to the consensus threshold");

        event.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();
        assert_eq!(event.current_round, 1);
        assert_eq!(event.current_result_index, 1);
        assert_eq!(event.current_consensus_threshold, 100);
        assert_eq!(
            event.current_arbitration_end_time,
            RESULT_SET_START + event.config.arbitration_length
        );
        assert_eq!(event.ledger.stake_of(1, OWNER, 1), 100);
        assert_eq!(event.total_arbitration, 100);
    }

    #[test]
    fn test_set_result_oracle_only_before_deadline() {
        let mut event = create_test_event();

        let err = event.set_result(ACCT1, 1, 100, RESULT_SET_START).unwrap_err();
        assert_eq!(reason(err), "Only the Centralized Oracle can set the result");

        // After resultSetEndTime anyone can move the event forward
        let mut open_event = create_test_event();
        open_event.set_result(ACCT1, 2, 100, RESULT_SET_END).unwrap();
        assert_eq!(open_event.current_result_index, 2);
    }

    #[test]
    fn test_set_result_before_window() {
        let mut event = create_test_event();
        let err = event.set_result(OWNER, 1, 100, RESULT_SET_START - 1).unwrap_err();
        assert_eq!(reason(err), "Current time should be >= resultSetStartTime");
    }

    #[test]
    fn test_set_result_only_once() {
        let mut event = create_test_event();
        event.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();
        let err = event.set_result(OWNER, 2, 100, RESULT_SET_START + 1).unwrap_err();
        assert_eq!(reason(err), "Result has already been set");
    }

    #[test]
    fn test_vote_below_threshold_accumulates() {
        let mut event = create_test_event();
        event.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();

        let outcome = event.vote(ACCT1, 2, 60, RESULT_SET_START + 10).unwrap();
        assert_eq!(outcome.accepted, 60);
        assert_eq!(outcome.refund, 0);
        assert!(!outcome.round_advanced);
        assert_eq!(event.current_round, 1);
        assert_eq!(event.current_result_index, 1);
        assert_eq!(event.ledger.stake_of(1, ACCT1, 2), 60);
    }

    #[test]
    fn test_vote_reaching_threshold_flips_and_refunds_excess() {
        let mut event = create_test_event();
        event.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();

        event.vote(ACCT1, 2, 60, RESULT_SET_START + 10).unwrap();
        let outcome = event.vote(ACCT2, 2, 55, RESULT_SET_START + 20).unwrap();

        // 60 staked, threshold 100: exactly 40 retained, 15 refunded
        assert_eq!(outcome.accepted, 40);
        assert_eq!(outcome.refund, 15);
        assert!(outcome.round_advanced);

        assert_eq!(event.current_round, 2);
        assert_eq!(event.current_result_index, 2);
        assert_eq!(event.current_consensus_threshold, 110);
        assert_eq!(
            event.current_arbitration_end_time,
            RESULT_SET_START + 20 + event.config.arbitration_length
        );
        // The round total equals the threshold exactly, not threshold + excess
        assert_eq!(event.ledger.round_total(1, 2), 100);
        assert_eq!(event.total_arbitration, 200);
    }

    #[test]
    fn test_vote_preconditions() {
        let mut event = create_test_event();

        let err = event.vote(ACCT1, 2, 10, RESULT_SET_START).unwrap_err();
        assert_eq!(reason(err), "Can only vote during arbitration rounds");

        event.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();

        let err = event.vote(ACCT1, 1, 10, RESULT_SET_START + 1).unwrap_err();
        assert_eq!(reason(err), "Cannot vote on the last result index");

        let err = event.vote(ACCT1, 4, 10, RESULT_SET_START + 1).unwrap_err();
        assert_eq!(reason(err), "resultIndex is not valid");

        let err = event.vote(ACCT1, 2, 0, RESULT_SET_START + 1).unwrap_err();
        assert_eq!(reason(err), "Vote amount should be > 0");

        let deadline = event.current_arbitration_end_time;
        let err = event.vote(ACCT1, 2, 10, deadline).unwrap_err();
        assert_eq!(reason(err), "Current time should be < arbitrationEndTime");
    }

    #[test]
    fn test_finalization_is_derived_from_clock() {
        let mut event = create_test_event();
        assert!(!event.is_finalized(RESULT_SET_END + 1_000_000));

        event.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();
        let deadline = event.current_arbitration_end_time;
        assert!(!event.is_finalized(deadline - 1));
        assert!(event.is_finalized(deadline));
    }

    #[test]
    fn test_withdraw_at_most_once() {
        let mut event = create_test_event();
        event.bet(ACCT1, 1, 50, BET_START).unwrap();
        event.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();
        let after_deadline = event.current_arbitration_end_time;

        assert!(!event.did_withdraw(ACCT1));
        event.withdraw(ACCT1, after_deadline).unwrap();
        assert!(event.did_withdraw(ACCT1));

        let err = event.withdraw(ACCT1, after_deadline).unwrap_err();
        assert_eq!(reason(err), "Already withdrawn");
    }

    #[test]
    fn test_withdraw_requires_finalization() {
        let mut event = create_test_event();
        let err = event.withdraw(ACCT1, RESULT_SET_END + 1).unwrap_err();
        assert_eq!(reason(err), "Can only withdraw after the event is finalized");

        event.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();
        let err = event
            .withdraw(ACCT1, event.current_arbitration_end_time - 1)
            .unwrap_err();
        assert_eq!(reason(err), "Can only withdraw after the event is finalized");
    }

    #[test]
    fn test_owner_withdrawal_includes_escrow() {
        let mut event = create_test_event();
        event.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();
        let now = event.current_arbitration_end_time;

        let withdrawal = event.withdraw(OWNER, now).unwrap();
        assert_eq!(withdrawal.escrow_refund, event.config.escrow_amount);

        let mut event2 = create_test_event();
        event2.bet(ACCT1, 1, 50, BET_START).unwrap();
        event2.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();
        let withdrawal = event2.withdraw(ACCT1, event2.current_arbitration_end_time).unwrap();
        assert_eq!(withdrawal.escrow_refund, 0);
    }

    #[test]
    fn test_status_strings() {
        let mut event = create_test_event();
        assert_eq!(event.status(BET_START - 1), "Pending");
        assert_eq!(event.status(BET_START), "Betting open");
        assert_eq!(event.status(RESULT_SET_START), "Awaiting result");

        event.set_result(OWNER, 1, 100, RESULT_SET_START).unwrap();
        assert_eq!(event.status(RESULT_SET_START + 1), "Arbitration round 1");
        assert_eq!(
            event.status(event.current_arbitration_end_time),
            "Finalized - A won"
        );
    }
}
