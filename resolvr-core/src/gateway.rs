//! Inbound transfer-callback dispatch.
//!
//! Every stake arrives through a single token-transfer callback carrying an
//! opaque byte payload: a 4-byte function selector followed by ABI-style
//! 32-byte-word arguments. The payload is decoded exactly once at this
//! boundary into a tagged [`EventAction`]; everything past this module
//! operates on the variant, never on raw bytes.
//!
//! The set-result and vote payloads embed the target event address and the
//! staking principal, which are cross-checked against the event itself and the
//! transfer sender to reject spoofed payloads.

use crate::{
    error::{EventError, Result},
    event::MultipleResultsEvent,
};

/// Selector for `bet(uint8)`
pub const BET_SELECTOR: [u8; 4] = [0x88, 0x5a, 0xb6, 0x6d];

/// Selector for `setResult(address,address,uint8)`
pub const SET_RESULT_SELECTOR: [u8; 4] = [0xa6, 0xb4, 0x21, 0x8b];

/// Selector for `vote(address,address,uint8)`
pub const VOTE_SELECTOR: [u8; 4] = [0x6f, 0x02, 0xd1, 0xfb];

/// Byte length of a bet payload: selector + one uint word
const BET_PAYLOAD_LEN: usize = 4 + 32;

/// Byte length of a set-result/vote payload: selector + two raw 20-byte
/// addresses + one uint word
const ADDRESSED_PAYLOAD_LEN: usize = 4 + 20 + 20 + 32;

/// An inbound action decoded from a transfer-callback payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventAction {
    /// Bet on an outcome during the betting round
    Bet { result_index: u8 },

    /// Propose the result, opening arbitration
    SetResult {
        event_address: String,
        sender: String,
        result_index: u8,
    },

    /// Vote against the current result during an arbitration round
    Vote {
        event_address: String,
        sender: String,
        result_index: u8,
    },
}

/// Value movements produced by a handled transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransferOutcome {
    /// Portion of the transferred amount retained by the event
    pub accepted: u64,

    /// Portion to send back to the caller in the same transaction
    pub refund: u64,
}

/// Decode a transfer-callback payload into an [`EventAction`].
pub fn decode_action(data: &[u8]) -> Result<EventAction> {
    if data.len() < 4 {
        return Err(EventError::Payload("Data is not long enough".to_string()));
    }

    let selector = [data[0], data[1], data[2], data[3]];
    match selector {
        BET_SELECTOR => {
            if data.len() < BET_PAYLOAD_LEN {
                return Err(EventError::Payload("Data is not long enough".to_string()));
            }
            let result_index = decode_uint8_word(&data[4..36])?;
            Ok(EventAction::Bet { result_index })
        }
        SET_RESULT_SELECTOR | VOTE_SELECTOR => {
            if data.len() != ADDRESSED_PAYLOAD_LEN {
                return Err(EventError::Payload(
                    "Data length should be 76 bytes".to_string(),
                ));
            }
            let event_address = encode_address(&data[4..24]);
            let sender = encode_address(&data[24..44]);
            let result_index = decode_uint8_word(&data[44..76])?;
            if selector == SET_RESULT_SELECTOR {
                Ok(EventAction::SetResult {
                    event_address,
                    sender,
                    result_index,
                })
            } else {
                Ok(EventAction::Vote {
                    event_address,
                    sender,
                    result_index,
                })
            }
        }
        _ => Err(EventError::Payload(
            "Unhandled function in tokenFallback".to_string(),
        )),
    }
}

/// Handle an inbound token transfer addressed to `event`.
///
/// Decodes the payload, runs the anti-spoofing cross-checks and applies the
/// action atomically at clock time `now`. On success the returned outcome
/// tells the external ledger how much was retained and how much to refund.
pub fn handle_transfer(
    event: &mut MultipleResultsEvent,
    from: &str,
    amount: u64,
    data: &[u8],
    now: u64,
) -> Result<TransferOutcome> {
    match decode_action(data)? {
        EventAction::Bet { result_index } => {
            event.bet(from, result_index, amount, now)?;
            Ok(TransferOutcome {
                accepted: amount,
                refund: 0,
            })
        }
        EventAction::SetResult {
            event_address,
            sender,
            result_index,
        } => {
            check_addressing(event, from, &event_address, &sender)?;
            event.set_result(from, result_index, amount, now)?;
            Ok(TransferOutcome {
                accepted: amount,
                refund: 0,
            })
        }
        EventAction::Vote {
            event_address,
            sender,
            result_index,
        } => {
            check_addressing(event, from, &event_address, &sender)?;
            let outcome = event.vote(from, result_index, amount, now)?;
            Ok(TransferOutcome {
                accepted: outcome.accepted,
                refund: outcome.refund,
            })
        }
    }
}

fn check_addressing(
    event: &MultipleResultsEvent,
    from: &str,
    event_address: &str,
    sender: &str,
) -> Result<()> {
    if !event_address.eq_ignore_ascii_case(&event.address) {
        return Err(EventError::Payload(
            "Event address does not match".to_string(),
        ));
    }
    if !sender.eq_ignore_ascii_case(from) {
        return Err(EventError::Payload(
            "Sender does not match the token transfer sender".to_string(),
        ));
    }
    Ok(())
}

/// Decode a uint8 from a 32-byte big-endian word.
fn decode_uint8_word(word: &[u8]) -> Result<u8> {
    debug_assert_eq!(word.len(), 32);
    if word[..31].iter().any(|&b| b != 0) {
        return Err(EventError::Payload(
            "resultIndex word out of range".to_string(),
        ));
    }
    Ok(word[31])
}

fn encode_address(raw: &[u8]) -> String {
    format!("0x{}", hex::encode(raw))
}

fn decode_address(address: &str) -> Result<[u8; 20]> {
    let stripped = address.strip_prefix("0x").unwrap_or(address);
    let bytes = hex::decode(stripped)?;
    bytes
        .try_into()
        .map_err(|_| EventError::Payload("Address should be 20 bytes".to_string()))
}

/// Encode a bet payload for `result_index`.
pub fn encode_bet(result_index: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(BET_PAYLOAD_LEN);
    data.extend_from_slice(&BET_SELECTOR);
    data.extend_from_slice(&uint8_word(result_index));
    data
}

/// Encode a set-result payload.
pub fn encode_set_result(event_address: &str, sender: &str, result_index: u8) -> Result<Vec<u8>> {
    encode_addressed(SET_RESULT_SELECTOR, event_address, sender, result_index)
}

/// Encode a vote payload.
pub fn encode_vote(event_address: &str, sender: &str, result_index: u8) -> Result<Vec<u8>> {
    encode_addressed(VOTE_SELECTOR, event_address, sender, result_index)
}

fn encode_addressed(
    selector: [u8; 4],
    event_address: &str,
    sender: &str,
    result_index: u8,
) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(ADDRESSED_PAYLOAD_LEN);
    data.extend_from_slice(&selector);
    data.extend_from_slice(&decode_address(event_address)?);
    data.extend_from_slice(&decode_address(sender)?);
    data.extend_from_slice(&uint8_word(result_index));
    Ok(data)
}

fn uint8_word(value: u8) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[31] = value;
    word
}
