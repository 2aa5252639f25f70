//! Multi-event host with per-event serialization.
//!
//! Each event's state sits behind its own exclusive lock, so every
//! state-changing call on one event is atomic and total-order serialized
//! against every other call on that event, while calls to different events run
//! in parallel. There is no internal concurrency inside a call and no partial
//! application: a call either fully commits or leaves the event untouched.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use anyhow::{anyhow, bail, Context, Result};

use crate::{
    event::{EventParams, MultipleResultsEvent, Withdrawal},
    gateway::{self, TransferOutcome},
    EventConfig,
};

/// An in-memory registry of events, keyed by event address.
#[derive(Default)]
pub struct EventStore {
    events: RwLock<HashMap<String, Arc<Mutex<MultipleResultsEvent>>>>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new event funded by `escrow` tokens from `owner`.
    ///
    /// The escrow transfer must match the configured escrow amount exactly.
    /// Returns the new event's address.
    pub fn create_event(
        &self,
        owner: &str,
        params: EventParams,
        config: EventConfig,
        escrow: u64,
    ) -> Result<String> {
        if escrow != config.escrow_amount {
            bail!(
                "Escrow amount should be {} but {} was transferred",
                config.escrow_amount,
                escrow
            );
        }

        let event = MultipleResultsEvent::new(owner, params, config)
            .context("Failed to create event")?;
        let address = event.address.clone();

        let mut events = self
            .events
            .write()
            .map_err(|_| anyhow!("event registry lock poisoned"))?;
        if events.contains_key(&address) {
            bail!("Event {address} already exists");
        }
        events.insert(address.clone(), Arc::new(Mutex::new(event)));
        Ok(address)
    }

    /// Route an inbound token transfer to the addressed event.
    pub fn on_token_received(
        &self,
        event_address: &str,
        from: &str,
        amount: u64,
        data: &[u8],
        now: u64,
    ) -> Result<TransferOutcome> {
        let event = self.get(event_address)?;
        let mut event = event
            .lock()
            .map_err(|_| anyhow!("event lock poisoned: {event_address}"))?;
        let outcome = gateway::handle_transfer(&mut event, from, amount, data, now)
            .with_context(|| format!("Transfer to event {event_address} rejected"))?;
        Ok(outcome)
    }

    /// Withdraw `caller`'s winnings from the addressed event.
    pub fn withdraw(&self, event_address: &str, caller: &str, now: u64) -> Result<Withdrawal> {
        let event = self.get(event_address)?;
        let mut event = event
            .lock()
            .map_err(|_| anyhow!("event lock poisoned: {event_address}"))?;
        let withdrawal = event
            .withdraw(caller, now)
            .with_context(|| format!("Withdrawal from event {event_address} rejected"))?;
        Ok(withdrawal)
    }

    /// Run a read-only query against the addressed event.
    pub fn query<T>(
        &self,
        event_address: &str,
        f: impl FnOnce(&MultipleResultsEvent) -> T,
    ) -> Result<T> {
        let event = self.get(event_address)?;
        let event = event
            .lock()
            .map_err(|_| anyhow!("event lock poisoned: {event_address}"))?;
        Ok(f(&event))
    }

    /// Addresses of every registered event.
    pub fn addresses(&self) -> Vec<String> {
        self.events
            .read()
            .map(|events| events.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn get(&self, event_address: &str) -> Result<Arc<Mutex<MultipleResultsEvent>>> {
        let events = self
            .events
            .read()
            .map_err(|_| anyhow!("event registry lock poisoned"))?;
        events
            .get(event_address)
            .cloned()
            .ok_or_else(|| anyhow!("Event {event_address} does not exist"))
    }
}
