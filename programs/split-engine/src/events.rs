use alloy_primitives::{Address, TxHash, U256};
use serde::Serialize;

use crate::chain::DistributionMode;

const EVENT_TARGET: &str = "split_engine::events";

/// Structured record of a completed workflow step.
pub trait Event: Serialize {
    const NAME: &'static str;
}

/// Logs `event` at info level under the `split_engine::events` target.
pub fn emit<E: Event>(event: &E) {
    match serde_json::to_string(event) {
        Ok(payload) => tracing::info!(target: EVENT_TARGET, event = E::NAME, %payload),
        Err(e) => {
            tracing::warn!(
                target: EVENT_TARGET,
                event = E::NAME,
                error = %e,
                "event not serializable"
            )
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitSaved {
    pub key: String,
    pub owner: Address,
    pub old_recipient_count: usize,
    pub new_recipient_count: usize,
    pub timestamp: u64,
}

impl Event for SplitSaved {
    const NAME: &'static str = "SplitSaved";
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitRegistered {
    pub owner: Address,
    pub chain_id: u64,
    pub recipient_count: usize,
    pub tx_hash: TxHash,
    pub block_number: u64,
    pub timestamp: u64,
}

impl Event for SplitRegistered {
    const NAME: &'static str = "SplitRegistered";
}

#[derive(Debug, Clone, Serialize)]
pub struct TipSent {
    pub owner: Address,
    pub chain_id: u64,
    pub mode: DistributionMode,
    pub total_amount: U256,
    pub transactions: Vec<TxHash>,
    pub timestamp: u64,
}

impl Event for TipSent {
    const NAME: &'static str = "TipSent";
}

#[derive(Debug, Clone, Serialize)]
pub struct ForwarderReady {
    pub owner: Address,
    pub forwarder: Address,
    pub deployed_now: bool,
    pub timestamp: u64,
}

impl Event for ForwarderReady {
    const NAME: &'static str = "ForwarderReady";
}
