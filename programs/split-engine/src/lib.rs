//! # split-engine
//!
//! Basis-point payment splitting for EVM chains (Base / Base Sepolia).
//!
//! The pure core in [`engine`] validates recipient rows, spreads 10000 bps
//! evenly, and divides a wei amount so the parts always add back up to the
//! whole. [`Splitter`] wires that core to a [`store::SplitStore`] for saved
//! splits and a [`chain::SplitChain`] for registration, tips and forwarders.

use alloy_primitives::{Address, U256};

pub mod chain;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod store;
pub mod utils;

pub use chain::{DistributionMode, Receipt, SplitChain};
pub use config::EngineConfig;
pub use engine::{
    allocate, configuration_key, even_split, even_split_with, parse_recipients, split_key, validate,
};
pub use errors::{ChainError, SplitError, StoreError, ValidationError};
pub use instructions::{ForwarderInfo, SplitContext, TipOutcome};
pub use state::{
    Allocation, KeyStrategy, Recipient, RecipientInput, RemainderPolicy, SplitConfiguration,
};
pub use store::{JsonFileStore, MemoryStore, SplitStore};

/// A connected wallet's view of its split.
///
/// Owns no mutable split state: rows being edited stay with the caller and
/// are passed in on each call.
pub struct Splitter<S, C> {
    config: EngineConfig,
    store: S,
    chain: C,
    owner: Address,
}

impl<S: SplitStore, C: SplitChain> Splitter<S, C> {
    pub fn new(config: EngineConfig, store: S, chain: C, owner: Address) -> Self {
        Self {
            config,
            store,
            chain,
            owner,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    fn context(&self) -> SplitContext<'_> {
        SplitContext {
            config: &self.config,
            store: &self.store,
            chain: &self.chain,
            owner: self.owner,
        }
    }

    /// Even bps for `count` rows under the configured remainder policy
    pub fn even_split(&self, count: usize) -> Vec<u16> {
        even_split_with(count, self.config.remainder_policy)
    }

    /// Validates and saves a split for the connected wallet
    /// Returns every validation problem at once on bad input
    pub fn save_split(&self, rows: &[RecipientInput]) -> Result<SplitConfiguration, SplitError> {
        instructions::save_split::handler(&self.context(), rows)
    }

    /// Loads the split saved by `owner`
    pub fn load_split(&self, owner: &Address) -> Option<SplitConfiguration> {
        instructions::load_split::handler(&self.context(), owner)
    }

    /// Loads the split stored under `key`, e.g. a configuration key
    pub fn load_split_by_key(&self, key: &str) -> Option<SplitConfiguration> {
        instructions::load_split::by_key(&self.context(), key)
    }

    /// Registers the wallet's split on-chain (saved split when `rows` is None)
    /// Switches network first if needed
    pub async fn register_split(
        &self,
        rows: Option<&[RecipientInput]>,
    ) -> Result<Receipt, SplitError> {
        instructions::register_split::handler(&self.context(), rows).await
    }

    /// Sends `amount` wei to `owner` using the configured distribution mode
    pub async fn send_tip(
        &self,
        owner: Address,
        amount: U256,
        rows: Option<&[RecipientInput]>,
    ) -> Result<TipOutcome, SplitError> {
        instructions::send_tip::handler(&self.context(), owner, amount, rows).await
    }

    /// Registers the wallet's split, then tips it once registration is confirmed
    pub async fn register_and_tip(
        &self,
        amount: U256,
        rows: Option<&[RecipientInput]>,
    ) -> Result<TipOutcome, SplitError> {
        instructions::register_and_tip::handler(&self.context(), amount, rows).await
    }

    /// Resolves (and deploys if missing) the wallet's forwarder
    pub async fn get_forwarder(&self) -> Result<ForwarderInfo, SplitError> {
        instructions::get_forwarder::handler(&self.context()).await
    }
}
