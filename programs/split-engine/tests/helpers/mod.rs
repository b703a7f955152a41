//! Shared fixtures for split-engine integration tests
//!
//! Each test binary pulls in the whole module, so not every helper is used
//! everywhere.
#![allow(dead_code)]

pub mod chain;
pub mod fixtures;

pub use chain::*;
pub use fixtures::*;

use alloy_primitives::Address;
use split_engine::{EngineConfig, MemoryStore, Splitter};

/// Route `tracing` output through the test harness (RUST_LOG to see it)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Splitter over a fresh MemoryStore and MockChain already on `config.chain_id`
pub fn setup_splitter(config: EngineConfig, owner: Address) -> Splitter<MemoryStore, MockChain> {
    init_tracing();
    let chain = MockChain::new(config.chain_id);
    Splitter::new(config, MemoryStore::new(), chain, owner)
}
