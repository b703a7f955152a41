//! Capabilities the engine needs from a wallet / RPC connection.
//!
//! The split registry and forwarder factory are external contracts; this trait
//! only names the operations the workflows rely on. Implementations bind them
//! to a concrete ABI and transport.

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{errors::ChainError, state::Recipient};

/// Mined transaction summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub tx_hash: TxHash,
    pub block_number: u64,
    pub success: bool,
}

impl Receipt {
    /// Turns a reverted receipt into an error.
    pub fn ensure_success(self) -> Result<Self, ChainError> {
        if self.success {
            Ok(self)
        } else {
            Err(ChainError::Reverted(self.tx_hash))
        }
    }
}

/// How a tip reaches the recipients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMode {
    /// One deposit to the split registry, which pays out per the registered split
    #[default]
    Splitter,
    /// One value transfer per recipient, amounts computed locally
    Direct,
}

/// Wallet-backed access to the chain.
///
/// Each call is a single request/response. There is no retry, backoff or
/// timeout here; callers that want one wrap the implementation.
#[async_trait]
pub trait SplitChain: Send + Sync {
    /// Chain the wallet is currently connected to
    async fn chain_id(&self) -> Result<u64, ChainError>;

    /// Ask the wallet to switch to `chain_id`
    async fn switch_chain(&self, chain_id: u64) -> Result<(), ChainError>;

    /// Register `recipients` for the connected wallet, replacing any earlier split
    async fn register_split(&self, recipients: &[Recipient]) -> Result<TxHash, ChainError>;

    /// Deposit `value` for `owner`; the registry redistributes it per owner's split
    async fn tip(&self, owner: Address, value: U256) -> Result<TxHash, ChainError>;

    /// Plain value transfer
    async fn transfer(&self, to: Address, value: U256) -> Result<TxHash, ChainError>;

    /// Block until `tx_hash` is mined
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Receipt, ChainError>;

    /// Deterministic forwarder address for `owner` (read-only)
    async fn predict_forwarder(&self, owner: Address) -> Result<Address, ChainError>;

    /// Whether code exists at `address`
    async fn is_deployed(&self, address: Address) -> Result<bool, ChainError>;

    /// Deploy the forwarder for `owner`
    async fn deploy_forwarder(&self, owner: Address) -> Result<TxHash, ChainError>;
}

/// Switches the wallet to `expected` if it is elsewhere, then re-checks.
pub async fn ensure_chain<C: SplitChain + ?Sized>(
    chain: &C,
    expected: u64,
) -> Result<(), ChainError> {
    let actual = chain.chain_id().await?;
    if actual == expected {
        return Ok(());
    }

    tracing::debug!(expected, actual, "switching network");
    chain.switch_chain(expected).await?;

    let actual = chain.chain_id().await?;
    if actual != expected {
        return Err(ChainError::WrongNetwork { expected, actual });
    }
    Ok(())
}

/// Waits for `tx_hash` to be mined and requires a successful receipt.
pub async fn confirm<C: SplitChain + ?Sized>(
    chain: &C,
    tx_hash: TxHash,
) -> Result<Receipt, ChainError> {
    chain.wait_for_receipt(tx_hash).await?.ensure_success()
}
