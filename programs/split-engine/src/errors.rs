use alloy_primitives::{Address, TxHash};
use thiserror::Error;

/// Input problems found by `engine::validate`.
///
/// These are reported, never raised: a caller gets every category that
/// applies so a form can show all of them at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Add at least one recipient")]
    EmptyList,

    #[error("Please enter valid EVM addresses (rows {indices:?})")]
    InvalidAddress { indices: Vec<usize> },

    #[error("Please fill all bps with positive values (rows {indices:?})")]
    NonPositiveShare { indices: Vec<usize> },

    #[error("Total bps must equal 10000 (got {total})")]
    ShareSumMismatch { total: i128 },
}

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Split configuration is invalid: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    #[error("No saved split for key {0}")]
    SplitNotFound(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Splits are keyed by configuration; pass the recipients for {0} explicitly")]
    NoOwnerIndex(Address),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Failures reported by a `SplitChain` implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Request rejected by wallet: {0}")]
    Rejected(String),

    #[error("Wrong network: expected chain {expected}, wallet is on {actual}")]
    WrongNetwork { expected: u64, actual: u64 },

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    #[error("RPC error: {0}")]
    Rpc(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to serialize split: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Split store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
