use alloy_primitives::{Address, TxHash, U256};

use crate::{
    chain::{confirm, ensure_chain, DistributionMode},
    engine::{allocate, parse_recipients},
    errors::SplitError,
    events::{emit, TipSent},
    state::{Allocation, RecipientInput},
    utils::now_millis,
};

use super::SplitContext;

/// Result of a tip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipOutcome {
    pub mode: DistributionMode,
    pub total: U256,
    /// Per-recipient amounts; `None` when the registry computed them on-chain
    pub allocation: Option<Allocation>,
    /// Confirmed transactions, in submission order
    pub transactions: Vec<TxHash>,
}

/// Sends `amount` wei to `owner`'s split
///
/// In `Splitter` mode this is one deposit the registry redistributes. In
/// `Direct` mode the amount is allocated locally (from `rows`, or from the
/// split saved for `owner`) and each recipient is paid by its own transfer,
/// each confirmed before the next is sent.
pub async fn handler(
    ctx: &SplitContext<'_>,
    owner: Address,
    amount: U256,
    rows: Option<&[RecipientInput]>,
) -> Result<TipOutcome, SplitError> {
    if amount.is_zero() {
        return Err(SplitError::InvalidAmount("amount must be greater than zero".into()));
    }

    let mode = ctx.config.distribution;
    let mut transactions = Vec::new();

    let allocation = match mode {
        DistributionMode::Splitter => {
            if let Some(rows) = rows {
                // The registry pays out its registered split; rows are only checked
                parse_recipients(rows).map_err(SplitError::Invalid)?;
                tracing::debug!(rows = rows.len(), "rows validated, registry split applies");
            }

            ensure_chain(ctx.chain, ctx.config.chain_id).await?;

            let tx_hash = ctx.chain.tip(owner, amount).await?;
            confirm(ctx.chain, tx_hash).await?;
            transactions.push(tx_hash);
            None
        }
        DistributionMode::Direct => {
            // Resolve before touching the wallet so a missing split costs nothing
            let recipients = ctx.resolve_recipients(&owner, rows)?;
            let allocation = allocate(amount, &recipients);

            ensure_chain(ctx.chain, ctx.config.chain_id).await?;

            for (recipient, share) in &allocation.shares {
                if share.is_zero() {
                    // Rounding can leave a recipient nothing on tiny amounts
                    tracing::debug!(%recipient, "skipping zero-amount transfer");
                    continue;
                }

                let tx_hash = ctx.chain.transfer(*recipient, *share).await?;
                confirm(ctx.chain, tx_hash).await?;
                transactions.push(tx_hash);
            }
            Some(allocation)
        }
    };

    emit(&TipSent {
        owner,
        chain_id: ctx.config.chain_id,
        mode,
        total_amount: amount,
        transactions: transactions.clone(),
        timestamp: now_millis(),
    });

    Ok(TipOutcome {
        mode,
        total: amount,
        allocation,
        transactions,
    })
}
