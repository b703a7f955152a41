use alloy_primitives::U256;

use crate::{errors::SplitError, state::RecipientInput};

use super::{register_split, send_tip, SplitContext, TipOutcome};

/// Registers the connected wallet's split, then tips it
///
/// The tip is only submitted after the registration receipt is confirmed
/// successful, since the payout depends on the registered split.
pub async fn handler(
    ctx: &SplitContext<'_>,
    amount: U256,
    rows: Option<&[RecipientInput]>,
) -> Result<TipOutcome, SplitError> {
    if amount.is_zero() {
        return Err(SplitError::InvalidAmount("amount must be greater than zero".into()));
    }

    let receipt = register_split::handler(ctx, rows).await?;
    tracing::debug!(
        tx_hash = %receipt.tx_hash,
        block = receipt.block_number,
        "split registered, sending tip"
    );

    send_tip::handler(ctx, ctx.owner, amount, rows).await
}
