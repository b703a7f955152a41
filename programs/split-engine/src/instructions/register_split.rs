use crate::{
    chain::{confirm, ensure_chain, Receipt},
    errors::SplitError,
    events::{emit, SplitRegistered},
    state::RecipientInput,
    utils::now_millis,
};

use super::SplitContext;

/// Registers the connected wallet's split in the on-chain registry
///
/// Uses `rows` when given, otherwise the wallet's saved split. Returns once
/// the registration is mined successfully.
pub async fn handler(
    ctx: &SplitContext<'_>,
    rows: Option<&[RecipientInput]>,
) -> Result<Receipt, SplitError> {
    let recipients = ctx.resolve_recipients(&ctx.owner, rows)?;

    ensure_chain(ctx.chain, ctx.config.chain_id).await?;

    let tx_hash = ctx.chain.register_split(&recipients).await?;
    tracing::debug!(%tx_hash, recipients = recipients.len(), "split registration submitted");
    let receipt = confirm(ctx.chain, tx_hash).await?;

    emit(&SplitRegistered {
        owner: ctx.owner,
        chain_id: ctx.config.chain_id,
        recipient_count: recipients.len(),
        tx_hash: receipt.tx_hash,
        block_number: receipt.block_number,
        timestamp: now_millis(),
    });

    Ok(receipt)
}
