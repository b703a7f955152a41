use alloy_primitives::Address;

use crate::{
    chain::{confirm, ensure_chain},
    errors::SplitError,
    events::{emit, ForwarderReady},
    utils::{now_millis, payment_link},
};

use super::SplitContext;

/// The connected wallet's forwarder and the link senders use to tip it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwarderInfo {
    pub address: Address,
    /// True when this call deployed the forwarder
    pub deployed_now: bool,
    pub payment_link: String,
}

/// Resolves the wallet's deterministic forwarder, deploying it if needed
/// Idempotent: an already-deployed forwarder is returned as-is
pub async fn handler(ctx: &SplitContext<'_>) -> Result<ForwarderInfo, SplitError> {
    let owner = ctx.owner;
    let address = ctx.chain.predict_forwarder(owner).await?;

    let deployed_now = if ctx.chain.is_deployed(address).await? {
        false
    } else {
        ensure_chain(ctx.chain, ctx.config.chain_id).await?;

        let tx_hash = ctx.chain.deploy_forwarder(owner).await?;
        confirm(ctx.chain, tx_hash).await?;
        tracing::debug!(%address, %tx_hash, "forwarder deployed");
        true
    };

    emit(&ForwarderReady {
        owner,
        forwarder: address,
        deployed_now,
        timestamp: now_millis(),
    });

    Ok(ForwarderInfo {
        address,
        deployed_now,
        payment_link: payment_link(&ctx.config.app_url, &owner),
    })
}
