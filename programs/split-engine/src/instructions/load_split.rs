use alloy_primitives::Address;

use crate::state::SplitConfiguration;

use super::SplitContext;

/// Last split saved by `owner` on the configured chain, if any
/// Always `None` when splits are keyed by configuration
pub fn handler(ctx: &SplitContext<'_>, owner: &Address) -> Option<SplitConfiguration> {
    let Some(key) = ctx.lookup_key(owner) else {
        tracing::debug!(%owner, "splits are keyed by configuration, no owner lookup");
        return None;
    };
    by_key(ctx, &key)
}

/// Split stored under `key`, whichever strategy produced it
pub fn by_key(ctx: &SplitContext<'_>, key: &str) -> Option<SplitConfiguration> {
    let saved = ctx.store.get(key);
    tracing::debug!(key, found = saved.is_some(), "load split");
    saved
}
