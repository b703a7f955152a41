use crate::{
    engine::parse_recipients,
    errors::SplitError,
    events::{emit, SplitSaved},
    state::{RecipientInput, SplitConfiguration},
    utils::now_millis,
};

use super::SplitContext;

/// Validates `rows` and saves them as the connected wallet's split
/// Replaces any split previously saved under the same key
pub fn handler(
    ctx: &SplitContext<'_>,
    rows: &[RecipientInput],
) -> Result<SplitConfiguration, SplitError> {
    // Every problem is reported together, not just the first
    let recipients = parse_recipients(rows).map_err(SplitError::Invalid)?;

    let key = ctx.save_key(&recipients);
    let old_recipient_count = ctx
        .store
        .get(&key)
        .map(|previous| previous.recipients.len())
        .unwrap_or(0);

    let config = SplitConfiguration {
        recipients,
        updated_at: now_millis(),
    };
    ctx.store.set(&key, &config)?;

    emit(&SplitSaved {
        key,
        owner: ctx.owner,
        old_recipient_count,
        new_recipient_count: config.recipients.len(),
        timestamp: config.updated_at,
    });

    Ok(config)
}
