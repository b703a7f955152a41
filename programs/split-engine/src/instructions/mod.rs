use alloy_primitives::Address;

use crate::{
    chain::SplitChain,
    config::EngineConfig,
    engine::{configuration_key, parse_recipients, split_key},
    errors::SplitError,
    state::{KeyStrategy, Recipient, RecipientInput},
    store::SplitStore,
};

pub mod get_forwarder;
pub mod load_split;
pub mod register_and_tip;
pub mod register_split;
pub mod save_split;
pub mod send_tip;

pub use get_forwarder::ForwarderInfo;
pub use send_tip::TipOutcome;

/// Everything a workflow handler may touch
pub struct SplitContext<'a> {
    pub config: &'a EngineConfig,
    pub store: &'a dyn SplitStore,
    pub chain: &'a dyn SplitChain,
    /// Connected wallet
    pub owner: Address,
}

impl SplitContext<'_> {
    /// Key a split owned by `owner` is stored under
    pub fn owner_key(&self, owner: &Address) -> String {
        split_key(self.config.chain_id, &owner.to_string())
    }

    /// Key `recipients` are saved under for the connected wallet
    pub fn save_key(&self, recipients: &[Recipient]) -> String {
        match self.config.key_strategy {
            KeyStrategy::Owner => self.owner_key(&self.owner),
            KeyStrategy::Configuration => configuration_key(self.config.chain_id, recipients),
        }
    }

    /// Key `owner`'s split can be found under, if the key strategy indexes by owner
    pub fn lookup_key(&self, owner: &Address) -> Option<String> {
        match self.config.key_strategy {
            KeyStrategy::Owner => Some(self.owner_key(owner)),
            KeyStrategy::Configuration => None,
        }
    }

    /// Validated `rows` if given, otherwise the split saved for `owner`.
    ///
    /// Saved splits go through the same checks as form rows before use.
    pub fn resolve_recipients(
        &self,
        owner: &Address,
        rows: Option<&[RecipientInput]>,
    ) -> Result<Vec<Recipient>, SplitError> {
        if let Some(rows) = rows {
            return parse_recipients(rows).map_err(SplitError::Invalid);
        }

        let key = self.lookup_key(owner).ok_or(SplitError::NoOwnerIndex(*owner))?;
        let saved = self.store.get(&key).ok_or(SplitError::SplitNotFound(key))?;

        let stored: Vec<RecipientInput> =
            saved.recipients.into_iter().map(RecipientInput::from).collect();
        parse_recipients(&stored).map_err(|errors| {
            tracing::warn!(?errors, "saved split failed validation");
            SplitError::Invalid(errors)
        })
    }
}
