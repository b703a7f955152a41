use std::env;

use serde::Deserialize;

use crate::{
    chain::DistributionMode,
    constants::{BASE_SEPOLIA_CHAIN_ID, DEFAULT_APP_URL},
    state::{KeyStrategy, RemainderPolicy},
};

/// Runtime settings for a `Splitter`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chain every write must land on
    pub chain_id: u64,
    /// Base URL used to build payment links
    pub app_url: String,
    pub key_strategy: KeyStrategy,
    pub remainder_policy: RemainderPolicy,
    pub distribution: DistributionMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chain_id: BASE_SEPOLIA_CHAIN_ID,
            app_url: DEFAULT_APP_URL.to_string(),
            key_strategy: KeyStrategy::default(),
            remainder_policy: RemainderPolicy::default(),
            distribution: DistributionMode::default(),
        }
    }
}

impl EngineConfig {
    /// Loads `.env` if present, then reads the environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Reads `SPLIT_*` variables; anything unset or unparsable keeps its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let chain_id = lookup("SPLIT_CHAIN_ID")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.chain_id);
        let app_url = lookup("SPLIT_APP_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.app_url);
        let key_strategy = match lookup("SPLIT_KEY_STRATEGY").as_deref().map(str::trim) {
            Some("owner") => KeyStrategy::Owner,
            Some("configuration") => KeyStrategy::Configuration,
            _ => defaults.key_strategy,
        };
        let remainder_policy = match lookup("SPLIT_REMAINDER_POLICY").as_deref().map(str::trim) {
            Some("distribute") => RemainderPolicy::Distribute,
            Some("first") => RemainderPolicy::FirstEntry,
            _ => defaults.remainder_policy,
        };
        let distribution = match lookup("SPLIT_DISTRIBUTION").as_deref().map(str::trim) {
            Some("splitter") => DistributionMode::Splitter,
            Some("direct") => DistributionMode::Direct,
            _ => defaults.distribution,
        };

        Self {
            chain_id,
            app_url,
            key_strategy,
            remainder_policy,
            distribution,
        }
    }
}
