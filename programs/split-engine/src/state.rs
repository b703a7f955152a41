use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Recipient in a validated split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Recipient's wallet address
    #[serde(rename = "addr")]
    pub address: Address,
    /// Share in basis points (1-10000, where 100 = 1%)
    #[serde(rename = "bps")]
    pub share_bps: u16,
}

/// Raw recipient row as entered in a form, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientInput {
    pub address: String,
    /// `None` when the share was left empty or is not an integer
    pub share_bps: Option<i64>,
}

impl RecipientInput {
    pub fn new(address: impl Into<String>, share_bps: i64) -> Self {
        Self {
            address: address.into(),
            share_bps: Some(share_bps),
        }
    }

    /// Builds a row from the text of an address field and a bps field.
    ///
    /// The share accepts any number text with an integral value, so "5000",
    /// "5000.0" and "5e3" all read as 5000. Empty text, fractions such as
    /// "12.5", and values outside `i64` leave the share absent.
    pub fn from_form(address: &str, share_bps: &str) -> Self {
        Self {
            address: address.trim().to_string(),
            share_bps: parse_share(share_bps.trim()),
        }
    }
}

fn parse_share(text: &str) -> Option<i64> {
    if let Ok(bps) = text.parse::<i64>() {
        return Some(bps);
    }

    let value = text.parse::<f64>().ok().filter(|v| v.is_finite() && v.fract() == 0.0)?;
    // Exclusive upper bound: i64::MAX as f64 rounds up to 2^63
    (value >= i64::MIN as f64 && value < i64::MAX as f64).then_some(value as i64)
}

impl From<Recipient> for RecipientInput {
    fn from(recipient: Recipient) -> Self {
        Self::new(recipient.address.to_string(), recipient.share_bps as i64)
    }
}

/// Last-saved split for one cache key.
///
/// Superseded wholesale by the next save; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitConfiguration {
    pub recipients: Vec<Recipient>,
    /// Milliseconds since the Unix epoch
    pub updated_at: u64,
}

/// Per-recipient wei amounts, in recipient order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    pub shares: Vec<(Address, U256)>,
}

impl Allocation {
    pub fn amounts(&self) -> impl Iterator<Item = U256> + '_ {
        self.shares.iter().map(|(_, amount)| *amount)
    }

    pub fn total(&self) -> U256 {
        self.amounts().fold(U256::ZERO, |acc, amount| acc + amount)
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Where `even_split` puts the bps left over by integer division
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// One extra bps to each of the first `remainder` entries
    #[default]
    Distribute,
    /// The whole remainder to the first entry
    FirstEntry,
}

/// What a cache key identifies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStrategy {
    /// The wallet that saved the split
    #[default]
    Owner,
    /// A hash of the sorted recipient list
    Configuration,
}
