use std::time::{SystemTime, UNIX_EPOCH};

use alloy_primitives::{utils::parse_ether, Address, U256};

use crate::{
    constants::{ADDRESS_HEX_LEN, BPS_DENOMINATOR, SENDER_PATH},
    errors::SplitError,
};

/// Calculate recipient's share of the total amount, rounded down.
///
/// `total * bps` is split as `(total / D) * bps + (total % D) * bps / D`, so
/// neither product can leave U256 for `bps <= D`.
pub fn calculate_recipient_amount(total: U256, share_bps: u16) -> U256 {
    let denominator = U256::from(BPS_DENOMINATOR);
    let bps = U256::from(share_bps);
    (total / denominator) * bps + (total % denominator) * bps / denominator
}

/// `0x` followed by exactly 40 hex digits, either case.
pub fn is_valid_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => hex.len() == ADDRESS_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Link a sender can open to tip `owner`.
pub fn payment_link(app_url: &str, owner: &Address) -> String {
    format!(
        "{}{}?owner={}",
        app_url.trim_end_matches('/'),
        SENDER_PATH,
        owner.to_checksum(None)
    )
}

/// Parses an ETH amount such as "0.01" into wei.
pub fn parse_amount_eth(amount: &str) -> Result<U256, SplitError> {
    let amount = amount.trim();
    parse_ether(amount).map_err(|e| SplitError::InvalidAmount(format!("{amount}: {e}")))
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
