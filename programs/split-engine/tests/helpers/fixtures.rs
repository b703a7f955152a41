//! Addresses and recipient rows used across tests

use alloy_primitives::{Address, TxHash, U256};
use split_engine::{Recipient, RecipientInput};

pub const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

pub fn ether(n: u128) -> U256 {
    U256::from(n * ONE_ETHER)
}

/// `0x` + the hex digit `digit` repeated 40 times
pub fn addr_str(digit: char) -> String {
    format!("0x{}", digit.to_string().repeat(40))
}

pub fn addr(digit: char) -> Address {
    addr_str(digit).parse().unwrap()
}

/// Hash the mock chain assigns to its `n`th submitted transaction
pub fn tx(n: u64) -> TxHash {
    TxHash::left_padding_from(&n.to_be_bytes())
}

pub fn owner() -> Address {
    Address::with_last_byte(0x01)
}

pub fn row(digit: char, bps: i64) -> RecipientInput {
    RecipientInput::new(addr_str(digit), bps)
}

pub fn recipient(digit: char, bps: u16) -> Recipient {
    Recipient { address: addr(digit), share_bps: bps }
}

/// Cache entry JSON in the front-end layout for `(digit, bps)` rows
pub fn cache_json(rows: &[(char, u16)], updated_at: u64) -> String {
    let recipients: Vec<_> = rows
        .iter()
        .map(|&(digit, bps)| serde_json::json!({ "addr": addr_str(digit), "bps": bps }))
        .collect();
    serde_json::json!({ "recipients": recipients, "updatedAt": updated_at }).to_string()
}

/// 50/50 between 0xAAAA... and 0xBBBB...
pub fn half_half_rows() -> Vec<RecipientInput> {
    vec![
        RecipientInput::new(addr_str('A'), 5000),
        RecipientInput::new(addr_str('B'), 5000),
    ]
}

/// 3333 / 3333 / 3334
pub fn thirds() -> Vec<Recipient> {
    vec![recipient('a', 3333), recipient('b', 3333), recipient('c', 3334)]
}

pub fn thirds_rows() -> Vec<RecipientInput> {
    thirds().into_iter().map(RecipientInput::from).collect()
}

/// `count` distinct recipients sharing 10000 bps via `even_split`
pub fn even_split_recipients(count: usize) -> Vec<Recipient> {
    split_engine::even_split(count)
        .into_iter()
        .enumerate()
        .map(|(i, share_bps)| Recipient {
            address: Address::left_padding_from(&(i as u64 + 1).to_be_bytes()),
            share_bps,
        })
        .collect()
}
