//! Basis-point split validation and allocation.
//!
//! Everything here is pure: no I/O, no clock, no shared state. Callers own the
//! rows being edited and hand them in on every call.

use alloy_primitives::{hex, keccak256, Address, U256};

use crate::{
    constants::{MIN_RECIPIENTS, REQUIRED_SPLIT_TOTAL, SPLIT_KEY_PREFIX},
    errors::ValidationError,
    state::{Allocation, Recipient, RecipientInput, RemainderPolicy},
    utils::{calculate_recipient_amount, is_valid_address},
};

/// Checks a list of form rows and reports every problem category found.
///
/// An empty list only reports `EmptyList`. Otherwise the checks run in order:
/// addresses, shares, then the total. An empty result means the rows can be
/// saved.
pub fn validate(rows: &[RecipientInput]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if rows.len() < MIN_RECIPIENTS {
        errors.push(ValidationError::EmptyList);
        return errors;
    }

    let bad_addresses: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !is_valid_address(&row.address))
        .map(|(i, _)| i)
        .collect();
    if !bad_addresses.is_empty() {
        errors.push(ValidationError::InvalidAddress { indices: bad_addresses });
    }

    let bad_shares: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !matches!(row.share_bps, Some(bps) if bps > 0))
        .map(|(i, _)| i)
        .collect();
    if !bad_shares.is_empty() {
        errors.push(ValidationError::NonPositiveShare { indices: bad_shares });
    }

    // Absent shares count as zero, as the form does when it totals the rows
    let total: i128 = rows
        .iter()
        .map(|row| row.share_bps.unwrap_or(0) as i128)
        .sum();
    if total != REQUIRED_SPLIT_TOTAL as i128 {
        errors.push(ValidationError::ShareSumMismatch { total });
    }

    errors
}

/// Validates `rows` and converts them into typed recipients.
pub fn parse_recipients(rows: &[RecipientInput]) -> Result<Vec<Recipient>, Vec<ValidationError>> {
    let errors = validate(rows);
    if !errors.is_empty() {
        return Err(errors);
    }

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let address = row
                .address
                .parse::<Address>()
                .map_err(|_| vec![ValidationError::InvalidAddress { indices: vec![i] }])?;
            // validate() bounds every share to 1..=10000 via the total
            let share_bps = row
                .share_bps
                .and_then(|bps| u16::try_from(bps).ok())
                .ok_or_else(|| vec![ValidationError::NonPositiveShare { indices: vec![i] }])?;
            Ok(Recipient { address, share_bps })
        })
        .collect()
}

/// Splits 10000 bps evenly over `count` rows, extra bps to the first rows.
pub fn even_split(count: usize) -> Vec<u16> {
    even_split_with(count, RemainderPolicy::Distribute)
}

/// Splits 10000 bps evenly over `count` rows using `policy` for the remainder.
///
/// Returns an empty vector for `count == 0`. For `count > 10000` some rows
/// receive 0 bps, which `validate` then rejects.
pub fn even_split_with(count: usize, policy: RemainderPolicy) -> Vec<u16> {
    if count == 0 {
        return Vec::new();
    }

    let total = REQUIRED_SPLIT_TOTAL as usize;
    let base = total / count;
    let remainder = total - base * count;

    (0..count)
        .map(|i| {
            let extra = match policy {
                RemainderPolicy::Distribute => usize::from(i < remainder),
                RemainderPolicy::FirstEntry if i == 0 => remainder,
                RemainderPolicy::FirstEntry => 0,
            };
            // base + extra <= 10000
            (base + extra) as u16
        })
        .collect()
}

/// Divides `total` wei across `recipients` by their bps.
///
/// Every recipient but the last gets its floor share; the last absorbs the
/// rounding dust so the parts always add back up to `total`. `recipients`
/// must already have passed `validate`.
pub fn allocate(total: U256, recipients: &[Recipient]) -> Allocation {
    let Some((last, rest)) = recipients.split_last() else {
        return Allocation::default();
    };

    let mut shares = Vec::with_capacity(recipients.len());
    let mut distributed = U256::ZERO;

    for recipient in rest {
        let amount = calculate_recipient_amount(total, recipient.share_bps);
        distributed = distributed.saturating_add(amount);
        shares.push((recipient.address, amount));
    }

    // distributed <= total whenever the bps sum to 10000
    shares.push((last.address, total.saturating_sub(distributed)));

    Allocation { shares }
}

/// Cache key for a split owned by `identifier` on `chain_id`.
pub fn split_key(chain_id: u64, identifier: &str) -> String {
    format!("{SPLIT_KEY_PREFIX}:{chain_id}:{}", identifier.to_lowercase())
}

/// Cache key addressed by the split's contents rather than its owner.
///
/// Recipients are sorted first, so the same set in any order maps to the
/// same key.
pub fn configuration_key(chain_id: u64, recipients: &[Recipient]) -> String {
    let mut sorted: Vec<(Address, u16)> = recipients
        .iter()
        .map(|r| (r.address, r.share_bps))
        .collect();
    sorted.sort_unstable();

    let mut packed = Vec::with_capacity(sorted.len() * 22);
    for (address, bps) in &sorted {
        packed.extend_from_slice(address.as_slice());
        packed.extend_from_slice(&bps.to_be_bytes());
    }

    split_key(chain_id, &hex::encode_prefixed(keccak256(&packed)))
}
