//! Minimal calldata / return-data helpers.

use alloy_primitives::{Address, FixedBytes};
use gasless_executor_types::constants::SELECTOR_LEN;

/// Function selector of `data`, or the zero selector if `data` is shorter than four bytes.
pub fn selector_of(data: &[u8]) -> FixedBytes<4> {
    match data.get(..SELECTOR_LEN) {
        Some(selector) => FixedBytes::from_slice(selector),
        None => FixedBytes::ZERO,
    }
}

/// Address in the low 20 bytes of the first 32-byte word, if there is one.
pub fn address_from_word(out: &[u8]) -> Option<Address> {
    let word = out.get(..32)?;
    Some(Address::from_slice(&word[12..32]))
}
