//! Signature recovery on-chain.

use alloy_primitives::{Address, B256};
use stylus_sdk::call::RawCall;

use crate::{host::interfaces::ECRECOVER, utils::bytes::address_from_word};

/// Gas forwarded to the `ecrecover` precompile (3000 needed, headroom for the call itself).
const ECRECOVER_GAS: u64 = 50_000;

/// Recover an EOA address from a 32-byte digest and a 65-byte `r || s || v` signature.
///
/// Notes:
/// - We use the EVM `ecrecover` precompile at address `0x01`.
/// - `v` may be given as {27, 28} or {0, 1}; anything else is rejected.
/// - The precompile answers with empty output (not a revert) for unrecoverable input.
pub fn ecrecover_address(digest: B256, sig: &[u8]) -> Option<Address> {
    if sig.len() != 65 {
        return None;
    }
    let v = match sig[64] {
        v @ (27 | 28) => v,
        v @ (0 | 1) => v + 27,
        _ => return None,
    };

    let mut input = [0u8; 128];
    input[0..32].copy_from_slice(digest.as_slice());
    // v as 32-byte big-endian word.
    input[63] = v;
    input[64..96].copy_from_slice(&sig[0..32]);
    input[96..128].copy_from_slice(&sig[32..64]);

    let out = unsafe { RawCall::new_static().gas(ECRECOVER_GAS).call(ECRECOVER, &input) }.ok()?;
    address_from_word(&out).filter(|recovered| *recovered != Address::ZERO)
}
