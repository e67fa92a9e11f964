//! EIP-7702 delegate resolution.

use alloy_primitives::Address;

use crate::errors::{GatewayError, InvalidDelegate};

/// Prefix of an EIP-7702 delegation designator: `0xef0100 || address`.
pub const DELEGATION_PREFIX: [u8; 3] = [0xef, 0x01, 0x00];

/// Length of a full designator.
pub const DELEGATION_CODE_LEN: usize = DELEGATION_PREFIX.len() + 20;

/// Resolves which code an account currently executes as.
pub trait DelegateResolver {
    fn delegate_of(&self, account: Address) -> Address;
}

/// Decode the delegate from an account's code. Anything that is not exactly a designator
/// (an EOA, a regular contract) resolves to the zero address.
pub fn delegate_from_code(code: &[u8]) -> Address {
    if code.len() != DELEGATION_CODE_LEN || code[..DELEGATION_PREFIX.len()] != DELEGATION_PREFIX {
        return Address::ZERO;
    }
    Address::from_slice(&code[DELEGATION_PREFIX.len()..])
}

/// Require `account` to be delegated to `expected`.
pub fn ensure_delegate<R: DelegateResolver + ?Sized>(
    resolver: &R,
    account: Address,
    expected: Address,
) -> Result<(), GatewayError> {
    let actual = resolver.delegate_of(account);
    if actual != expected {
        return Err(GatewayError::InvalidDelegate(InvalidDelegate { account, expected, actual }));
    }
    Ok(())
}
