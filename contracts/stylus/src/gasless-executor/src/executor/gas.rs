//! Gas-forwarding guard.
//!
//! Admission is decided before a call is attempted so that a short budget surfaces as a
//! specific error instead of an out-of-gas buried inside the callee.

use alloy_primitives::U256;

use super::constants::RETENTION_DIVISOR;
use crate::errors::{
    ExecutionError, ExecutorError, InsufficientGas, InsufficientGasForRetentionRule,
};

/// Clamp a signed gas amount to the host's 64-bit gas counter. Anything above
/// `u64::MAX` can never be funded, so saturating keeps the guard's verdict correct.
pub fn gas_units(amount: U256) -> u64 {
    amount.saturating_to()
}

/// Most gas a sub-call can receive when `gas_left` remains in the current frame.
pub const fn forwardable_gas(gas_left: u64) -> u64 {
    gas_left - gas_left / RETENTION_DIVISOR
}

/// Check that `want` can be forwarded while still leaving `reserved` for later work.
pub fn ensure_forwardable(gas_left: u64, want: u64, reserved: u64) -> Result<(), ExecutionError> {
    let required = want.saturating_add(reserved);
    if gas_left < required {
        return Err(insufficient_gas(gas_left, required));
    }
    let forwardable = forwardable_gas(gas_left);
    if forwardable < want {
        return Err(ExecutorError::InsufficientGasForRetentionRule(InsufficientGasForRetentionRule {
            forwardable: U256::from(forwardable),
            requested: U256::from(want),
        })
        .into());
    }
    Ok(())
}

pub(super) fn insufficient_gas(available: u64, required: u64) -> ExecutionError {
    ExecutorError::InsufficientGas(InsufficientGas {
        available: U256::from(available),
        required: U256::from(required),
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwardable_keeps_one_64th() {
        assert_eq!(forwardable_gas(0), 0);
        assert_eq!(forwardable_gas(63), 63);
        assert_eq!(forwardable_gas(64), 63);
        assert_eq!(forwardable_gas(1_000_000), 984_375);
    }

    #[test]
    fn admits_call_with_room_for_reserve() {
        assert_eq!(ensure_forwardable(1_000_000, 500_000, 100_000), Ok(()));
        assert_eq!(ensure_forwardable(1_000_000, 900_000, 100_000), Ok(()));
        assert_eq!(ensure_forwardable(1_000_000, 0, 0), Ok(()));
    }

    #[test]
    fn rejects_when_reserve_does_not_fit() {
        assert_eq!(
            ensure_forwardable(1_000_000, 900_000, 100_001),
            Err(insufficient_gas(1_000_000, 1_000_001))
        );
    }

    #[test]
    fn rejects_above_retention_cap_even_with_reserve_met() {
        // 985_000 + 10_000 fits in 1_000_000, but only 984_375 can be forwarded.
        assert_eq!(
            ensure_forwardable(1_000_000, 985_000, 10_000),
            Err(ExecutionError::Rejected(ExecutorError::InsufficientGasForRetentionRule(
                InsufficientGasForRetentionRule {
                    forwardable: U256::from(984_375u64),
                    requested: U256::from(985_000u64),
                }
            )))
        );
    }

    #[test]
    fn oversized_amounts_saturate() {
        assert_eq!(gas_units(U256::MAX), u64::MAX);
        assert_eq!(gas_units(U256::from(21_000u64)), 21_000);
        assert_eq!(
            ensure_forwardable(1_000_000, u64::MAX, 1),
            Err(insufficient_gas(1_000_000, u64::MAX))
        );
    }
}
