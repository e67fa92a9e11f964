//! [`Host`](super::Host) implementation over the Stylus VM.
//!
//! Atomicity comes for free here: the entrypoint returns the engine's error as revert data and
//! the VM unwinds every storage write, transfer and log of the transaction frame.

use alloc::vec::Vec;

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::{SolCall, SolEvent};
use stylus_sdk::{call::RawCall, prelude::*, stylus_core::log};

use super::{
    interfaces::IERC20, CallResult, Caller, ExecutionEnv, NonceStore, SignerRecovery, TokenLedger,
};
use crate::{utils::crypto::ecrecover_address, GaslessExecutor};

/// Per-call gas cap for `balanceOf` lookups on the fee token.
const BALANCE_OF_GAS: u64 = 100_000;

pub struct OnchainHost<'a> {
    contract: &'a mut GaslessExecutor,
}

impl<'a> OnchainHost<'a> {
    pub fn new(contract: &'a mut GaslessExecutor) -> Self {
        Self { contract }
    }
}

impl ExecutionEnv for OnchainHost<'_> {
    fn executor(&self) -> Address {
        self.contract.vm().contract_address()
    }

    fn chain_id(&self) -> u64 {
        self.contract.vm().chain_id()
    }

    fn gas_left(&self) -> u64 {
        self.contract.vm().evm_gas_left()
    }

    fn gas_price(&self) -> U256 {
        self.contract.vm().tx_gas_price()
    }

    fn emit<E: SolEvent>(&mut self, event: E) {
        log(self.contract.vm(), event);
    }
}

impl NonceStore for OnchainHost<'_> {
    fn current_nonce(&self) -> U256 {
        self.contract.stored_nonce()
    }

    fn advance_nonce(&mut self) {
        self.contract.bump_nonce();
    }
}

impl Caller for OnchainHost<'_> {
    fn call(&mut self, target: Address, value: U256, gas: u64, data: &[u8]) -> CallResult {
        let before = self.gas_left();
        let outcome = unsafe { RawCall::new_with_value(value).gas(gas).call(target, data) };
        let gas_used = before.saturating_sub(self.gas_left());
        match outcome {
            Ok(return_data) => CallResult { success: true, return_data, gas_used },
            Err(return_data) => CallResult { success: false, return_data, gas_used },
        }
    }
}

impl TokenLedger for OnchainHost<'_> {
    fn balance_of(&self, token: Address, owner: Address) -> U256 {
        let input = IERC20::balanceOfCall { account: owner }.abi_encode();
        let Ok(out) = (unsafe { RawCall::new_static().gas(BALANCE_OF_GAS).call(token, &input) }) else {
            return U256::ZERO;
        };
        IERC20::balanceOfCall::abi_decode_returns(&out, true)
            .map(|ret| ret.balance)
            .unwrap_or(U256::ZERO)
    }

    /// Safe-transfer semantics: the token must have code and return either nothing or `true`.
    fn transfer(&mut self, token: Address, to: Address, amount: U256) -> bool {
        let input = IERC20::transferCall { to, amount }.abi_encode();
        let out: Vec<u8> = match unsafe { RawCall::new().call(token, &input) } {
            Ok(out) => out,
            Err(_) => return false,
        };
        if out.is_empty() {
            return self.contract.vm().code_size(token) > 0;
        }
        IERC20::transferCall::abi_decode_returns(&out, true)
            .map(|ret| ret.success)
            .unwrap_or(false)
    }
}

impl SignerRecovery for OnchainHost<'_> {
    fn recover(&self, digest: B256, signature: &[u8]) -> Option<Address> {
        ecrecover_address(digest, signature)
    }
}
