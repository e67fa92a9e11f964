use alloc::{vec, vec::Vec};

use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use gasless_executor_types::IGaslessExecutor;
use stylus_sdk::{abi::Bytes, call::RawCall, prelude::*};

use crate::{
    abi::{decode_authorization, decode_batch_authorization, AuthorizationTuple, BatchAuthorizationTuple},
    delegate::{delegate_from_code, ensure_delegate, DelegateResolver},
    errors::{GatewayError, InvalidImplementation},
};

sol_storage! {
    #[entrypoint]
    pub struct GaslessGateway {
        /// Executor every forwarded-to account must be delegated to. Written only by the constructor.
        address implementation;
    }
}

#[public]
impl GaslessGateway {
    /// Fix the expected executor implementation at deployment.
    #[constructor]
    pub fn constructor(&mut self, implementation: Address) -> Result<(), GatewayError> {
        if implementation == Address::ZERO {
            return Err(invalid_implementation(implementation));
        }
        self.implementation.set(implementation);
        Ok(())
    }

    pub fn implementation(&self) -> Address {
        self.implementation.get()
    }

    /// Relay `executeOne` to `account` after checking its delegate.
    pub fn forward(
        &mut self,
        authorization: AuthorizationTuple,
        signature: Bytes,
        forced: bool,
        account: Address,
    ) -> Result<(), Vec<u8>> {
        self.check_account(account)?;
        let calldata = IGaslessExecutor::executeOneCall {
            authorization: decode_authorization(authorization),
            signature: signature.0.into(),
            forced,
        }
        .abi_encode();
        self.relay(account, &calldata)
    }

    /// Relay `executeBatch` to `account` after checking its delegate.
    pub fn forward_batch(
        &mut self,
        authorization: BatchAuthorizationTuple,
        signature: Bytes,
        forced: bool,
        account: Address,
    ) -> Result<(), Vec<u8>> {
        self.check_account(account)?;
        let calldata = IGaslessExecutor::executeBatchCall {
            authorization: decode_batch_authorization(authorization),
            signature: signature.0.into(),
            forced,
        }
        .abi_encode();
        self.relay(account, &calldata)
    }
}

impl GaslessGateway {
    fn check_account(&self, account: Address) -> Result<(), GatewayError> {
        let expected = self.implementation.get();
        // Accounts without a designator resolve to zero; never let them match.
        if expected == Address::ZERO {
            return Err(invalid_implementation(expected));
        }
        ensure_delegate(self, account, expected)
    }

    fn relay(&mut self, account: Address, calldata: &[u8]) -> Result<(), Vec<u8>> {
        // The account's revert data (executor errors or bubbled callee reasons) passes through.
        unsafe { RawCall::new().call(account, calldata) }.map(|_| ())
    }
}

fn invalid_implementation(implementation: Address) -> GatewayError {
    GatewayError::InvalidImplementation(InvalidImplementation { implementation })
}

impl DelegateResolver for GaslessGateway {
    fn delegate_of(&self, account: Address) -> Address {
        delegate_from_code(&self.vm().code(account))
    }
}
