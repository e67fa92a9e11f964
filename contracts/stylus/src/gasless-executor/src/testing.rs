//! In-memory chain for driving the engine in tests.
//!
//! Each attempt runs against a copy of the chain state that only replaces the live state when
//! the attempt returns `Ok`, which is how a reverted transaction behaves on-chain.

use std::collections::BTreeMap;

use alloy_primitives::{Address, LogData, B256, U256};
use alloy_sol_types::SolEvent;
use gasless_executor_signer::{recover_signer, sign_authorization, sign_batch_authorization, signer_address};
use gasless_executor_types::{Authorization, BatchAuthorization};
use k256::ecdsa::SigningKey;

use crate::{
    errors::ExecutionError,
    executor::{ExecutionReport, Executor},
    host::{CallResult, Caller, ExecutionEnv, ExtraCostOracle, NonceStore, SignerRecovery, TokenLedger},
};

pub const DEFAULT_TX_GAS: u64 = 1_000_000;
pub const GWEI: u64 = 1_000_000_000;
pub const CHAIN_ID: u64 = 42161;

/// How a target responds to a call.
#[derive(Clone, Debug)]
pub enum Script {
    Succeed { gas_used: u64 },
    Revert { data: Vec<u8>, gas_used: u64 },
    /// Burns every unit of forwarded gas and fails without return data.
    OutOfGas,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub target: Address,
    pub value: U256,
    pub gas: u64,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct ChainState {
    pub executor: Address,
    pub chain_id: u64,
    pub gas_left: u64,
    pub gas_price: U256,
    pub nonce: U256,
    /// Targets without a script behave like an EOA: success, no gas.
    pub targets: BTreeMap<Address, Script>,
    pub calls: Vec<RecordedCall>,
    pub balances: BTreeMap<(Address, Address), U256>,
    /// Gas every token transfer burns.
    pub transfer_gas: u64,
    /// When set, every token transfer reports failure.
    pub transfers_frozen: bool,
    pub logs: Vec<LogData>,
}

impl ChainState {
    fn burn(&mut self, gas: u64) {
        self.gas_left = self.gas_left.saturating_sub(gas);
    }
}

impl ExecutionEnv for ChainState {
    fn executor(&self) -> Address {
        self.executor
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn gas_left(&self) -> u64 {
        self.gas_left
    }

    fn gas_price(&self) -> U256 {
        self.gas_price
    }

    fn emit<E: SolEvent>(&mut self, event: E) {
        self.logs.push(event.encode_log_data());
    }
}

impl NonceStore for ChainState {
    fn current_nonce(&self) -> U256 {
        self.nonce
    }

    fn advance_nonce(&mut self) {
        self.nonce += U256::from(1u64);
    }
}

impl Caller for ChainState {
    fn call(&mut self, target: Address, value: U256, gas: u64, data: &[u8]) -> CallResult {
        self.calls.push(RecordedCall { target, value, gas, data: data.to_vec() });
        let (success, return_data, gas_used) = match self.targets.get(&target) {
            None => (true, Vec::new(), 0),
            Some(Script::Succeed { gas_used }) => (true, Vec::new(), *gas_used),
            Some(Script::Revert { data, gas_used }) => (false, data.clone(), *gas_used),
            Some(Script::OutOfGas) => (false, Vec::new(), gas),
        };
        let gas_used = gas_used.min(gas);
        self.burn(gas_used);
        CallResult { success, return_data, gas_used }
    }
}

impl TokenLedger for ChainState {
    fn balance_of(&self, token: Address, owner: Address) -> U256 {
        self.balances.get(&(token, owner)).copied().unwrap_or_default()
    }

    fn transfer(&mut self, token: Address, to: Address, amount: U256) -> bool {
        self.burn(self.transfer_gas);
        if self.transfers_frozen {
            return false;
        }
        let from = self.executor;
        let balance = self.balance_of(token, from);
        if balance < amount {
            return false;
        }
        self.balances.insert((token, from), balance - amount);
        let received = self.balance_of(token, to) + amount;
        self.balances.insert((token, to), received);
        true
    }
}

impl SignerRecovery for ChainState {
    fn recover(&self, digest: B256, signature: &[u8]) -> Option<Address> {
        recover_signer(digest, signature).ok()
    }
}

/// Oracle returning a fixed extra cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedExtraCost(pub U256);

impl ExtraCostOracle for FixedExtraCost {
    fn estimate(&self) -> U256 {
        self.0
    }
}

pub struct MockChain {
    pub state: ChainState,
    pub tx_gas: u64,
    pub oracle: FixedExtraCost,
    key: SigningKey,
}

impl MockChain {
    /// A chain where the account controlled by `key` has delegated to the executor.
    pub fn new(key: &SigningKey) -> Self {
        Self {
            state: ChainState {
                executor: signer_address(key),
                chain_id: CHAIN_ID,
                gas_left: DEFAULT_TX_GAS,
                gas_price: U256::from(GWEI),
                nonce: U256::ZERO,
                targets: BTreeMap::new(),
                calls: Vec::new(),
                balances: BTreeMap::new(),
                transfer_gas: 0,
                transfers_frozen: false,
                logs: Vec::new(),
            },
            tx_gas: DEFAULT_TX_GAS,
            oracle: FixedExtraCost::default(),
            key: key.clone(),
        }
    }

    pub fn executor(&self) -> Address {
        self.state.executor
    }

    pub fn script(&mut self, target: Address, script: Script) {
        self.state.targets.insert(target, script);
    }

    pub fn fund(&mut self, token: Address, owner: Address, amount: U256) {
        self.state.balances.insert((token, owner), amount);
    }

    pub fn balance(&self, token: Address, owner: Address) -> U256 {
        self.state.balance_of(token, owner)
    }

    /// Signature by the delegating account.
    pub fn sign(&self, authorization: &Authorization) -> Vec<u8> {
        sign_authorization(authorization, self.state.chain_id, self.state.executor, &self.key)
            .expect("sign authorization")
    }

    pub fn sign_batch(&self, authorization: &BatchAuthorization) -> Vec<u8> {
        sign_batch_authorization(authorization, self.state.chain_id, self.state.executor, &self.key)
            .expect("sign batch authorization")
    }

    pub fn execute_one(
        &mut self,
        authorization: &Authorization,
        signature: &[u8],
        forced: bool,
    ) -> Result<ExecutionReport, ExecutionError> {
        self.attempt(|executor| executor.execute_one(authorization, signature, forced))
    }

    pub fn execute_batch(
        &mut self,
        authorization: &BatchAuthorization,
        signature: &[u8],
        forced: bool,
    ) -> Result<ExecutionReport, ExecutionError> {
        self.attempt(|executor| executor.execute_batch(authorization, signature, forced))
    }

    fn attempt(
        &mut self,
        run: impl FnOnce(&mut Executor<'_, ChainState, FixedExtraCost>) -> Result<ExecutionReport, ExecutionError>,
    ) -> Result<ExecutionReport, ExecutionError> {
        let mut attempt = self.state.clone();
        attempt.gas_left = self.tx_gas;
        let report = run(&mut Executor::new(&mut attempt, &self.oracle))?;
        self.state = attempt;
        Ok(report)
    }

    /// Every committed log of type `E`, in emission order.
    pub fn events<E: SolEvent>(&self) -> Vec<E> {
        self.state
            .logs
            .iter()
            .filter(|log| log.topics().first() == Some(&E::SIGNATURE_HASH))
            .map(|log| E::decode_log_data(log, true).expect("decode event"))
            .collect()
    }
}
