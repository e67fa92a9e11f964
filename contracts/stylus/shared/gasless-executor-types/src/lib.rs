//! Shared types for signed authorizations, the executor ABI, and EIP-712 hashing.
//!
//! Used on-chain by the Stylus contracts and off-chain by the signer tooling, so everything here
//! stays `no_std` and deterministic.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod authorization;
pub mod constants;
pub mod eip712;

pub use authorization::{
    Authorization, AuthorizationParts, BatchAuthorization, BatchAuthorizationParts, Call,
    CallParts, FeeConfig, FeeConfigParts, IGaslessExecutor, IGaslessGateway,
};
pub use eip712::{authorization_digest, batch_authorization_digest, domain_separator, executor_domain};
