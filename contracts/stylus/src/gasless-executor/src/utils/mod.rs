//! Calldata and signature helpers for the on-chain side of the executor.

pub mod bytes;
pub mod crypto;
