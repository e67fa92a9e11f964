//! Off-chain counterpart of the gasless executor: the account owner signs authorizations here,
//! and relayers encode the resulting calldata.

pub mod calldata;
pub mod signer;


pub use calldata::{execute_batch_calldata, execute_one_calldata, forward_batch_calldata, forward_calldata};
pub use signer::{
    recover_signer, sign_authorization, sign_batch_authorization, sign_digest, signer_address,
    signing_key_from_hex, SignerError,
};
