//! Authorization verifier: replay nonce first, then signer recovery.

use alloy_primitives::{Address, B256, U256};

use super::Executor;
use crate::{
    errors::{ExecutionError, ExecutorError, InvalidNonce, InvalidSigner},
    host::Host,
};

impl<H: Host, O> Executor<'_, H, O> {
    /// Check `provided` against the stored nonce and that `signature` over `digest` was made by
    /// the executing account itself, then consume the nonce. Returns the consumed nonce.
    ///
    /// The nonce check runs first so stale or replayed payloads never reach recovery. The nonce
    /// is advanced before any call is forwarded.
    pub(super) fn verify_authorization(
        &mut self,
        provided: U256,
        digest: B256,
        signature: &[u8],
    ) -> Result<U256, ExecutionError> {
        let expected = self.host.current_nonce();
        if provided != expected {
            return Err(ExecutorError::InvalidNonce(InvalidNonce { expected, provided }).into());
        }

        let executor = self.host.executor();
        let recovered = self.host.recover(digest, signature).unwrap_or(Address::ZERO);
        if recovered != executor {
            return Err(ExecutorError::InvalidSigner(InvalidSigner { recovered, expected: executor }).into());
        }

        self.host.advance_nonce();
        Ok(expected)
    }
}
