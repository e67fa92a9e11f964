use std::fmt;

use alloy_primitives::{keccak256, Address, B256};
use gasless_executor_types::{
    authorization_digest, batch_authorization_digest, Authorization, BatchAuthorization,
};
use k256::{
    ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
};

/// Errors while signing or recovering.
#[derive(Debug)]
pub enum SignerError {
    Ecdsa(k256::ecdsa::Error),
    InvalidKeyHex(hex::FromHexError),
    InvalidSignatureLength(usize),
    InvalidRecoveryByte(u8),
}

impl fmt::Display for SignerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ecdsa(err) => write!(f, "ecdsa: {err}"),
            Self::InvalidKeyHex(err) => write!(f, "invalid private key hex: {err}"),
            Self::InvalidSignatureLength(len) => write!(f, "signature must be 65 bytes, got {len}"),
            Self::InvalidRecoveryByte(v) => write!(f, "unsupported signature v byte {v}"),
        }
    }
}

impl std::error::Error for SignerError {}

impl From<k256::ecdsa::Error> for SignerError {
    fn from(err: k256::ecdsa::Error) -> Self {
        Self::Ecdsa(err)
    }
}

/// Parse a secp256k1 private key from hex, with or without `0x`.
pub fn signing_key_from_hex(key: &str) -> Result<SigningKey, SignerError> {
    let bytes = hex::decode(key.trim().trim_start_matches("0x")).map_err(SignerError::InvalidKeyHex)?;
    Ok(SigningKey::from_slice(&bytes)?)
}

/// Ethereum address controlled by `key`.
pub fn signer_address(key: &SigningKey) -> Address {
    address_of(key.verifying_key())
}

fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    // Uncompressed SEC1 encoding is 0x04 || x || y; the address hashes x || y.
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

/// Sign a 32-byte digest into the `r || s || v` layout the executor expects (`v` in {27, 28}).
pub fn sign_digest(key: &SigningKey, digest: B256) -> Result<[u8; 65], SignerError> {
    let (signature, recovery_id) = key.sign_prehash_recoverable(digest.as_slice())?;
    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&signature.to_bytes());
    out[64] = 27 + recovery_id.to_byte();
    Ok(out)
}

/// Sign a single-call authorization for `executor` (the delegated account) on `chain_id`.
pub fn sign_authorization(
    authorization: &Authorization,
    chain_id: u64,
    executor: Address,
    key: &SigningKey,
) -> Result<Vec<u8>, SignerError> {
    let digest = authorization_digest(authorization, chain_id, executor);
    Ok(sign_digest(key, digest)?.to_vec())
}

pub fn sign_batch_authorization(
    authorization: &BatchAuthorization,
    chain_id: u64,
    executor: Address,
    key: &SigningKey,
) -> Result<Vec<u8>, SignerError> {
    let digest = batch_authorization_digest(authorization, chain_id, executor);
    Ok(sign_digest(key, digest)?.to_vec())
}

/// Recover the address that produced `signature` over `digest`. Accepts `v` in {0, 1, 27, 28}.
pub fn recover_signer(digest: B256, signature: &[u8]) -> Result<Address, SignerError> {
    if signature.len() != 65 {
        return Err(SignerError::InvalidSignatureLength(signature.len()));
    }
    let v = signature[64];
    let recovery_byte = match v {
        27 | 28 => v - 27,
        0 | 1 => v,
        _ => return Err(SignerError::InvalidRecoveryByte(v)),
    };
    let recovery_id = RecoveryId::from_byte(recovery_byte).ok_or(SignerError::InvalidRecoveryByte(v))?;
    let signature = Signature::from_slice(&signature[..64])?;
    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id)?;
    Ok(address_of(&key))
}
