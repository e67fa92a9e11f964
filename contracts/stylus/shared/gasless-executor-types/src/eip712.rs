//! EIP-712 domain and digests for executor authorizations.
//!
//! The domain binds the protocol name/version, the chain id, and the executing account as
//! `verifyingContract`, so a signature is only valid for one account on one chain.

use alloc::borrow::Cow;

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::{Eip712Domain, SolStruct};

use crate::{
    authorization::{Authorization, BatchAuthorization},
    constants::{DOMAIN_NAME, DOMAIN_VERSION},
};

pub fn executor_domain(chain_id: u64, executor: Address) -> Eip712Domain {
    Eip712Domain::new(
        Some(Cow::Borrowed(DOMAIN_NAME)),
        Some(Cow::Borrowed(DOMAIN_VERSION)),
        Some(U256::from(chain_id)),
        Some(executor),
        None,
    )
}

pub fn domain_separator(chain_id: u64, executor: Address) -> B256 {
    executor_domain(chain_id, executor).separator()
}

/// Digest the executor's own key must sign for a single-call authorization.
pub fn authorization_digest(authorization: &Authorization, chain_id: u64, executor: Address) -> B256 {
    authorization.eip712_signing_hash(&executor_domain(chain_id, executor))
}

/// Digest for a batch authorization; covers the full ordered call list.
pub fn batch_authorization_digest(
    authorization: &BatchAuthorization,
    chain_id: u64,
    executor: Address,
) -> B256 {
    authorization.eip712_signing_hash(&executor_domain(chain_id, executor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorization::{Call, FeeConfig};
    use alloy_primitives::Bytes;

    fn sample() -> Authorization {
        Authorization {
            call: Call {
                target: Address::repeat_byte(0x11),
                value: U256::from(7u64),
                gasLimit: U256::from(50_000u64),
                data: Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]),
            },
            fee: FeeConfig::disabled(),
            nonce: U256::ZERO,
        }
    }

    #[test]
    fn type_strings_follow_canonical_field_order() {
        assert_eq!(
            Authorization::eip712_encode_type(),
            "Authorization(Call call,FeeConfig fee,uint256 nonce)\
             Call(address target,uint256 value,uint256 gasLimit,bytes data)\
             FeeConfig(address feeToken,uint256 maxFee,uint256 nativePricePerUnit,uint256 transferGasBudget,uint256 fixedOverhead,address feeReceiver)"
        );
        assert_eq!(
            BatchAuthorization::eip712_encode_type(),
            "BatchAuthorization(Call[] calls,FeeConfig fee,uint256 nonce)\
             Call(address target,uint256 value,uint256 gasLimit,bytes data)\
             FeeConfig(address feeToken,uint256 maxFee,uint256 nativePricePerUnit,uint256 transferGasBudget,uint256 fixedOverhead,address feeReceiver)"
        );
    }

    #[test]
    fn digest_is_bound_to_chain_and_account() {
        let auth = sample();
        let account = Address::repeat_byte(0xaa);
        let base = authorization_digest(&auth, 42161, account);

        assert_eq!(base, authorization_digest(&auth, 42161, account));
        assert_ne!(base, authorization_digest(&auth, 1, account));
        assert_ne!(base, authorization_digest(&auth, 42161, Address::repeat_byte(0xbb)));

        let mut bumped = auth.clone();
        bumped.nonce = U256::from(1u64);
        assert_ne!(base, authorization_digest(&bumped, 42161, account));
    }

    #[test]
    fn batch_digest_depends_on_call_order() {
        let first = sample().call;
        let mut second = sample().call;
        second.target = Address::repeat_byte(0x22);
        let account = Address::repeat_byte(0xaa);

        let forward = BatchAuthorization {
            calls: alloc::vec![first.clone(), second.clone()],
            fee: FeeConfig::disabled(),
            nonce: U256::ZERO,
        };
        let reversed = BatchAuthorization { calls: alloc::vec![second, first], ..forward.clone() };

        assert_ne!(
            batch_authorization_digest(&forward, 1, account),
            batch_authorization_digest(&reversed, 1, account)
        );
    }

    #[test]
    fn separator_matches_domain_hash() {
        let account = Address::repeat_byte(0xaa);
        assert_eq!(domain_separator(1, account), executor_domain(1, account).hash_struct());
    }
}
