//! Protocol constants shared by the executor and off-chain tooling.

use alloy_primitives::U256;

/// EIP-712 domain name.
pub const DOMAIN_NAME: &str = "GaslessExecutor";

/// EIP-712 domain version.
pub const DOMAIN_VERSION: &str = "1";

/// Upper bound on the number of calls in one batch authorization.
pub const MAX_BATCH_SIZE: usize = 32;

/// Lower bound on the number of calls in one batch authorization.
pub const MIN_BATCH_SIZE: usize = 2;

/// Fixed-point scale of `FeeConfig.nativePricePerUnit` (1e18 = one native unit).
pub const PRICE_PRECISION: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Length of an ABI function selector.
pub const SELECTOR_LEN: usize = 4;
