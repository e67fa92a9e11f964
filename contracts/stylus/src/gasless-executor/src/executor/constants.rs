//! Gas bookkeeping constants of the engine.

/// Gas kept back after a forwarded call for the engine's own follow-up work
/// (completion event, fee arithmetic).
pub const POST_CALL_OVERHEAD_GAS: u64 = 10_000;

/// Extra gas kept back for batch loop bookkeeping.
pub const BATCH_OVERHEAD_GAS: u64 = 5_000;

/// The host retains `1/RETENTION_DIVISOR` of the remaining gas on every sub-call (EIP-150).
pub const RETENTION_DIVISOR: u64 = 64;
