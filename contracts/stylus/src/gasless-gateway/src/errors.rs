use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    error InvalidDelegate(address account, address expected, address actual);
    /// The expected executor is the zero address: rejected at deployment, and what an
    /// unconstructed gateway reads back.
    #[derive(Debug, PartialEq, Eq)]
    error InvalidImplementation(address implementation);
}

#[derive(SolidityError, Debug, PartialEq, Eq)]
pub enum GatewayError {
    InvalidDelegate(InvalidDelegate),
    InvalidImplementation(InvalidImplementation),
}
