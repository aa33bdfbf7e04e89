use cosmwasm_std::StdError;
use thiserror::Error;

/// Failures come in two kinds: bad input caught before any message is
/// built, and anything that came back from the chain. Chain errors are not
/// decoded further; the contract's revert reason is not surfaced.
#[derive(Error, Debug, PartialEq)]
pub enum ClientError {
    #[error("invalid quantity {input:?}: enter a positive whole number")]
    InvalidQuantity { input: String },

    #[error("chain interaction failed: {0}")]
    Chain(#[from] StdError),
}
