use cosmwasm_std::{Coin, CosmosMsg, StdError, Uint128};
use nft_drop::helpers::NftDropContract;

use crate::error::ClientError;

/// Strips everything but digits, mirroring the form's input filter. Runs
/// as the user types, independently of submit-time validation.
pub fn sanitize_quantity(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Accepts one or more digits with no leading zero: a positive integer.
pub fn parse_quantity(input: &str) -> Result<u32, ClientError> {
    let mut chars = input.chars();
    let valid = matches!(chars.next(), Some('1'..='9')) && chars.all(|c| c.is_ascii_digit());
    if !valid {
        return Err(ClientError::InvalidQuantity {
            input: input.to_string(),
        });
    }
    input.parse().map_err(|_| ClientError::InvalidQuantity {
        input: input.to_string(),
    })
}

/// One mint submission. Lives only long enough to compute the payment and
/// build the transaction; nothing is cached on success or failure.
#[derive(Clone, Debug, PartialEq)]
pub struct MintRequest {
    pub quantity: u32,
    pub unit_price: Coin,
}

impl MintRequest {
    /// Validates the raw quantity field and binds it to the current price.
    pub fn new(input: &str, unit_price: Coin) -> Result<Self, ClientError> {
        Ok(MintRequest {
            quantity: parse_quantity(input)?,
            unit_price,
        })
    }

    /// Total payment is unit price times quantity.
    pub fn total_payment(&self) -> Result<Coin, ClientError> {
        let amount = self
            .unit_price
            .amount
            .checked_mul(Uint128::from(self.quantity))
            .map_err(StdError::overflow)?;
        Ok(Coin {
            denom: self.unit_price.denom.clone(),
            amount,
        })
    }

    /// The single mint transaction, carrying quantity and payment.
    pub fn into_msg(self, contract: &NftDropContract) -> Result<CosmosMsg, ClientError> {
        let payment = self.total_payment()?;
        Ok(contract.mint(self.quantity, payment)?)
    }
}
