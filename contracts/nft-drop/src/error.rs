use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    Base(#[from] cw721_base::ContractError),

    #[error("MintingPaused")]
    MintingPaused {},

    #[error("MintingNotStarted")]
    MintingNotStarted {},

    #[error("NotWhitelisted: {addr}")]
    NotWhitelisted { addr: String },

    #[error("InvalidQuantity")]
    InvalidQuantity {},

    #[error("MaxPerMintExceeded: limit {max}")]
    MaxPerMintExceeded { max: u32 },

    #[error("SoldOut: max supply {max_supply}")]
    SoldOut { max_supply: u64 },

    #[error("IncorrectPayment: got {got}, expected {expected}")]
    IncorrectPayment { got: u128, expected: u128 },

    #[error("AlreadyWhitelisted: {addr}")]
    AlreadyWhitelisted { addr: String },

    #[error("NotInWhitelist: {addr}")]
    NotInWhitelist { addr: String },

    #[error("NothingToWithdraw")]
    NothingToWithdraw {},
}
