use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Coin, Timestamp};
use cw721::Expiration;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub base_token_uri: String,
    pub unit_price: Coin,
    pub max_supply: u64,
    pub max_per_mint: u32,
    pub mint_start_time: Timestamp,
}

// Drop-specific msgs plus the cw721 base msgs the collection keeps
// supporting. Base variants are forwarded to cw721-base.
#[cw_serde]
pub enum ExecuteMsg {
    /// Mint `quantity` tokens to the sender, paying quantity * unit_price
    Mint { quantity: u32 },
    /// Allow an account to mint. Admin only
    AddToWhitelist { address: String },
    /// Revoke an account's minting rights. Admin only
    RemoveFromWhitelist { address: String },
    /// Stop minting. Admin only
    Pause {},
    /// Reopen minting. Admin only
    Resume {},
    /// Send the full contract balance to the admin. Admin only
    Withdraw {},
    /// Transfer is a base message to move a token to another account without triggering actions
    TransferNft { recipient: String, token_id: String },
    /// Send is a base message to transfer a token to a contract and trigger an action
    /// on the receiving contract.
    SendNft {
        contract: String,
        token_id: String,
        msg: Binary,
    },
    /// Allows operator to transfer / send the token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted Approval
    Revoke { spender: String, token_id: String },
    /// Allows operator to transfer / send any token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted ApproveAll permission
    RevokeAll { operator: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(bool)]
    Whitelisted { address: String },
    #[returns(bool)]
    Paused {},
    #[returns(cw721::OwnerOfResponse)]
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
    #[returns(cw721::NftInfoResponse<cw721_base::Extension>)]
    NftInfo { token_id: String },
    #[returns(cw721::NumTokensResponse)]
    NumTokens {},
    #[returns(cw721::TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub name: String,
    pub symbol: String,
    pub owner: Option<String>,
    pub base_token_uri: String,
    pub unit_price: Coin,
    pub max_supply: u64,
    pub max_per_mint: u32,
    pub mint_start_time: Timestamp,
}
