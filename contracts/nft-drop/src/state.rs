use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Empty, Timestamp};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Prefix for token metadata, e.g. "ipfs://<cid>/"
    pub base_token_uri: String,
    /// Price per token, paid in full with every mint
    pub unit_price: Coin,
    pub max_supply: u64,
    /// Cap on tokens minted in a single transaction
    pub max_per_mint: u32,
    /// Minting rejected before this time
    pub mint_start_time: Timestamp,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const ADMIN: Admin = Admin::new("admin");

/// Controls if minting is paused or not by admin
pub const PAUSED: Item<bool> = Item::new("paused");

/// Accounts allowed to mint
pub const WHITELIST: Map<Addr, Empty> = Map::new("wl");
