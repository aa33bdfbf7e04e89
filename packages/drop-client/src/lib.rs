//! Client-side workflow for the nft-drop collection: the whitelist gate in
//! front of the mint form, quantity validation, payment computation, and
//! the owned-token display. Everything on-chain stays in the contract; this
//! crate only reads state and builds transactions.

pub mod display;
mod error;
pub mod gate;
pub mod mint;

pub use crate::error::ClientError;
