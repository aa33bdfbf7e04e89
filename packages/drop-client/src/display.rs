use cosmwasm_std::{Addr, Coin, QuerierWrapper};
use nft_drop::helpers::NftDropContract;

use crate::error::ClientError;

/// Public gateway used to turn metadata URIs into fetchable image URLs.
/// No caching or content verification happens on the client.
pub const IPFS_GATEWAY: &str = "https://gateway.pinata.cloud/";

pub fn gateway_url(uri: &str) -> String {
    format!("{}{}", IPFS_GATEWAY, uri)
}

/// The numbers rendered above the gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct DropSummary {
    pub unit_price: Coin,
    pub max_supply: u64,
    pub total_supply: u64,
    /// How many tokens the viewing account owns
    pub balance: u64,
}

impl DropSummary {
    pub fn fetch(
        querier: &QuerierWrapper,
        contract: &NftDropContract,
        account: &Addr,
    ) -> Result<Self, ClientError> {
        let config = contract.config(querier)?;
        let total_supply = contract.num_tokens(querier)?;
        let balance = contract.tokens(querier, account.to_string())?.len() as u64;
        Ok(DropSummary {
            unit_price: config.unit_price,
            max_supply: config.max_supply,
            total_supply,
            balance,
        })
    }

    /// Tokens still available to mint.
    pub fn available(&self) -> u64 {
        self.max_supply.saturating_sub(self.total_supply)
    }
}

/// One owned token and its metadata URI.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenDisplay {
    pub token_id: String,
    pub uri: String,
}

/// Owned tokens paired with their metadata URIs. Ids and URIs are zipped
/// per entry, so the rendered counts always match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenGallery {
    pub tokens: Vec<TokenDisplay>,
}

impl TokenGallery {
    /// One owned-token-id query, then the URI for each id.
    pub fn fetch(
        querier: &QuerierWrapper,
        contract: &NftDropContract,
        owner: &Addr,
    ) -> Result<Self, ClientError> {
        let ids = contract.tokens(querier, owner.to_string())?;
        let mut tokens = Vec::with_capacity(ids.len());
        for token_id in ids {
            let uri = contract
                .token_uri(querier, token_id.clone())?
                .unwrap_or_default();
            tokens.push(TokenDisplay { token_id, uri });
        }
        Ok(TokenGallery { tokens })
    }

    /// Any failure collapses to the empty state; partial lists are never
    /// shown and nothing is retried.
    pub fn fetch_or_empty(
        querier: &QuerierWrapper,
        contract: &NftDropContract,
        owner: &Addr,
    ) -> Self {
        Self::fetch(querier, contract, owner).unwrap_or_default()
    }

    pub fn image_urls(&self) -> Vec<String> {
        self.tokens.iter().map(|t| gateway_url(&t.uri)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::coin;

    fn summary(max_supply: u64, total_supply: u64) -> DropSummary {
        DropSummary {
            unit_price: coin(10, "ustars"),
            max_supply,
            total_supply,
            balance: 0,
        }
    }

    #[test]
    fn available_is_max_minus_total() {
        assert_eq!(summary(25, 0).available(), 25);
        assert_eq!(summary(25, 3).available(), 22);
        assert_eq!(summary(5, 5).available(), 0);
    }

    #[test]
    fn gateway_url_prefixes_the_uri() {
        assert_eq!(
            gateway_url("ipfs://abc/1.json"),
            "https://gateway.pinata.cloud/ipfs://abc/1.json"
        );
    }

    #[test]
    fn image_urls_match_token_count() {
        let gallery = TokenGallery {
            tokens: vec![
                TokenDisplay {
                    token_id: "1".to_string(),
                    uri: "ipfs://abc/1.json".to_string(),
                },
                TokenDisplay {
                    token_id: "2".to_string(),
                    uri: "ipfs://abc/2.json".to_string(),
                },
            ],
        };
        assert_eq!(gallery.image_urls().len(), gallery.tokens.len());
    }
}
