use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_binary, Addr, Coin, CosmosMsg, QuerierWrapper, StdResult, WasmMsg};
use cw721::{NftInfoResponse, NumTokensResponse, TokensResponse};

use crate::msg::{ConfigResponse, ExecuteMsg, QueryMsg};

/// NftDropContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct NftDropContract(pub Addr);

impl NftDropContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    /// A mint carries its payment as transaction funds
    pub fn mint(&self, quantity: u32, payment: Coin) -> StdResult<CosmosMsg> {
        let msg = to_binary(&ExecuteMsg::Mint { quantity })?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![payment],
        }
        .into())
    }

    pub fn whitelisted(&self, querier: &QuerierWrapper, address: impl Into<String>) -> StdResult<bool> {
        querier.query_wasm_smart(
            self.addr(),
            &QueryMsg::Whitelisted {
                address: address.into(),
            },
        )
    }

    pub fn paused(&self, querier: &QuerierWrapper) -> StdResult<bool> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Paused {})
    }

    pub fn config(&self, querier: &QuerierWrapper) -> StdResult<ConfigResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Config {})
    }

    pub fn num_tokens(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        let res: NumTokensResponse = querier.query_wasm_smart(self.addr(), &QueryMsg::NumTokens {})?;
        Ok(res.count)
    }

    /// All token ids owned by `owner`
    pub fn tokens(&self, querier: &QuerierWrapper, owner: impl Into<String>) -> StdResult<Vec<String>> {
        let res: TokensResponse = querier.query_wasm_smart(
            self.addr(),
            &QueryMsg::Tokens {
                owner: owner.into(),
                start_after: None,
                limit: None,
            },
        )?;
        Ok(res.tokens)
    }

    pub fn token_uri(&self, querier: &QuerierWrapper, token_id: impl Into<String>) -> StdResult<Option<String>> {
        let res: NftInfoResponse<cw721_base::Extension> = querier.query_wasm_smart(
            self.addr(),
            &QueryMsg::NftInfo {
                token_id: token_id.into(),
            },
        )?;
        Ok(res.token_uri)
    }
}
