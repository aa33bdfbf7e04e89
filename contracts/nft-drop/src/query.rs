#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, Env, StdResult};
use cw721_base::QueryMsg as Cw721QueryMsg;

use crate::contract::DropContract;
use crate::msg::{ConfigResponse, QueryMsg};
use crate::state::{ADMIN, CONFIG, PAUSED, WHITELIST};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Whitelisted { address } => to_binary(&query_whitelisted(deps, address)?),
        QueryMsg::Paused {} => to_binary(&PAUSED.load(deps.storage)?),
        QueryMsg::OwnerOf {
            token_id,
            include_expired,
        } => DropContract::default().query(
            deps,
            env,
            Cw721QueryMsg::OwnerOf {
                token_id,
                include_expired,
            },
        ),
        QueryMsg::NftInfo { token_id } => {
            DropContract::default().query(deps, env, Cw721QueryMsg::NftInfo { token_id })
        }
        QueryMsg::NumTokens {} => {
            DropContract::default().query(deps, env, Cw721QueryMsg::NumTokens {})
        }
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => DropContract::default().query(
            deps,
            env,
            Cw721QueryMsg::Tokens {
                owner,
                start_after,
                limit,
            },
        ),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let contract_info = DropContract::default().contract_info.load(deps.storage)?;
    let owner = ADMIN.get(deps)?.map(|addr| addr.to_string());

    Ok(ConfigResponse {
        name: contract_info.name,
        symbol: contract_info.symbol,
        owner,
        base_token_uri: config.base_token_uri,
        unit_price: config.unit_price,
        max_supply: config.max_supply,
        max_per_mint: config.max_per_mint,
        mint_start_time: config.mint_start_time,
    })
}

fn query_whitelisted(deps: Deps, address: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(WHITELIST.has(deps.storage, addr))
}
