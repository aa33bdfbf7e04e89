#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    BankMsg, DepsMut, Empty, Env, Event, MessageInfo, Response, StdError, Uint128,
};
use cw2::set_contract_version;
use cw721_base::state::TokenInfo;
use cw721_base::ExecuteMsg as Cw721ExecuteMsg;
use cw_utils::{must_pay, nonpayable};
use semver::Version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::{Config, ADMIN, CONFIG, PAUSED, WHITELIST};

pub type DropContract<'a> = cw721_base::Cw721Contract<'a, cw721_base::Extension, Empty, Empty, Empty>;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:nft-drop";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = info.sender.clone();
    ADMIN.set(deps.branch(), Some(owner.clone()))?;
    PAUSED.save(deps.storage, &false)?;
    CONFIG.save(
        deps.storage,
        &Config {
            base_token_uri: msg.base_token_uri,
            unit_price: msg.unit_price,
            max_supply: msg.max_supply,
            max_per_mint: msg.max_per_mint,
            mint_start_time: msg.mint_start_time,
        },
    )?;

    // The contract mints into its own collection
    DropContract::default().instantiate(
        deps.branch(),
        env.clone(),
        info,
        cw721_base::InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            minter: env.contract.address.to_string(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { quantity } => execute_mint(deps, env, info, quantity),
        ExecuteMsg::AddToWhitelist { address } => execute_add_to_whitelist(deps, info, address),
        ExecuteMsg::RemoveFromWhitelist { address } => {
            execute_remove_from_whitelist(deps, info, address)
        }
        ExecuteMsg::Pause {} => execute_set_paused(deps, info, true),
        ExecuteMsg::Resume {} => execute_set_paused(deps, info, false),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => Ok(DropContract::default().execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::TransferNft {
                recipient,
                token_id,
            },
        )?),
        ExecuteMsg::SendNft {
            contract,
            token_id,
            msg,
        } => Ok(DropContract::default().execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            },
        )?),
        ExecuteMsg::Approve {
            spender,
            token_id,
            expires,
        } => Ok(DropContract::default().execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::Approve {
                spender,
                token_id,
                expires,
            },
        )?),
        ExecuteMsg::Revoke { spender, token_id } => Ok(DropContract::default().execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::Revoke { spender, token_id },
        )?),
        ExecuteMsg::ApproveAll { operator, expires } => Ok(DropContract::default().execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::ApproveAll { operator, expires },
        )?),
        ExecuteMsg::RevokeAll { operator } => Ok(DropContract::default().execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::RevokeAll { operator },
        )?),
    }
}

pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if PAUSED.load(deps.storage)? {
        return Err(ContractError::MintingPaused {});
    }
    if env.block.time < config.mint_start_time {
        return Err(ContractError::MintingNotStarted {});
    }
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }
    if quantity > config.max_per_mint {
        return Err(ContractError::MaxPerMintExceeded {
            max: config.max_per_mint,
        });
    }
    if !WHITELIST.has(deps.storage, info.sender.clone()) {
        return Err(ContractError::NotWhitelisted {
            addr: info.sender.to_string(),
        });
    }

    let contract = DropContract::default();
    let minted = contract.token_count(deps.storage)?;
    if minted + quantity as u64 > config.max_supply {
        return Err(ContractError::SoldOut {
            max_supply: config.max_supply,
        });
    }

    let expected = config
        .unit_price
        .amount
        .checked_mul(Uint128::from(quantity))
        .map_err(StdError::overflow)?;
    let payment = must_pay(&info, &config.unit_price.denom)?;
    if payment != expected {
        return Err(ContractError::IncorrectPayment {
            got: payment.u128(),
            expected: expected.u128(),
        });
    }

    // Sequential ids starting at 1, matching the metadata file names
    let mut token_ids: Vec<String> = Vec::with_capacity(quantity as usize);
    for _ in 0..quantity {
        let token_id = contract.increment_tokens(deps.storage)?.to_string();
        let token = TokenInfo {
            owner: info.sender.clone(),
            approvals: vec![],
            token_uri: Some(format!("{}{}.json", config.base_token_uri, token_id)),
            extension: None,
        };
        contract
            .tokens
            .update(deps.storage, &token_id, |old| match old {
                Some(_) => Err(ContractError::Base(cw721_base::ContractError::Claimed {})),
                None => Ok(token),
            })?;
        token_ids.push(token_id);
    }

    let event = Event::new("mint")
        .add_attribute("owner", info.sender)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("token_ids", token_ids.join(","));
    Ok(Response::new().add_event(event))
}

pub fn execute_add_to_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let addr = deps.api.addr_validate(&address)?;
    if WHITELIST.has(deps.storage, addr.clone()) {
        return Err(ContractError::AlreadyWhitelisted {
            addr: addr.to_string(),
        });
    }
    WHITELIST.save(deps.storage, addr, &Empty {})?;

    let event = Event::new("add_to_whitelist")
        .add_attribute("address", address)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_remove_from_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let addr = deps.api.addr_validate(&address)?;
    if !WHITELIST.has(deps.storage, addr.clone()) {
        return Err(ContractError::NotInWhitelist {
            addr: addr.to_string(),
        });
    }
    WHITELIST.remove(deps.storage, addr);

    let event = Event::new("remove_from_whitelist")
        .add_attribute("address", address)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    PAUSED.save(deps.storage, &paused)?;

    let action = if paused { "pause_minting" } else { "resume_minting" };
    let event = Event::new(action).add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let balance = deps.querier.query_all_balances(&env.contract.address)?;
    if balance.is_empty() {
        return Err(ContractError::NothingToWithdraw {});
    }

    let amount = balance
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: balance,
    };

    let event = Event::new("withdraw")
        .add_attribute("amount", amount)
        .add_attribute("recipient", info.sender);
    Ok(Response::new().add_message(msg).add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    let current_version = cw2::get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(StdError::generic_err("Cannot upgrade to a different contract").into());
    }
    let version: Version = current_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    if version > new_version {
        return Err(StdError::generic_err("Cannot upgrade to a previous contract version").into());
    }
    // if same version return
    if version == new_version {
        return Ok(Response::new());
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new())
}
